use std::collections::BTreeMap;

use super::model::{ClusterRow, TimeSeriesRow};

// ---------------------------------------------------------------------------
// Filter & aggregate engine
// ---------------------------------------------------------------------------
//
// Pure functions over the loaded tables. Every widget change triggers a full
// recomputation pass; the tables are small enough that a linear scan per
// interaction is the whole performance story.

/// Distinct non-empty category codes, ascending lexical order.
pub fn available_categories(series: &[TimeSeriesRow]) -> Vec<String> {
    let mut cats: Vec<String> = series
        .iter()
        .filter(|r| !r.category.is_empty())
        .map(|r| r.category.clone())
        .collect();
    cats.sort_unstable();
    cats.dedup();
    cats
}

/// Distinct years, ascending numeric order.
pub fn available_years(series: &[TimeSeriesRow]) -> Vec<i32> {
    let mut years: Vec<i32> = series.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Rows matching the selected category with `year_min <= year <= year_max`,
/// inclusive on both ends. An empty result is a valid outcome, not an error.
pub fn filter_series<'a>(
    series: &'a [TimeSeriesRow],
    category: &str,
    year_min: i32,
    year_max: i32,
) -> Vec<&'a TimeSeriesRow> {
    series
        .iter()
        .filter(|r| r.category == category && r.year >= year_min && r.year <= year_max)
        .collect()
}

/// The row with maximal year, or `None` on empty input. When two rows share
/// the max year the first one wins; year is expected unique per category, so
/// callers must not rely on the tie-break.
pub fn latest_summary<'a>(filtered: &[&'a TimeSeriesRow]) -> Option<&'a TimeSeriesRow> {
    filtered
        .iter()
        .copied()
        .reduce(|best, r| if r.year > best.year { r } else { best })
}

/// Countries per cluster label, ordered by label.
pub fn cluster_counts(clusters: &[ClusterRow]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for row in clusters {
        *counts.entry(row.cluster).or_insert(0) += 1;
    }
    counts
}

/// Cluster label for an ISO3 country code, `None` if the country is absent.
pub fn lookup_country_cluster(clusters: &[ClusterRow], country: &str) -> Option<u32> {
    clusters
        .iter()
        .find(|r| r.country == country)
        .map(|r| r.cluster)
}

/// All countries carrying the given cluster label, in file order.
pub fn cluster_peers(clusters: &[ClusterRow], label: u32) -> Vec<&ClusterRow> {
    clusters.iter().filter(|r| r.cluster == label).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, year: i32, can_cpi: f64, oecd_cpi: f64) -> TimeSeriesRow {
        TimeSeriesRow {
            category: category.to_string(),
            year,
            can_cpi,
            oecd_cpi,
            can_exp_share: 0.1,
            oecd_exp_share: 0.1,
            can_exp_growth: 0.0,
            oecd_exp_growth: 0.0,
        }
    }

    fn cluster(country: &str, label: u32) -> ClusterRow {
        ClusterRow {
            country: country.to_string(),
            cluster: label,
        }
    }

    fn sample_series() -> Vec<TimeSeriesRow> {
        vec![
            row("CP01", 2020, 1.2, 2.0),
            row("CP01", 2021, 2.8, 2.2),
            row("CP01", 2022, 3.4, 2.5),
            row("CP041", 2020, 0.9, 1.1),
            row("CP041", 2022, 2.0, 1.8),
        ]
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let series = sample_series();
        assert_eq!(available_categories(&series), vec!["CP01", "CP041"]);
    }

    #[test]
    fn years_are_sorted_and_distinct() {
        let series = sample_series();
        assert_eq!(available_years(&series), vec![2020, 2021, 2022]);
    }

    #[test]
    fn filter_honours_category_and_inclusive_year_bounds() {
        let series = sample_series();
        let hit = filter_series(&series, "CP01", 2020, 2021);
        assert_eq!(hit.len(), 2);
        for r in &hit {
            assert_eq!(r.category, "CP01");
            assert!((2020..=2021).contains(&r.year));
        }
    }

    #[test]
    fn full_range_filter_returns_every_row_of_the_category() {
        let series = sample_series();
        let all = filter_series(&series, "CP041", 2020, 2022);
        let expected = series.iter().filter(|r| r.category == "CP041").count();
        assert_eq!(all.len(), expected);
    }

    #[test]
    fn filter_miss_is_empty_not_an_error() {
        let series = sample_series();
        assert!(filter_series(&series, "CP041", 2021, 2021).is_empty());
        assert!(filter_series(&series, "CP09", 2020, 2022).is_empty());
    }

    #[test]
    fn latest_summary_picks_the_max_year() {
        let series = sample_series();
        let filtered = filter_series(&series, "CP01", 2020, 2022);
        let latest = latest_summary(&filtered).unwrap();
        assert_eq!(latest.year, 2022);
        assert_eq!(latest.can_cpi, 3.4);
        let max_year = filtered.iter().map(|r| r.year).max().unwrap();
        assert_eq!(latest.year, max_year);
    }

    #[test]
    fn latest_summary_of_empty_set_is_none() {
        assert!(latest_summary(&[]).is_none());
    }

    #[test]
    fn cluster_counts_cover_every_label_and_sum_to_total() {
        let clusters = vec![
            cluster("CAN", 2),
            cluster("DEU", 1),
            cluster("FRA", 1),
            cluster("JPN", 0),
        ];
        let counts = cluster_counts(&clusters);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&1], 2);
        assert_eq!(counts.values().sum::<usize>(), clusters.len());
        // BTreeMap iterates in ascending label order
        let labels: Vec<u32> = counts.keys().copied().collect();
        assert_eq!(labels, vec![0, 1, 2]);
    }

    #[test]
    fn country_lookup_hit_and_miss() {
        let clusters = vec![cluster("CAN", 2), cluster("DEU", 1)];
        assert_eq!(lookup_country_cluster(&clusters, "CAN"), Some(2));
        assert_eq!(lookup_country_cluster(&clusters, "USA"), None);
    }

    #[test]
    fn peers_share_the_label() {
        let clusters = vec![
            cluster("CAN", 2),
            cluster("DEU", 1),
            cluster("SWE", 2),
        ];
        let peers = cluster_peers(&clusters, 2);
        assert_eq!(peers.len(), 2);
        assert!(peers.iter().all(|p| p.cluster == 2));
    }
}
