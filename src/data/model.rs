use std::path::PathBuf;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// TimeSeriesRow – one row of canada_vs_oecd_timeseries.csv
// ---------------------------------------------------------------------------

/// One observation of the Canada-vs-OECD time series: a COICOP category in a
/// given year, with CPI and household expenditure figures for Canada and the
/// OECD average side by side.
///
/// Numeric cells may be empty in the upstream export; those deserialize to
/// `NaN` rather than failing the whole load.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesRow {
    /// COICOP category code, e.g. `CP01`.
    pub category: String,
    pub year: i32,
    /// CPI annual average (%), Canada.
    #[serde(deserialize_with = "super::loader::f64_or_nan")]
    pub can_cpi: f64,
    /// CPI annual average (%), OECD average.
    #[serde(deserialize_with = "super::loader::f64_or_nan")]
    pub oecd_cpi: f64,
    /// Expenditure share of total, Canada.
    #[serde(deserialize_with = "super::loader::f64_or_nan")]
    pub can_exp_share: f64,
    /// Expenditure share of total, OECD average.
    #[serde(deserialize_with = "super::loader::f64_or_nan")]
    pub oecd_exp_share: f64,
    /// Year-over-year expenditure growth, Canada.
    #[serde(deserialize_with = "super::loader::f64_or_nan")]
    pub can_exp_growth: f64,
    /// Year-over-year expenditure growth, OECD average.
    #[serde(deserialize_with = "super::loader::f64_or_nan")]
    pub oecd_exp_growth: f64,
}

// ---------------------------------------------------------------------------
// ClusterRow – one row of cluster_results.csv
// ---------------------------------------------------------------------------

/// Cluster membership of a single country. `country` is an ISO3 code and is
/// unique within the file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterRow {
    pub country: String,
    pub cluster: u32,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dashboard data
// ---------------------------------------------------------------------------

/// Both tables, loaded once and read-only for the rest of the session.
/// Consumers borrow from this; nothing mutates it after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Directory the CSV files were read from.
    pub data_dir: PathBuf,
    pub series: Vec<TimeSeriesRow>,
    pub clusters: Vec<ClusterRow>,
}

impl Dataset {
    /// Number of distinct countries in the cluster table.
    pub fn country_count(&self) -> usize {
        let mut codes: Vec<&str> = self.clusters.iter().map(|c| c.country.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        codes.len()
    }
}
