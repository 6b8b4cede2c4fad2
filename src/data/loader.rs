use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{ClusterRow, Dataset, TimeSeriesRow};

// ---------------------------------------------------------------------------
// Fixed input file names
// ---------------------------------------------------------------------------

/// Canada-vs-OECD time series export.
pub const TIMESERIES_FILE: &str = "canada_vs_oecd_timeseries.csv";
/// Country clustering export.
pub const CLUSTERS_FILE: &str = "cluster_results.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load-time failure. There is no partial load: if either file fails,
/// the caller keeps no dataset at all.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("missing input file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("{file}: {source}")]
    Open {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{file}, row {row}: {source}")]
    BadRow {
        file: String,
        /// 1-based line number in the file (header is line 1).
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{0} contains a header but no data rows")]
    Empty(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both dashboard tables from `dir`. Both files must be present and
/// fully parsable.
pub fn load_dir(dir: &Path) -> Result<Dataset, DataLoadError> {
    let series: Vec<TimeSeriesRow> = load_table(&dir.join(TIMESERIES_FILE))?;
    let clusters: Vec<ClusterRow> = load_table(&dir.join(CLUSTERS_FILE))?;

    Ok(Dataset {
        data_dir: dir.to_path_buf(),
        series,
        clusters,
    })
}

/// Read a whole CSV file into typed rows. Each row is validated once here so
/// downstream code never does stringly-typed column lookups.
fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataLoadError> {
    if !path.is_file() {
        return Err(DataLoadError::MissingFile(path.to_path_buf()));
    }
    let file = short_name(path);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DataLoadError::Open {
            file: file.clone(),
            source,
        })?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let row: T = result.map_err(|source| DataLoadError::BadRow {
            file: file.clone(),
            row: i + 2, // line 1 is the header
            source,
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataLoadError::Empty(file));
    }
    Ok(rows)
}

fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Deserialize a numeric cell that may be empty. The upstream export leaves
/// cells blank where an observation is missing; those become `NaN` instead of
/// rejecting the row.
pub fn f64_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(f64::NAN),
        Some(text) => text.parse::<f64>().map_err(serde::de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    const TS_HEADER: &str =
        "category,year,can_cpi,oecd_cpi,can_exp_share,oecd_exp_share,can_exp_growth,oecd_exp_growth";

    fn write_timeseries(dir: &Path, body: &str) {
        fs::write(
            dir.join(TIMESERIES_FILE),
            format!("{TS_HEADER}\n{body}"),
        )
        .unwrap();
    }

    fn write_clusters(dir: &Path, body: &str) {
        fs::write(dir.join(CLUSTERS_FILE), format!("country,cluster\n{body}")).unwrap();
    }

    #[test]
    fn loads_both_tables() {
        let dir = tempdir().unwrap();
        write_timeseries(
            dir.path(),
            "CP01,2020,1.2,2.0,0.15,0.14,0.03,0.02\nCP01,2021,3.4,2.5,0.16,0.14,0.05,0.03\n",
        );
        write_clusters(dir.path(), "CAN,2\nDEU,1\nFRA,1\n");

        let ds = load_dir(dir.path()).unwrap();
        assert_eq!(ds.series.len(), 2);
        assert_eq!(ds.clusters.len(), 3);
        assert_eq!(ds.series[0].category, "CP01");
        assert_eq!(ds.series[1].year, 2021);
        assert_eq!(ds.series[1].can_cpi, 3.4);
        assert_eq!(ds.clusters[0].country, "CAN");
        assert_eq!(ds.clusters[0].cluster, 2);
        assert_eq!(ds.country_count(), 3);
    }

    #[test]
    fn empty_numeric_cells_become_nan() {
        let dir = tempdir().unwrap();
        write_timeseries(dir.path(), "CP041,2022,,2.5,0.16,,0.05,0.03\n");
        write_clusters(dir.path(), "CAN,0\n");

        let ds = load_dir(dir.path()).unwrap();
        assert!(ds.series[0].can_cpi.is_nan());
        assert!(ds.series[0].oecd_exp_share.is_nan());
        assert_eq!(ds.series[0].oecd_cpi, 2.5);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        write_timeseries(dir.path(), "CP01,2020,1.2,2.0,0.15,0.14,0.03,0.02\n");
        // no cluster file

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingFile(_)));
    }

    #[test]
    fn malformed_row_reports_file_and_line() {
        let dir = tempdir().unwrap();
        write_timeseries(
            dir.path(),
            "CP01,2020,1.2,2.0,0.15,0.14,0.03,0.02\nCP01,not-a-year,1.0,1.0,0.1,0.1,0.0,0.0\n",
        );
        write_clusters(dir.path(), "CAN,0\n");

        let err = load_dir(dir.path()).unwrap_err();
        match err {
            DataLoadError::BadRow { file, row, .. } => {
                assert_eq!(file, TIMESERIES_FILE);
                assert_eq!(row, 3);
            }
            other => panic!("expected BadRow, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_rejected() {
        let dir = tempdir().unwrap();
        write_timeseries(dir.path(), "");
        write_clusters(dir.path(), "CAN,0\n");

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::Empty(f) if f == TIMESERIES_FILE));
    }
}
