/// Data layer: core types, loading, and the filter/aggregate engine.
///
/// Architecture:
/// ```text
///  canada_vs_oecd_timeseries.csv   cluster_results.csv
///               │                          │
///               └──────────┬───────────────┘
///                          ▼
///                    ┌──────────┐
///                    │  loader   │  parse both files → Dataset
///                    └──────────┘
///                          │
///                          ▼
///                    ┌──────────┐
///                    │  Dataset  │  Vec<TimeSeriesRow>, Vec<ClusterRow>
///                    └──────────┘
///                          │
///                          ▼
///                    ┌──────────┐
///                    │  filter   │  category/year predicates, summaries,
///                    └──────────┘  cluster grouping
/// ```

pub mod filter;
pub mod loader;
pub mod model;
