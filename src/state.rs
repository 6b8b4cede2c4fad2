use crate::data::filter::{available_categories, available_years, filter_series};
use crate::data::model::{Dataset, TimeSeriesRow};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Dashboard sections, navigated from the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inflation,
    Expenditure,
    Clustering,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Inflation,
        Section::Expenditure,
        Section::Clustering,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Inflation => "1. Inflation (CPI) – Canada vs OECD",
            Section::Expenditure => "2. Expenditure Share & Growth – Canada vs OECD",
            Section::Clustering => "3. Clustering Results – Countries",
        }
    }
}

// ---------------------------------------------------------------------------
// Cluster table sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Country,
    Code,
    Cluster,
}

/// Sort state of the cluster membership table.
#[derive(Debug, Clone, Copy)]
pub struct TableSort {
    pub column: SortColumn,
    pub ascending: bool,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: SortColumn::Cluster,
            ascending: true,
        }
    }
}

impl TableSort {
    /// Clicking the active column flips direction; clicking another column
    /// sorts by it ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.ascending = !self.ascending;
        } else {
            self.column = column;
            self.ascending = true;
        }
    }

    /// Header arrow for the active column.
    pub fn arrow(&self, column: SortColumn) -> &'static str {
        if self.column != column {
            ""
        } else if self.ascending {
            " ⏶"
        } else {
            " ⏷"
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Active dashboard section.
    pub section: Section,

    /// Selected COICOP category (single choice).
    pub category: Option<String>,

    /// Inclusive year window (min, max).
    pub year_range: (i32, i32),

    /// Sort state of the cluster table.
    pub table_sort: TableSort,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            section: Section::Inflation,
            category: None,
            year_range: (0, 0),
            table_sort: TableSort::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and initialise the filters: first
    /// category selected, year window spanning the full range.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let categories = available_categories(&dataset.series);
        let years = available_years(&dataset.series);

        self.category = categories.first().cloned();
        self.year_range = match (years.first(), years.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Year bounds of the loaded series, if any.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let ds = self.dataset.as_ref()?;
        let years = available_years(&ds.series);
        match (years.first(), years.last()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Keep the year window ordered and inside the data bounds.
    pub fn clamp_year_range(&mut self) {
        if let Some((min, max)) = self.year_bounds() {
            self.year_range.0 = self.year_range.0.clamp(min, max);
            self.year_range.1 = self.year_range.1.clamp(min, max);
        }
        if self.year_range.0 > self.year_range.1 {
            self.year_range.1 = self.year_range.0;
        }
    }

    /// Rows matching the current category and year window.
    pub fn filtered_series(&self) -> Vec<&TimeSeriesRow> {
        match (&self.dataset, &self.category) {
            (Some(ds), Some(cat)) => {
                filter_series(&ds.series, cat, self.year_range.0, self.year_range.1)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, year: i32) -> TimeSeriesRow {
        TimeSeriesRow {
            category: category.to_string(),
            year,
            can_cpi: 1.0,
            oecd_cpi: 1.0,
            can_exp_share: 0.1,
            oecd_exp_share: 0.1,
            can_exp_growth: 0.0,
            oecd_exp_growth: 0.0,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            data_dir: ".".into(),
            series: vec![row("CP041", 2020), row("CP01", 2021), row("CP01", 2024)],
            clusters: Vec::new(),
        }
    }

    #[test]
    fn set_dataset_initialises_filters() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.category.as_deref(), Some("CP01"));
        assert_eq!(state.year_range, (2020, 2024));
    }

    #[test]
    fn clamping_keeps_the_window_ordered_and_in_bounds() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.year_range = (1990, 2030);
        state.clamp_year_range();
        assert_eq!(state.year_range, (2020, 2024));

        state.year_range = (2023, 2021);
        state.clamp_year_range();
        assert_eq!(state.year_range, (2023, 2023));
    }

    #[test]
    fn filtered_series_is_empty_without_a_dataset() {
        let state = AppState::default();
        assert!(state.filtered_series().is_empty());
    }
}
