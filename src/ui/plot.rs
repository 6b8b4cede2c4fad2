use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::filter::{
    cluster_counts, cluster_peers, latest_summary, lookup_country_cluster,
};
use crate::data::model::{ClusterRow, Dataset, TimeSeriesRow};
use crate::labels::{category_label, country_name};
use crate::state::{AppState, Section, SortColumn};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Central panel – section dispatch
// ---------------------------------------------------------------------------

/// Render the active dashboard section in the central panel.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a folder with the dashboard CSV files  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(format!(
                "Countries analyzed: {}  •  Data source: OECD",
                dataset.country_count()
            ));
            ui.separator();

            ui.heading(state.section.label());
            ui.add_space(4.0);

            match state.section {
                Section::Inflation => inflation_section(ui, state),
                Section::Expenditure => expenditure_section(ui, state),
                Section::Clustering => clustering_section(ui, state, &dataset),
            }
        });
}

fn no_data_notice(ui: &mut Ui, what: &str) {
    ui.label(
        RichText::new(format!("No {what} available for the selected filters."))
            .italics()
            .color(Color32::YELLOW),
    );
}

/// The category + year window applied to the time series, or a notice when
/// nothing is selected / nothing matches.
fn filtered_or_notice<'a>(
    ui: &mut Ui,
    state: &'a AppState,
) -> Option<(String, Vec<&'a TimeSeriesRow>)> {
    let Some(category) = state.category.clone() else {
        ui.label("Select a COICOP category in the sidebar.");
        return None;
    };
    let filtered = state.filtered_series();
    if filtered.is_empty() {
        no_data_notice(ui, "data");
        return None;
    }
    Some((category, filtered))
}

// ---------------------------------------------------------------------------
// Section 1 – Inflation (CPI), Canada vs OECD
// ---------------------------------------------------------------------------

fn inflation_section(ui: &mut Ui, state: &AppState) {
    let Some((category, filtered)) = filtered_or_notice(ui, state) else {
        return;
    };
    let cat_name = category_label(&category).to_string();

    let canada: PlotPoints = filtered
        .iter()
        .filter(|r| !r.can_cpi.is_nan())
        .map(|r| [r.year as f64, r.can_cpi])
        .collect();
    let oecd: PlotPoints = filtered
        .iter()
        .filter(|r| !r.oecd_cpi.is_nan())
        .map(|r| [r.year as f64, r.oecd_cpi])
        .collect();

    Plot::new("cpi_plot")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("CPI annual average (%)")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(canada).name("Canada").color(color::CANADA).width(2.0));
            plot_ui.line(
                Line::new(oecd)
                    .name("OECD average")
                    .color(color::OECD_AVERAGE)
                    .width(2.0),
            );
        });

    // Key finding for the latest year in the window.
    if let Some(latest) = latest_summary(&filtered) {
        let text = if latest.can_cpi.is_nan() || latest.oecd_cpi.is_nan() {
            format!(
                "In {}, CPI for {cat_name} cannot be directly compared due to missing data.",
                latest.year
            )
        } else {
            let relation = if latest.can_cpi > latest.oecd_cpi {
                "above"
            } else if latest.can_cpi < latest.oecd_cpi {
                "below"
            } else {
                "very close to"
            };
            format!(
                "In {}, Canada's CPI for {cat_name} is {relation} the OECD average ({:.2}% vs {:.2}%).",
                latest.year, latest.can_cpi, latest.oecd_cpi
            )
        };
        ui.add_space(4.0);
        ui.label(RichText::new(format!("Key finding – {cat_name}: {text}")).strong());
    }
}

// ---------------------------------------------------------------------------
// Section 2 – Expenditure share & growth, Canada vs OECD
// ---------------------------------------------------------------------------

fn expenditure_section(ui: &mut Ui, state: &AppState) {
    let Some((category, filtered)) = filtered_or_notice(ui, state) else {
        return;
    };
    let cat_name = category_label(&category).to_string();

    let Some(latest) = latest_summary(&filtered) else {
        no_data_notice(ui, "expenditure data");
        return;
    };

    two_bar_chart(
        ui,
        "exp_share_plot",
        &format!("Expenditure share of total in {}", latest.year),
        latest.can_exp_share,
        latest.oecd_exp_share,
    );
    ui.add_space(8.0);
    two_bar_chart(
        ui,
        "exp_growth_plot",
        &format!("Year-over-year expenditure growth in {}", latest.year),
        latest.can_exp_growth,
        latest.oecd_exp_growth,
    );

    // Key finding for the latest year.
    let share_rel = relation(latest.can_exp_share, latest.oecd_exp_share, [
        "a higher expenditure share than the OECD average",
        "a lower expenditure share than the OECD average",
        "a similar expenditure share to the OECD average",
        "an expenditure share that cannot be compared due to missing data",
    ]);
    let growth_rel = relation(latest.can_exp_growth, latest.oecd_exp_growth, [
        "spending is growing faster than the OECD average",
        "spending is growing slower than the OECD average",
        "spending is growing at a similar pace to the OECD average",
        "spending growth cannot be compared due to missing data",
    ]);

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!(
            "Key finding – {cat_name}: in {}, Canada shows {share_rel}, and {growth_rel}.",
            latest.year
        ))
        .strong(),
    );
}

/// Pick the greater/lesser/equal/missing phrasing for a Canada-vs-OECD pair.
fn relation(can: f64, oecd: f64, [above, below, close, missing]: [&str; 4]) -> String {
    if can.is_nan() || oecd.is_nan() {
        missing.to_string()
    } else if can > oecd {
        above.to_string()
    } else if can < oecd {
        below.to_string()
    } else {
        close.to_string()
    }
}

/// A grouped bar chart with exactly two bars: Canada and the OECD average.
/// Bars with a missing value are skipped.
fn two_bar_chart(ui: &mut Ui, id: &str, y_label: &str, can: f64, oecd: f64) {
    let mut charts = Vec::new();
    if !can.is_nan() {
        let bar = Bar::new(0.0, can).width(0.6).fill(color::CANADA);
        charts.push(BarChart::new(vec![bar]).name("Canada").color(color::CANADA));
    }
    if !oecd.is_nan() {
        let bar = Bar::new(1.0, oecd).width(0.6).fill(color::OECD_AVERAGE);
        charts.push(
            BarChart::new(vec![bar])
                .name("OECD average")
                .color(color::OECD_AVERAGE),
        );
    }

    if charts.is_empty() {
        no_data_notice(ui, "expenditure data");
        return;
    }

    Plot::new(id.to_string())
        .legend(Legend::default())
        .height(CHART_HEIGHT * 0.7)
        .y_axis_label(y_label)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Section 3 – Clustering results
// ---------------------------------------------------------------------------

fn clustering_section(ui: &mut Ui, state: &mut AppState, dataset: &Dataset) {
    if dataset.clusters.is_empty() {
        no_data_notice(ui, "clustering data");
        return;
    }

    // ---- Countries per cluster ----
    let counts = cluster_counts(&dataset.clusters);
    Plot::new("cluster_counts_plot")
        .legend(Legend::default())
        .height(CHART_HEIGHT * 0.7)
        .x_axis_label("Cluster")
        .y_axis_label("Number of countries")
        .show(ui, |plot_ui| {
            for (&label, &count) in &counts {
                let fill = color::cluster_color(label);
                let bar = Bar::new(label as f64, count as f64).width(0.6).fill(fill);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .name(format!("Cluster {label}"))
                        .color(fill),
                );
            }
        });

    // ---- Canada's cluster and its peers ----
    ui.add_space(4.0);
    match lookup_country_cluster(&dataset.clusters, "CAN") {
        Some(label) => {
            let mut peers: Vec<String> = cluster_peers(&dataset.clusters, label)
                .iter()
                .map(|r| format!("{} ({})", country_name(&r.country), r.country))
                .collect();
            peers.sort();
            ui.label(
                RichText::new(format!(
                    "Canada belongs to cluster {label}, together with {} countries.",
                    peers.len()
                ))
                .strong(),
            );
            ui.label(format!("Countries in the same cluster as Canada: {}", peers.join(", ")));
        }
        None => {
            ui.label(
                RichText::new("Canada is not present in the clustering results.")
                    .italics()
                    .color(Color32::YELLOW),
            );
        }
    }

    // ---- Sortable membership table ----
    ui.add_space(8.0);
    ui.strong("Cluster membership by country");
    cluster_table(ui, state, &dataset.clusters);
}

/// Cluster membership table with clickable, sort-toggling headers.
fn cluster_table(ui: &mut Ui, state: &mut AppState, clusters: &[ClusterRow]) {
    let sort = state.table_sort;

    let mut rows: Vec<&ClusterRow> = clusters.iter().collect();
    rows.sort_by(|a, b| {
        let ord = match sort.column {
            SortColumn::Country => country_name(&a.country).cmp(country_name(&b.country)),
            SortColumn::Code => a.country.cmp(&b.country),
            SortColumn::Cluster => a
                .cluster
                .cmp(&b.cluster)
                .then_with(|| a.country.cmp(&b.country)),
        };
        if sort.ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                if ui.button(format!("Country{}", sort.arrow(SortColumn::Country))).clicked() {
                    state.table_sort.toggle(SortColumn::Country);
                }
            });
            header.col(|ui| {
                if ui.button(format!("Code{}", sort.arrow(SortColumn::Code))).clicked() {
                    state.table_sort.toggle(SortColumn::Code);
                }
            });
            header.col(|ui| {
                if ui.button(format!("Cluster{}", sort.arrow(SortColumn::Cluster))).clicked() {
                    state.table_sort.toggle(SortColumn::Cluster);
                }
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(country_name(&row.country));
                    });
                    table_row.col(|ui| {
                        ui.label(&row.country);
                    });
                    table_row.col(|ui| {
                        ui.colored_label(
                            color::cluster_color(row.cluster),
                            row.cluster.to_string(),
                        );
                    });
                });
            }
        });
}
