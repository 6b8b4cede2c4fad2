use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::available_categories;
use crate::labels::category_label;
use crate::state::{AppState, Section};

// ---------------------------------------------------------------------------
// Left side panel – navigation and filter widgets
// ---------------------------------------------------------------------------

/// Render the left panel: section navigation on top, filters below.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();

    for section in Section::ALL {
        ui.selectable_value(&mut state.section, section, section.label());
    }

    ui.add_space(8.0);
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what the widgets need so we can mutate state below.
    let categories = available_categories(&dataset.series);
    let bounds = state.year_bounds();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Category selector (single choice) ----
            ui.strong("COICOP category");
            let current = state.category.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("category_select")
                .selected_text(category_label(&current))
                .show_ui(ui, |ui: &mut Ui| {
                    for cat in &categories {
                        if ui
                            .selectable_label(current == *cat, category_label(cat))
                            .clicked()
                        {
                            state.category = Some(cat.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Year range ----
            ui.strong("Year range");
            if let Some((min, max)) = bounds {
                ui.add(egui::Slider::new(&mut state.year_range.0, min..=max).text("From"));
                ui.add(egui::Slider::new(&mut state.year_range.1, min..=max).text("To"));
                state.clamp_year_range();
            } else {
                ui.label("No years in the time series.");
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_dir_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} time-series rows, {} countries clustered",
                ds.series.len(),
                ds.country_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

/// Ask for a directory holding the two CSV exports and load it. A failed
/// load keeps the previously loaded dataset, if any.
pub fn open_dir_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open folder with dashboard CSV files")
        .pick_folder();

    if let Some(path) = dir {
        match crate::data::loader::load_dir(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} series rows and {} cluster rows from {}",
                    dataset.series.len(),
                    dataset.clusters.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load data: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
