mod app;
mod color;
mod data;
mod labels;
mod state;
mod ui;

use std::path::Path;

use app::DashboardApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Load once from the working directory; the File menu can point the app
    // at another folder later. A failed load starts the app empty with the
    // error in the status line.
    let mut app_state = AppState::default();
    match data::loader::load_dir(Path::new(".")) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} series rows and {} cluster rows",
                dataset.series.len(),
                dataset.clusters.len()
            );
            app_state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load data: {e}");
            app_state.status_message = Some(format!("Error: {e}"));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Canada vs OECD – Inflation and Household Consumption",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(app_state)))),
    )
}
