mod app;
mod data;
mod error;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::EnergyPlotApp;
use eframe::egui;
use state::AppState;

/// Written by the simulation next to where the viewer is launched.
const ENERGIES_PATH: &str = "energies.txt";

fn main() -> Result<()> {
    env_logger::init();

    let path = Path::new(ENERGIES_PATH);
    let series = data::loader::load_file(path)
        .with_context(|| format!("loading energies from {}", path.display()))?;

    let state = AppState::new(path.to_path_buf(), series);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Energy Plot",
        options,
        Box::new(|_cc| Ok(Box::new(EnergyPlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer window: {e}"))
}
