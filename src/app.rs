use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EnergyPlotApp {
    pub state: AppState,
}

impl EnergyPlotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for EnergyPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: source + stats ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::energy_plot(ui, &self.state);
        });
    }
}
