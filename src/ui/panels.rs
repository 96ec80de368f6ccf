use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Source file, frame count, and energy drift above the plot.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(state.summary());

        if state.series.is_empty() {
            ui.separator();
            ui.label(RichText::new("no energy values in file").color(Color32::YELLOW));
        }
    });
}
