use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::model::EnergySeries;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Energy plot (central panel)
// ---------------------------------------------------------------------------

/// Render the energies as a single line: frame index on x, energy on y.
///
/// An empty series still draws the (empty) plot area.
pub fn energy_plot(ui: &mut Ui, state: &AppState) {
    Plot::new("energy_plot")
        .x_axis_label("Frame")
        .y_axis_label("Energy")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some(line) = energy_line(&state.series) {
                plot_ui.line(line);
            }
        });
}

fn energy_line(series: &EnergySeries) -> Option<Line> {
    if series.is_empty() {
        return None;
    }
    let points: PlotPoints = series.points().collect();
    Some(
        Line::new(points)
            .name("energy")
            .color(Color32::LIGHT_BLUE)
            .width(1.5),
    )
}
