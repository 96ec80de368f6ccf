use std::path::PathBuf;

use crate::data::model::{EnergySeries, SeriesStats};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the window draws. Built once before the window opens and
/// never reloaded.
pub struct AppState {
    /// File the series was read from, shown in the top bar.
    pub source: PathBuf,

    pub series: EnergySeries,

    /// Cached so the top bar does not rescan the series every frame.
    pub stats: Option<SeriesStats>,
}

impl AppState {
    pub fn new(source: PathBuf, series: EnergySeries) -> Self {
        let stats = series.stats();
        Self {
            source,
            series,
            stats,
        }
    }

    /// One-line description of the loaded series for the top bar.
    pub fn summary(&self) -> String {
        let mut text = format!("{}  |  {} frames", self.source.display(), self.series.len());
        if let Some(stats) = &self.stats {
            text.push_str(&format!(
                "  |  min {:.6e}  max {:.6e}  drift {:+.3e}",
                stats.min,
                stats.max,
                stats.drift()
            ));
            if let Some(rel) = stats.relative_drift() {
                text.push_str(&format!(" ({:+.3e} rel)", rel));
            }
        }
        text
    }
}
