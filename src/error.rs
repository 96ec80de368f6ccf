use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning an energies file into an [`EnergySeries`].
///
/// Both variants are fatal: the viewer never opens with a partial series.
///
/// [`EnergySeries`]: crate::data::model::EnergySeries
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// `line` is 1-based and counts INFO lines too, so it matches an editor.
    #[error("line {line}: '{text}' is not a number")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
}
