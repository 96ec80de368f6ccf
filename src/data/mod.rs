/// Data layer: line filtering, parsing, and the energies series.
///
/// Architecture:
/// ```text
///   energies.txt
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop INFO lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse each data line → f64
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ EnergySeries  │  Vec<f64>, index = frame
///   └──────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
