// ---------------------------------------------------------------------------
// EnergySeries – the parsed energies, one per data line
// ---------------------------------------------------------------------------

/// Energies in file order. Index `i` is the `i`-th data line (INFO lines
/// are not counted), which is also the frame number on the plot's x axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergySeries {
    values: Vec<f64>,
}

impl EnergySeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of energy values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the file held no data lines at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `[index, value]` pairs ready for a line plot.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &e)| [i as f64, e])
    }

    /// Summary numbers for the top bar; `None` for an empty series.
    pub fn stats(&self) -> Option<SeriesStats> {
        let (&first, &last) = (self.values.first()?, self.values.last()?);
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(SeriesStats {
            min,
            max,
            first,
            last,
        })
    }
}

impl From<Vec<f64>> for EnergySeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

// ---------------------------------------------------------------------------
// SeriesStats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub first: f64,
    pub last: f64,
}

impl SeriesStats {
    /// Change in total energy between the first and last frame.
    pub fn drift(&self) -> f64 {
        self.last - self.first
    }

    /// Drift relative to the starting energy; undefined when it starts at zero.
    pub fn relative_drift(&self) -> Option<f64> {
        if self.first == 0.0 {
            None
        } else {
            Some(self.drift() / self.first.abs())
        }
    }
}
