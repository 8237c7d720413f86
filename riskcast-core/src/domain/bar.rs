//! Bar — one day's price/volume record in a historical series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Close/volume bar for a single symbol on a single day.
///
/// Open, high, and low are discarded at the normalization boundary — the
/// scoring stages only consume closes and volumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Basic sanity check: close strictly positive, volume non-negative,
    /// both finite.
    pub fn is_sane(&self) -> bool {
        self.close.is_finite() && self.close > 0.0 && self.volume.is_finite() && self.volume >= 0.0
    }
}
