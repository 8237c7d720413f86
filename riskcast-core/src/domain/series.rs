//! PriceSeries — a validated, chronologically ascending bar sequence.
//!
//! The constructor is the only way to build a series, so every downstream
//! stage can rely on the ordering invariant: dates strictly increasing, no
//! duplicates, every bar sane, at least one bar.

use serde::{Deserialize, Serialize};

use crate::domain::Bar;
use crate::error::DataError;

/// Ordered daily close/volume history for a single symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Build a series from unordered bars.
    ///
    /// Sorts ascending by date, then rejects empty input, duplicate dates,
    /// and insane bars (non-positive close, negative volume, NaN).
    pub fn new(symbol: impl Into<String>, mut bars: Vec<Bar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::EmptySeries);
        }
        bars.sort_by_key(|b| b.date);

        for pair in bars.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(DataError::DuplicateDate { date: pair[0].date });
            }
        }
        for bar in &bars {
            if !bar.is_sane() {
                return Err(DataError::InvalidBar {
                    date: bar.date,
                    close: bar.close,
                    volume: bar.volume,
                });
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close of the most recent bar — the "current price" of the analysis.
    pub fn last_close(&self) -> f64 {
        self.bars[self.bars.len() - 1].close
    }

    pub fn first_date(&self) -> chrono::NaiveDate {
        self.bars[0].date
    }

    pub fn last_date(&self) -> chrono::NaiveDate {
        self.bars[self.bars.len() - 1].date
    }

    /// Closes in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes in chronological order, aligned with `closes()` by index.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Simple daily returns: `closes[i] / closes[i-1] - 1`.
    ///
    /// Length is `len() - 1`; a single-bar series has no returns.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.bars
            .windows(2)
            .map(|w| w[1].close / w[0].close - 1.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn bar(day: u32, close: f64) -> Bar {
        Bar {
            date: date(day),
            close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn new_sorts_ascending() {
        let series =
            PriceSeries::new("SPY", vec![bar(3, 103.0), bar(1, 101.0), bar(2, 102.0)]).unwrap();
        let closes = series.closes();
        assert_eq!(closes, vec![101.0, 102.0, 103.0]);
        assert_eq!(series.first_date(), date(1));
        assert_eq!(series.last_date(), date(3));
    }

    #[test]
    fn new_rejects_empty() {
        let err = PriceSeries::new("SPY", vec![]).unwrap_err();
        assert!(matches!(err, DataError::EmptySeries));
    }

    #[test]
    fn new_rejects_duplicate_dates() {
        let err = PriceSeries::new("SPY", vec![bar(1, 101.0), bar(1, 102.0)]).unwrap_err();
        assert!(matches!(err, DataError::DuplicateDate { .. }));
    }

    #[test]
    fn new_rejects_insane_bar() {
        let mut bad = bar(2, 0.0);
        bad.close = -5.0;
        let err = PriceSeries::new("SPY", vec![bar(1, 101.0), bad]).unwrap_err();
        assert!(matches!(err, DataError::InvalidBar { .. }));
    }

    #[test]
    fn last_close_is_most_recent() {
        let series = PriceSeries::new("SPY", vec![bar(2, 110.0), bar(1, 100.0)]).unwrap();
        assert!((series.last_close() - 110.0).abs() < 1e-12);
    }

    #[test]
    fn daily_returns_basic() {
        let series =
            PriceSeries::new("SPY", vec![bar(1, 100.0), bar(2, 110.0), bar(3, 104.5)]).unwrap();
        let r = series.daily_returns();
        assert_eq!(r.len(), 2);
        assert!((r[0] - 0.1).abs() < 1e-12);
        assert!((r[1] - (104.5 / 110.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn daily_returns_single_bar_is_empty() {
        let series = PriceSeries::new("SPY", vec![bar(1, 100.0)]).unwrap();
        assert!(series.daily_returns().is_empty());
    }

    #[test]
    fn serialization_roundtrip() {
        let series = PriceSeries::new("SPY", vec![bar(1, 100.0), bar(2, 101.0)]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let deser: PriceSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(deser.symbol(), "SPY");
        assert_eq!(deser.closes(), series.closes());
    }
}
