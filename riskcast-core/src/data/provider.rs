//! Raw market-data payload as delivered by the external fetcher.
//!
//! The fetcher (an excluded collaborator) hands over the upstream JSON shape
//! essentially untouched: a metadata block plus a mapping from date string to
//! a bar whose numeric fields arrive as strings. These types model that
//! boundary declaratively so normalization never touches serde_json values
//! by hand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A numeric field that may arrive as a string (`"189.95"`) or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Number(f64),
}

impl RawField {
    /// Parse to f64. `None` for unparseable text or non-finite numbers.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Number(n) => *n,
        };
        value.is_finite().then_some(value)
    }

    /// The original textual form, for error messages.
    pub fn display_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// One raw daily bar. Only close and volume are consumed downstream; the
/// other price fields are accepted and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDailyBar {
    #[serde(rename = "1. open", default, skip_serializing_if = "Option::is_none")]
    pub open: Option<RawField>,
    #[serde(rename = "2. high", default, skip_serializing_if = "Option::is_none")]
    pub high: Option<RawField>,
    #[serde(rename = "3. low", default, skip_serializing_if = "Option::is_none")]
    pub low: Option<RawField>,
    #[serde(rename = "4. close")]
    pub close: RawField,
    #[serde(rename = "5. volume")]
    pub volume: RawField,
}

impl RawDailyBar {
    /// Bar with only the fields the engine consumes. Used by tests and the
    /// CSV import path.
    pub fn from_close_volume(close: f64, volume: f64) -> Self {
        Self {
            open: None,
            high: None,
            low: None,
            close: RawField::Number(close),
            volume: RawField::Number(volume),
        }
    }
}

/// Metadata block. Everything but the symbol is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMeta {
    #[serde(rename = "2. Symbol", default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Full daily payload: metadata plus the date-keyed time series.
///
/// A `BTreeMap` keeps the keys ordered for stable serialization; the
/// normalizer re-sorts by parsed date anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDailyPayload {
    #[serde(rename = "Meta Data", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RawMeta>,
    #[serde(rename = "Time Series (Daily)", default)]
    pub series: BTreeMap<String, RawDailyBar>,
}

impl RawDailyPayload {
    /// Symbol from metadata, or "UNKNOWN" when the block is absent.
    pub fn symbol(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.symbol.as_deref())
            .unwrap_or("UNKNOWN")
    }
}
