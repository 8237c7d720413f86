//! Series normalization — raw payload in, validated `PriceSeries` out.
//!
//! Parses the string-typed close/volume fields, discards the other price
//! fields, sorts ascending by date, and enforces the series invariants via
//! the `PriceSeries` constructor. Minimum-length requirements are NOT
//! checked here — each downstream stage guards its own window needs.

use chrono::NaiveDate;

use crate::data::provider::{RawDailyBar, RawDailyPayload};
use crate::domain::{Bar, PriceSeries};
use crate::error::DataError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a raw daily payload into a chronological `PriceSeries`.
///
/// Errors:
/// - `EmptySeries` when the time-series mapping has no entries
/// - `MalformedDate` / `MalformedField` when a key or numeric field fails to parse
/// - `InvalidBar` / `DuplicateDate` from the series constructor
pub fn normalize_daily(payload: &RawDailyPayload) -> Result<PriceSeries, DataError> {
    if payload.series.is_empty() {
        return Err(DataError::EmptySeries);
    }

    let mut bars = Vec::with_capacity(payload.series.len());
    for (date_str, raw) in &payload.series {
        bars.push(parse_bar(date_str, raw)?);
    }

    PriceSeries::new(payload.symbol(), bars)
}

fn parse_bar(date_str: &str, raw: &RawDailyBar) -> Result<Bar, DataError> {
    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
        DataError::MalformedDate {
            value: date_str.to_string(),
        }
    })?;

    let close = raw.close.parse().ok_or_else(|| DataError::MalformedField {
        field: "close",
        date: date_str.to_string(),
        value: raw.close.display_value(),
    })?;

    let volume = raw
        .volume
        .parse()
        .ok_or_else(|| DataError::MalformedField {
            field: "volume",
            date: date_str.to_string(),
            value: raw.volume.display_value(),
        })?;

    Ok(Bar {
        date,
        close,
        volume,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::{RawField, RawMeta};
    use std::collections::BTreeMap;

    fn payload_of(entries: &[(&str, f64, f64)]) -> RawDailyPayload {
        let mut series = BTreeMap::new();
        for &(date, close, volume) in entries {
            series.insert(
                date.to_string(),
                RawDailyBar::from_close_volume(close, volume),
            );
        }
        RawDailyPayload {
            meta: Some(RawMeta {
                symbol: Some("TEST".into()),
            }),
            series,
        }
    }

    #[test]
    fn normalizes_and_sorts_ascending() {
        // BTreeMap iterates keys lexically, but mixed-width dates still parse
        // and the constructor sorts chronologically.
        let payload = payload_of(&[
            ("2024-01-03", 103.0, 1_000.0),
            ("2024-01-02", 102.0, 2_000.0),
            ("2023-12-29", 101.0, 3_000.0),
        ]);
        let series = normalize_daily(&payload).unwrap();
        assert_eq!(series.symbol(), "TEST");
        assert_eq!(series.closes(), vec![101.0, 102.0, 103.0]);
        assert_eq!(series.volumes(), vec![3_000.0, 2_000.0, 1_000.0]);
    }

    #[test]
    fn empty_mapping_is_an_error() {
        let payload = RawDailyPayload::default();
        let err = normalize_daily(&payload).unwrap_err();
        assert!(matches!(err, DataError::EmptySeries));
    }

    #[test]
    fn unparseable_close_is_reported_with_context() {
        let mut payload = payload_of(&[("2024-01-02", 100.0, 1_000.0)]);
        payload.series.insert(
            "2024-01-03".into(),
            RawDailyBar {
                open: None,
                high: None,
                low: None,
                close: RawField::Text("not-a-price".into()),
                volume: RawField::Number(500.0),
            },
        );
        let err = normalize_daily(&payload).unwrap_err();
        match err {
            DataError::MalformedField { field, date, value } => {
                assert_eq!(field, "close");
                assert_eq!(date, "2024-01-03");
                assert_eq!(value, "not-a-price");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_date_key_is_an_error() {
        let payload = payload_of(&[("03 Jan 2024", 100.0, 1_000.0)]);
        let err = normalize_daily(&payload).unwrap_err();
        assert!(matches!(err, DataError::MalformedDate { .. }));
    }

    #[test]
    fn nonpositive_close_is_rejected() {
        let payload = payload_of(&[("2024-01-02", -3.0, 1_000.0)]);
        let err = normalize_daily(&payload).unwrap_err();
        assert!(matches!(err, DataError::InvalidBar { .. }));
    }

    #[test]
    fn ohlc_fields_are_discarded() {
        let mut payload = payload_of(&[]);
        payload.series.insert(
            "2024-01-02".into(),
            RawDailyBar {
                open: Some(RawField::Text("99.0".into())),
                high: Some(RawField::Text("garbage".into())), // must not matter
                low: None,
                close: RawField::Text("100.5".into()),
                volume: RawField::Text("1200".into()),
            },
        );
        let series = normalize_daily(&payload).unwrap();
        assert_eq!(series.closes(), vec![100.5]);
    }
}
