//! Structured error types for data operations.
//!
//! Every failure path in the normalization and scoring pipeline is one of
//! these variants; numeric anomalies inside the reward stage are encoded in
//! the report instead (see `riskcast-engine`). Designed to be displayable in
//! both CLI and service contexts.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DataError {
    #[error("series contains no bars")]
    EmptySeries,

    #[error("insufficient data: {got} bars < minimum {need}")]
    InsufficientData { got: usize, need: usize },

    #[error("malformed date key '{value}'")]
    MalformedDate { value: String },

    #[error("malformed {field} field on {date}: '{value}'")]
    MalformedField {
        field: &'static str,
        date: String,
        value: String,
    },

    #[error("invalid bar on {date}: close={close}, volume={volume}")]
    InvalidBar {
        date: NaiveDate,
        close: f64,
        volume: f64,
    },

    #[error("duplicate bar date {date}")]
    DuplicateDate { date: NaiveDate },
}
