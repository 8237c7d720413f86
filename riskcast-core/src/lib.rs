//! Riskcast Core — domain types, series normalization, and shared numerics.
//!
//! This crate contains the data layer of the risk/reward engine:
//! - Domain types (bars, price series) with ordering invariants
//! - Raw provider payload parsing and normalization into a `PriceSeries`
//! - Return and dispersion statistics shared by the scoring stages
//! - The rolling-mean RSI used for bearish-pressure scoring
//! - Deterministic RNG seed derivation for the Monte Carlo simulator

pub mod data;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod rng;
pub mod stats;

pub use error::DataError;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything that crosses the engine's rayon
    /// fan-out must be Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::PriceSeries>();
        require_sync::<domain::PriceSeries>();
        require_send::<data::RawDailyPayload>();
        require_sync::<data::RawDailyPayload>();
        require_send::<error::DataError>();
        require_sync::<error::DataError>();
        require_send::<rng::TrialSeeder>();
        require_sync::<rng::TrialSeeder>();
    }
}
