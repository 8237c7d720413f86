//! Monte Carlo target-vs-stop simulation — historical bootstrap.
//!
//! Resamples recent daily returns with replacement (no parametric
//! distribution) to build 30-day price paths from the entry price, and
//! counts how often the target is reached before the stop. Trials are
//! statistically independent: each draws from its own hash-derived RNG, so
//! the rayon fan-out produces identical results for any thread count.
//!
//! Classification per trial, in order:
//! 1. path maximum ever reaches the target → success (order within the
//!    path is irrelevant for a touch)
//! 2. otherwise path minimum ever reaches the stop → failure
//! 3. otherwise the path stayed between stop and target → success iff the
//!    final price exceeds the entry

use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use riskcast_core::domain::PriceSeries;
use riskcast_core::rng::TrialSeeder;

/// Steps per simulated path (trading days).
pub const PATH_LENGTH: usize = 30;

/// Fewer lookback returns than this → neutral 0.5 probability, no simulation.
pub const MIN_LOOKBACK_RETURNS: usize = 5;

const TRIAL_LABEL: &str = "mc-trial";

// ─── Configuration ───────────────────────────────────────────────────

/// Configuration for the bootstrap simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent trials (default 1000).
    pub trial_count: usize,
    /// How many recent daily returns feed the bootstrap pool (default 60).
    pub lookback_days: usize,
    /// Master seed for reproducibility (default 42).
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trial_count: 1000,
            lookback_days: 60,
            seed: 42,
        }
    }
}

// ─── Result type ─────────────────────────────────────────────────────

/// Outcome of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fraction of trials that hit the target before the stop.
    pub success_probability: f64,
    pub trial_count: usize,
    pub path_length: usize,
    pub lookback_days: usize,
    /// True when too few lookback returns existed and the neutral 0.5
    /// default was returned without simulating.
    pub neutral_fallback: bool,
}

// ─── Simulation ──────────────────────────────────────────────────────

/// Estimate the probability of reaching `target_price` before `stop_loss`.
///
/// Takes the most recent `config.lookback_days` daily returns from the
/// series (or fewer when the series is shorter).
pub fn estimate_success_probability(
    series: &PriceSeries,
    entry_price: f64,
    target_price: f64,
    stop_loss: f64,
    config: &SimulationConfig,
) -> SimulationResult {
    let returns = series.daily_returns();
    let start = returns.len().saturating_sub(config.lookback_days);
    simulate_from_returns(&returns[start..], entry_price, target_price, stop_loss, config)
}

/// Run the bootstrap directly on a lookback return pool.
pub fn simulate_from_returns(
    lookback: &[f64],
    entry_price: f64,
    target_price: f64,
    stop_loss: f64,
    config: &SimulationConfig,
) -> SimulationResult {
    if lookback.len() < MIN_LOOKBACK_RETURNS {
        debug!(
            available = lookback.len(),
            needed = MIN_LOOKBACK_RETURNS,
            "too few lookback returns, returning neutral probability"
        );
        return SimulationResult {
            success_probability: 0.5,
            trial_count: config.trial_count,
            path_length: PATH_LENGTH,
            lookback_days: config.lookback_days,
            neutral_fallback: true,
        };
    }

    let seeder = TrialSeeder::new(config.seed);
    let successes: usize = (0..config.trial_count as u64)
        .into_par_iter()
        .filter(|&trial| {
            let mut rng = seeder.rng_for(TRIAL_LABEL, trial);
            run_trial(lookback, entry_price, target_price, stop_loss, &mut rng)
        })
        .count();

    let success_probability = successes as f64 / config.trial_count as f64;
    debug!(successes, trials = config.trial_count, "simulation complete");

    SimulationResult {
        success_probability,
        trial_count: config.trial_count,
        path_length: PATH_LENGTH,
        lookback_days: config.lookback_days,
        neutral_fallback: false,
    }
}

/// One bootstrap path. Returns true when the trial counts as a success.
fn run_trial(
    lookback: &[f64],
    entry_price: f64,
    target_price: f64,
    stop_loss: f64,
    rng: &mut StdRng,
) -> bool {
    let mut price = entry_price;
    let mut path_max = f64::NEG_INFINITY;
    let mut path_min = f64::INFINITY;

    for _ in 0..PATH_LENGTH {
        let r = lookback[rng.gen_range(0..lookback.len())];
        price *= 1.0 + r;
        if price > path_max {
            path_max = price;
        }
        if price < path_min {
            path_min = price;
        }
    }

    if path_max >= target_price {
        true
    } else if path_min <= stop_loss {
        false
    } else {
        price > entry_price
    }
}
