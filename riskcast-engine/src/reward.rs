//! Reward metrics — annualized return, Sharpe ratio, probability-weighted
//! risk/reward ratio, and a qualitative rating.
//!
//! The two ratio formulas are naturally undefined for degenerate inputs
//! (zero volatility, certain success, stop at the current price). Those
//! outcomes are encoded as tagged values instead of letting NaN or infinity
//! leak into the report.

use serde::{Deserialize, Serialize};

use riskcast_core::stats::TRADING_DAYS_PER_YEAR;

// ─── Configuration ───────────────────────────────────────────────────

/// Configuration for reward metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Intended holding period in trading days (default 30).
    pub holding_period_days: u32,
    /// Annual risk-free rate (default 0.04).
    pub risk_free_rate: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            holding_period_days: 30,
            risk_free_rate: 0.04,
        }
    }
}

// ─── Result types ────────────────────────────────────────────────────

/// Why a ratio has no defined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericAnomaly {
    /// Sharpe denominator: annualized volatility is exactly 0.
    ZeroVolatility,
    /// Risk/reward denominator: success probability is 1, or the stop
    /// equals the current price.
    DegenerateRiskReward,
}

/// A ratio that is either a finite value or a tagged anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MetricOutcome {
    Defined(f64),
    Undefined(NumericAnomaly),
}

impl MetricOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// True only for a defined value strictly above `threshold`.
    fn exceeds(&self, threshold: f64) -> bool {
        matches!(self, Self::Defined(v) if *v > threshold)
    }
}

/// Qualitative trade quality, from the fixed (sharpe, risk/reward) ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Weak,
}

/// Reward side of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardMetrics {
    /// Target return annualized over the holding period, as a percentage.
    pub annualized_return_pct: f64,
    pub sharpe_ratio: MetricOutcome,
    pub risk_reward_ratio: MetricOutcome,
    pub rating: Rating,
}

// ─── Computation ─────────────────────────────────────────────────────

/// Compute reward metrics for a position.
///
/// `volatility` is the annualized volatility from the risk stage;
/// `success_probability` comes from the simulator.
pub fn compute_reward(
    current_price: f64,
    volatility: f64,
    target_price: f64,
    stop_loss: f64,
    success_probability: f64,
    config: &RewardConfig,
) -> RewardMetrics {
    let potential_return = target_price / current_price - 1.0;
    let annualized_return =
        potential_return * TRADING_DAYS_PER_YEAR / f64::from(config.holding_period_days);

    let sharpe_ratio = if volatility == 0.0 {
        MetricOutcome::Undefined(NumericAnomaly::ZeroVolatility)
    } else {
        MetricOutcome::Defined((annualized_return - config.risk_free_rate) / volatility)
    };

    let stop_distance = (stop_loss / current_price - 1.0).abs();
    let p = success_probability;
    let risk_reward_ratio = if p >= 1.0 || stop_distance == 0.0 {
        MetricOutcome::Undefined(NumericAnomaly::DegenerateRiskReward)
    } else {
        MetricOutcome::Defined((p * potential_return) / ((1.0 - p) * stop_distance))
    };

    let rating = rate(sharpe_ratio, risk_reward_ratio);

    RewardMetrics {
        annualized_return_pct: annualized_return * 100.0,
        sharpe_ratio,
        risk_reward_ratio,
        rating,
    }
}

/// Four-tier ladder, evaluated in fixed priority order; the first matching
/// tier wins. An undefined metric fails every comparison, so anomalous
/// inputs land on WEAK.
fn rate(sharpe: MetricOutcome, risk_reward: MetricOutcome) -> Rating {
    if sharpe.exceeds(1.5) && risk_reward.exceeds(2.0) {
        Rating::Excellent
    } else if sharpe.exceeds(1.0) && risk_reward.exceeds(1.5) {
        Rating::Good
    } else if sharpe.exceeds(0.5) && risk_reward.exceeds(1.0) {
        Rating::Fair
    } else {
        Rating::Weak
    }
}
