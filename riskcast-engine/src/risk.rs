//! Risk scoring — four independent dimensions, normalized and averaged.
//!
//! Dimensions:
//! - **Volatility**: annualized std of daily returns, cap 0.50
//! - **Drawdown**: fractional distance from current price to the stop, cap 0.30
//! - **Liquidity**: recent-vs-historical volume shortfall, scaled by the
//!   caller's order size when significant, cap 0.70
//! - **Bearish pressure**: fraction of days with rolling RSI below 30, cap 0.30
//!
//! Normalization is `min(raw / cap, 1.0)` with NO lower floor: a stop set
//! above the current price, or recent volume above the historical average,
//! yields a negative normalized score that pulls the composite average down.

use serde::{Deserialize, Serialize};
use tracing::debug;

use riskcast_core::domain::PriceSeries;
use riskcast_core::error::DataError;
use riskcast_core::indicators::{bearish_frequency, rolling_rsi};
use riskcast_core::stats::{annualized_volatility, mean};

// ─── Configuration ───────────────────────────────────────────────────

/// Configuration for risk scoring. Caps map each raw dimension onto [.., 1.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Annualized volatility mapping to a normalized score of 1.0 (default 0.50).
    pub volatility_cap: f64,
    /// Drawdown fraction mapping to 1.0 (default 0.30).
    pub drawdown_cap: f64,
    /// Liquidity risk mapping to 1.0 (default 0.70).
    pub liquidity_cap: f64,
    /// Bearish-day frequency mapping to 1.0 (default 0.30).
    pub bearish_cap: f64,
    /// Bars in the recent-volume window (default 20).
    pub recent_volume_window: usize,
    /// RSI rolling period (default 14).
    pub rsi_period: usize,
    /// RSI level below which a day counts as bearish (default 30).
    pub bearish_rsi_threshold: f64,
    /// Order size as a fraction of recent volume above which liquidity risk
    /// is scaled up (default 0.05).
    pub user_volume_significance: f64,
    /// Composite average above this is HIGH risk (default 0.7).
    pub high_risk_threshold: f64,
    /// Composite average above this is MEDIUM risk (default 0.4).
    pub medium_risk_threshold: f64,
    /// Minimum bar count for a meaningful score: one full RSI window of
    /// deltas plus the anchor bar (default 15).
    pub min_bars: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            volatility_cap: 0.50,
            drawdown_cap: 0.30,
            liquidity_cap: 0.70,
            bearish_cap: 0.30,
            recent_volume_window: 20,
            rsi_period: 14,
            bearish_rsi_threshold: 30.0,
            user_volume_significance: 0.05,
            high_risk_threshold: 0.7,
            medium_risk_threshold: 0.4,
            min_bars: 15,
        }
    }
}

// ─── Result types ────────────────────────────────────────────────────

/// Composite risk level from the averaged normalized scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Raw and normalized values for the four risk dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScores {
    /// Annualized volatility of daily returns.
    pub volatility: f64,
    /// (current - stop) / current. Negative when the stop is above the price.
    pub drawdown: f64,
    /// 1 - recent/average volume, scaled for significant order sizes.
    pub liquidity: f64,
    /// Fraction of days with RSI below the bearish threshold.
    pub bearish_frequency: f64,
    pub volatility_norm: f64,
    pub drawdown_norm: f64,
    pub liquidity_norm: f64,
    pub bearish_norm: f64,
    /// Mean of the four normalized scores.
    pub composite: f64,
    pub level: RiskLevel,
}

/// Risk scores plus the price/volume context the rest of the pipeline needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub scores: RiskScores,
    /// Close of the most recent bar.
    pub current_price: f64,
    /// Mean volume over the recent window.
    pub recent_avg_volume: f64,
    /// Order size as a fraction of recent volume. `None` when no order size
    /// was given or recent volume is zero.
    pub volume_impact: Option<f64>,
}

// ─── Scoring ─────────────────────────────────────────────────────────

/// Score a position against its stop over a normalized series.
///
/// `user_volume` is the intended order size in shares; it only affects the
/// liquidity dimension. Fails with `InsufficientData` below
/// `config.min_bars` bars.
pub fn assess_risk(
    series: &PriceSeries,
    stop_loss: f64,
    user_volume: Option<f64>,
    config: &RiskConfig,
) -> Result<RiskAssessment, DataError> {
    if series.len() < config.min_bars {
        return Err(DataError::InsufficientData {
            got: series.len(),
            need: config.min_bars,
        });
    }

    let closes = series.closes();
    let volumes = series.volumes();
    let current_price = series.last_close();

    // 1. Volatility
    let volatility = annualized_volatility(&series.daily_returns());

    // 2. Drawdown distance to the stop
    let drawdown = (current_price - stop_loss) / current_price;

    // 3. Liquidity
    let avg_volume = mean(&volumes);
    let recent_start = volumes.len().saturating_sub(config.recent_volume_window);
    let recent_avg_volume = mean(&volumes[recent_start..]);

    // A dead series (zero average volume) carries no liquidity signal.
    let mut liquidity = if avg_volume > 0.0 {
        1.0 - recent_avg_volume / avg_volume
    } else {
        0.0
    };

    let volume_impact = match user_volume {
        Some(shares) if recent_avg_volume > 0.0 => Some(shares / recent_avg_volume),
        _ => None,
    };
    if let Some(impact) = volume_impact {
        if impact > config.user_volume_significance {
            liquidity *= 1.0 + impact;
        }
    }

    // 4. Bearish pressure
    let rsi = rolling_rsi(&closes, config.rsi_period);
    let bearish = bearish_frequency(&rsi, config.bearish_rsi_threshold);

    let volatility_norm = cap_normalize(volatility, config.volatility_cap);
    let drawdown_norm = cap_normalize(drawdown, config.drawdown_cap);
    let liquidity_norm = cap_normalize(liquidity, config.liquidity_cap);
    let bearish_norm = cap_normalize(bearish, config.bearish_cap);

    let composite = (volatility_norm + drawdown_norm + liquidity_norm + bearish_norm) / 4.0;
    let level = if composite > config.high_risk_threshold {
        RiskLevel::High
    } else if composite > config.medium_risk_threshold {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    debug!(
        symbol = series.symbol(),
        volatility, drawdown, liquidity, bearish, composite, "risk dimensions scored"
    );

    Ok(RiskAssessment {
        scores: RiskScores {
            volatility,
            drawdown,
            liquidity,
            bearish_frequency: bearish,
            volatility_norm,
            drawdown_norm,
            liquidity_norm,
            bearish_norm,
            composite,
            level,
        },
        current_price,
        recent_avg_volume,
        volume_impact,
    })
}

/// `min(raw / cap, 1.0)` — upper bound only, no lower floor.
fn cap_normalize(raw: f64, cap: f64) -> f64 {
    (raw / cap).min(1.0)
}
