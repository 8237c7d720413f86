//! Report orchestration — sequences the pipeline stages and merges their
//! outputs into one immutable `RiskRewardReport`.
//!
//! Stage order: normalization (when starting from a raw payload) → risk
//! scoring → Monte Carlo simulation → reward metrics. Any `DataError`
//! short-circuits and is returned untouched; numeric anomalies from the
//! reward stage are encoded inside the report instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use riskcast_core::data::{normalize_daily, RawDailyPayload};
use riskcast_core::domain::PriceSeries;
use riskcast_core::error::DataError;

use crate::reward::{compute_reward, RewardConfig, RewardMetrics};
use crate::risk::{assess_risk, RiskConfig, RiskScores};
use crate::simulation::{estimate_success_probability, SimulationConfig, SimulationResult};

// ─── Inputs ──────────────────────────────────────────────────────────

/// Per-position analysis parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Target sell price.
    pub target_price: f64,
    /// Stop-loss price.
    pub stop_loss: f64,
    /// Intended order size in shares; affects liquidity risk only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_volume: Option<f64>,
}

/// Combined configuration for all pipeline stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub risk: RiskConfig,
    pub simulation: SimulationConfig,
    pub reward: RewardConfig,
}

// ─── Report ──────────────────────────────────────────────────────────

/// Complete analysis result. Created fresh per invocation, immutable once
/// returned, never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRewardReport {
    pub symbol: String,
    pub current_price: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_volume: Option<f64>,
    pub recent_avg_volume: f64,
    /// Order size as a fraction of recent volume, when an order size was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_impact: Option<f64>,
    pub bar_count: usize,
    pub series_start: NaiveDate,
    pub series_end: NaiveDate,
    pub risk: RiskScores,
    /// Probability of reaching the target before the stop.
    pub success_probability: f64,
    pub simulation: SimulationResult,
    pub reward: RewardMetrics,
}

// ─── Entry points ────────────────────────────────────────────────────

/// Analyze a normalized series. The sole computational entry point of the
/// engine; everything else delegates here.
pub fn compute_risk_reward(
    series: &PriceSeries,
    params: &AnalysisParams,
    config: &EngineConfig,
) -> Result<RiskRewardReport, DataError> {
    debug!(
        symbol = series.symbol(),
        bars = series.len(),
        target = params.target_price,
        stop = params.stop_loss,
        "starting risk/reward analysis"
    );

    let assessment = assess_risk(series, params.stop_loss, params.user_volume, &config.risk)?;

    let simulation = estimate_success_probability(
        series,
        assessment.current_price,
        params.target_price,
        params.stop_loss,
        &config.simulation,
    );

    let reward = compute_reward(
        assessment.current_price,
        assessment.scores.volatility,
        params.target_price,
        params.stop_loss,
        simulation.success_probability,
        &config.reward,
    );

    debug!(
        symbol = series.symbol(),
        level = ?assessment.scores.level,
        probability = simulation.success_probability,
        rating = ?reward.rating,
        "analysis complete"
    );

    Ok(RiskRewardReport {
        symbol: series.symbol().to_string(),
        current_price: assessment.current_price,
        target_price: params.target_price,
        stop_loss: params.stop_loss,
        user_volume: params.user_volume,
        recent_avg_volume: assessment.recent_avg_volume,
        volume_impact: assessment.volume_impact,
        bar_count: series.len(),
        series_start: series.first_date(),
        series_end: series.last_date(),
        risk: assessment.scores,
        success_probability: simulation.success_probability,
        simulation,
        reward,
    })
}

/// Normalize a raw provider payload, then analyze it.
pub fn compute_risk_reward_from_raw(
    payload: &RawDailyPayload,
    params: &AnalysisParams,
    config: &EngineConfig,
) -> Result<RiskRewardReport, DataError> {
    let series = normalize_daily(payload)?;
    compute_risk_reward(&series, params, config)
}
