//! Riskcast Engine — the quantitative risk/reward pipeline.
//!
//! Stages, in pipeline order:
//! - Risk scoring: four normalized dimensions plus a composite level
//! - Monte Carlo simulation: historical bootstrap of target-vs-stop outcomes
//! - Reward metrics: annualized return, Sharpe, probability-weighted
//!   risk/reward ratio, qualitative rating
//! - Report orchestration: sequences the stages and merges one immutable
//!   `RiskRewardReport`
//!
//! Data flows strictly forward; each stage hands its output to the next by
//! value. The only entry points callers need are
//! [`report::compute_risk_reward`] and
//! [`report::compute_risk_reward_from_raw`].

pub mod chart;
pub mod report;
pub mod reward;
pub mod risk;
pub mod simulation;

pub use chart::RadarChartSpec;
pub use report::{compute_risk_reward, compute_risk_reward_from_raw};
pub use report::{AnalysisParams, EngineConfig, RiskRewardReport};
pub use reward::{MetricOutcome, NumericAnomaly, Rating, RewardConfig, RewardMetrics};
pub use risk::{RiskAssessment, RiskConfig, RiskLevel, RiskScores};
pub use simulation::{SimulationConfig, SimulationResult};
