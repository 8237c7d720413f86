//! Radar chart composition — a stateless map from a finished report to the
//! drawing parameters a presentation layer needs.
//!
//! No canvas, no image encoding, no global figure state: callers get
//! explicit categories, values, and labels and render however they like.

use serde::{Deserialize, Serialize};

use crate::report::RiskRewardReport;

/// Axis labels for the four risk dimensions, in plot order.
pub const RISK_CATEGORIES: [&str; 4] = ["Volatility", "Drawdown", "Liquidity", "Bearishness"];

/// Everything needed to draw the risk radar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarChartSpec {
    pub title: String,
    pub categories: Vec<String>,
    /// Normalized scores with the first value repeated at the end, closing
    /// the polygon.
    pub values: Vec<f64>,
    /// Radial gridline positions.
    pub axis_ticks: Vec<f64>,
    /// Tick labels, formatted as percentages.
    pub axis_labels: Vec<String>,
}

impl RadarChartSpec {
    /// Compose the radar spec for a report.
    pub fn from_report(report: &RiskRewardReport) -> Self {
        let scores = [
            report.risk.volatility_norm,
            report.risk.drawdown_norm,
            report.risk.liquidity_norm,
            report.risk.bearish_norm,
        ];
        let mut values: Vec<f64> = scores.to_vec();
        values.push(scores[0]);

        let mut title = format!(
            "Risk Profile for {}\nCurrent: ${:.2} | Target: ${:.2} | Stop: ${:.2}",
            report.symbol, report.current_price, report.target_price, report.stop_loss
        );
        if let (Some(volume), Some(impact)) = (report.user_volume, report.volume_impact) {
            title.push_str(&format!(
                "\nOrder: {volume:.0} shares ({:.1}% of recent volume)",
                impact * 100.0
            ));
        }

        let axis_ticks = vec![0.25, 0.50, 0.75, 1.00];
        let axis_labels = axis_ticks
            .iter()
            .map(|t| format!("{:.0}%", t * 100.0))
            .collect();

        Self {
            title,
            categories: RISK_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            values,
            axis_ticks,
            axis_labels,
        }
    }
}
