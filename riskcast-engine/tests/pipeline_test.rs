//! End-to-end pipeline scenarios over the public engine API.
//!
//! Each scenario builds a deliberately shaped series and checks the merged
//! report rather than any single stage.

use chrono::NaiveDate;

use riskcast_core::data::{RawDailyBar, RawDailyPayload, RawMeta};
use riskcast_core::domain::{Bar, PriceSeries};
use riskcast_core::error::DataError;
use riskcast_engine::report::{compute_risk_reward, compute_risk_reward_from_raw, AnalysisParams};
use riskcast_engine::risk::{assess_risk, RiskConfig, RiskLevel};
use riskcast_engine::simulation::{simulate_from_returns, SimulationConfig};
use riskcast_engine::EngineConfig;

fn make_series(closes: &[f64], volumes: &[f64]) -> PriceSeries {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .zip(volumes.iter())
        .enumerate()
        .map(|(i, (&close, &volume))| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            close,
            volume,
        })
        .collect();
    PriceSeries::new("TEST", bars).unwrap()
}

fn params(target: f64, stop: f64, user_volume: Option<f64>) -> AnalysisParams {
    AnalysisParams {
        target_price: target,
        stop_loss: stop,
        user_volume,
    }
}

// ── Scenario: quiet steady rally ─────────────────────────────────────

/// 30 ascending closes 100..129, constant volume, stop below, target above.
#[test]
fn steady_rally_scores_low_risk() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let series = make_series(&closes, &[1_000.0; 30]);

    let report = compute_risk_reward(
        &series,
        &params(140.0, 95.0, Some(0.0)),
        &EngineConfig::default(),
    )
    .unwrap();

    // Monotone series → tiny return variance.
    assert!(report.risk.volatility < 0.05, "vol = {}", report.risk.volatility);

    // Drawdown to the stop: (129 - 95) / 129.
    let expected_drawdown = (129.0 - 95.0) / 129.0;
    assert!((report.risk.drawdown - expected_drawdown).abs() < 1e-12);

    // Recent volume equals historical average → no liquidity signal.
    assert!(report.risk.liquidity.abs() < 1e-12);

    // A zero order size has zero impact and never scales liquidity.
    assert_eq!(report.volume_impact, Some(0.0));

    assert_eq!(report.risk.level, RiskLevel::Low);
}

// ── Scenario: significant order in a thinning market ─────────────────

/// Same rally, but recent volume has dried up and the caller intends a
/// large order: liquidity risk is the base value scaled by (1 + impact),
/// strictly above the no-order case.
#[test]
fn large_order_scales_liquidity_risk() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let mut volumes = vec![10_000.0; 40];
    for v in volumes.iter_mut().skip(20) {
        *v = 1_000.0; // recent 20 bars trade thin
    }
    let series = make_series(&closes, &volumes);
    let config = EngineConfig::default();

    let without = compute_risk_reward(&series, &params(160.0, 95.0, None), &config).unwrap();
    let with_order =
        compute_risk_reward(&series, &params(160.0, 95.0, Some(5_000.0)), &config).unwrap();

    // 5000 shares against 1000 recent average → impact 5.0.
    assert_eq!(with_order.volume_impact, Some(5.0));
    let expected = without.risk.liquidity * 6.0;
    assert!(
        (with_order.risk.liquidity - expected).abs() < 1e-9,
        "expected {expected}, got {}",
        with_order.risk.liquidity
    );
    assert!(with_order.risk.liquidity > without.risk.liquidity);
}

// ── Scenario: target already met, no downside possible ───────────────

/// Zero-variance returns and a target at/below the entry: every bootstrap
/// path trivially touches the target.
#[test]
fn already_met_target_is_certain() {
    let returns = vec![0.0; 60];
    let config = SimulationConfig {
        trial_count: 2000,
        lookback_days: 60,
        seed: 42,
    };
    let result = simulate_from_returns(&returns, 100.0, 99.99, 50.0, &config);
    assert!(!result.neutral_fallback);
    assert!((result.success_probability - 1.0).abs() < 1e-12);
}

// ── Scenario: series too short ───────────────────────────────────────

/// A 3-bar series: the risk scorer refuses, and — independently — the
/// simulator falls back to the neutral probability.
#[test]
fn three_bar_series_fails_scoring_and_falls_back_in_simulation() {
    let series = make_series(&[100.0, 101.0, 102.0], &[1_000.0; 3]);

    let err = assess_risk(&series, 95.0, None, &RiskConfig::default()).unwrap_err();
    assert!(matches!(err, DataError::InsufficientData { got: 3, .. }));

    // Two daily returns < five → neutral fallback, decided independently
    // of the scorer.
    let result = simulate_from_returns(
        &series.daily_returns(),
        102.0,
        140.0,
        95.0,
        &SimulationConfig::default(),
    );
    assert!(result.neutral_fallback);
    assert_eq!(result.success_probability, 0.5);

    // The orchestrator surfaces the scorer's error unchanged.
    let pipeline_err = compute_risk_reward(
        &series,
        &params(140.0, 95.0, None),
        &EngineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(pipeline_err, DataError::InsufficientData { .. }));
}

// ── Degenerate numerics surface as tagged outcomes ───────────────────

#[test]
fn constant_price_series_tags_zero_volatility() {
    let series = make_series(&[100.0; 30], &[1_000.0; 30]);
    let report = compute_risk_reward(
        &series,
        &params(110.0, 95.0, None),
        &EngineConfig::default(),
    )
    .unwrap();

    assert!(!report.reward.sharpe_ratio.is_defined());
    // Serialized report stays NaN-free (serde_json renders NaN as null;
    // absent optionals are skipped entirely).
    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("null"), "NaN leaked into the report: {json}");
}

#[test]
fn raw_payload_flows_through_the_whole_pipeline() {
    let mut payload = RawDailyPayload {
        meta: Some(RawMeta {
            symbol: Some("AAPL".into()),
        }),
        series: Default::default(),
    };
    for i in 0..30u32 {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i as i64);
        payload.series.insert(
            date.format("%Y-%m-%d").to_string(),
            RawDailyBar::from_close_volume(100.0 + f64::from(i), 1_000.0),
        );
    }

    let report = compute_risk_reward_from_raw(
        &payload,
        &params(140.0, 95.0, None),
        &EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(report.symbol, "AAPL");
    assert_eq!(report.bar_count, 30);
    assert!((report.current_price - 129.0).abs() < 1e-12);
}

#[test]
fn empty_payload_is_an_error_not_a_crash() {
    let err = compute_risk_reward_from_raw(
        &RawDailyPayload::default(),
        &params(140.0, 95.0, None),
        &EngineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, DataError::EmptySeries));
}
