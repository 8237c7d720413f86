//! Return and dispersion statistics — pure functions shared by the scoring
//! stages. Values in, scalar out; no dependencies on the pipeline.

/// Trading days per year, used for annualization throughout the engine.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator). Fewer than 2 values yields 0.0.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Annualized volatility of a daily return series: std * sqrt(252).
pub fn annualized_volatility(daily_returns: &[f64]) -> f64 {
    std_dev(daily_returns) * TRADING_DAYS_PER_YEAR.sqrt()
}
