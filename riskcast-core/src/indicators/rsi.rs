//! Relative Strength Index (RSI), rolling-mean variant.
//!
//! Uses simple rolling means of gains and losses (not Wilder smoothing),
//! with a minimum window of 1 so early values use however many deltas are
//! available. RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//! Edge case: a window whose loss mean is exactly 0 has no defined relative
//! strength — the value is `None` ("no signal"), never a division fault.

/// Rolling RSI over a close series.
///
/// Returns one entry per input close. The first bar has no delta and
/// contributes a zero gain and zero loss to its window, mirroring the
/// undefined first difference of the source series.
pub fn rolling_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "RSI period must be >= 1");
    let n = closes.len();

    // Per-day gains and losses; day 0 has neither.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    (0..n)
        .map(|i| {
            let start = i.saturating_sub(period - 1);
            let window = i - start + 1;
            let avg_gain: f64 = gains[start..=i].iter().sum::<f64>() / window as f64;
            let avg_loss: f64 = losses[start..=i].iter().sum::<f64>() / window as f64;
            if avg_loss == 0.0 {
                None
            } else {
                Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
            }
        })
        .collect()
}

/// Fraction of all samples whose RSI is strictly below `threshold`.
///
/// Undefined samples count as not-bearish; the denominator is the full
/// sample count. Empty input yields 0.0.
pub fn bearish_frequency(rsi: &[Option<f64>], threshold: f64) -> f64 {
    if rsi.is_empty() {
        return 0.0;
    }
    let bearish = rsi
        .iter()
        .filter(|v| matches!(v, Some(x) if *x < threshold))
        .count();
    bearish as f64 / rsi.len() as f64
}
