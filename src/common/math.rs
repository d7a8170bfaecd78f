//! Numeric helpers shared by the trend and volatility estimators.

/// Collapse NaN and infinite values to 0.0.
///
/// Every number leaving the engine passes through this, so downstream
/// consumers never see a degenerate float.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Simple average of the last `period` values.
///
/// Returns `None` when `values` is empty or `period` is 0. When fewer than
/// `period` values are available, averages what is there.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if values.is_empty() || period == 0 {
        return None;
    }
    let window = if values.len() > period {
        &values[values.len() - period..]
    } else {
        values
    };
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Recursive EMA over the full slice with smoothing `alpha = 2 / (period + 1)`,
/// seeded with the first value. Yields the EMA at the last observation.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    let first = *values.first()?;
    if period == 0 {
        return None;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut current = first;
    for value in &values[1..] {
        current = alpha * value + (1.0 - alpha) * current;
    }
    Some(current)
}

/// Sample standard deviation (n - 1 divisor). 0.0 for fewer than 2 values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Log returns `ln(close_t / close_{t-1})` over consecutive closes.
///
/// Pairs with a non-positive or non-finite close are skipped rather than
/// producing NaN.
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[1] > 0.0 && w[0].is_finite() && w[1].is_finite())
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}

/// Simple percentage returns `(close_t - close_{t-1}) / close_{t-1} * 100`.
pub fn pct_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[0].is_finite() && w[1].is_finite())
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .collect()
}
