//! Deviation of the latest close from each trend line.

use crate::models::indicators::{DeviationPoint, TrendPoint};

/// Signed percentage distance of `current` from `ma`.
///
/// A zero, NaN or infinite trend value means "at the trend line": the
/// deviation is 0.0 and division never raises.
pub fn deviation_pct(current: f64, ma: f64) -> f64 {
    if ma == 0.0 || !ma.is_finite() {
        return 0.0;
    }
    let pct = (current - ma) / ma * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// One deviation per trend point, preserving horizon order.
pub fn deviation_set(last_close: f64, trends: &[TrendPoint]) -> Vec<DeviationPoint> {
    trends
        .iter()
        .map(|t| DeviationPoint::new(t.horizon, deviation_pct(last_close, t.value)))
        .collect()
}
