//! Multi-horizon EMA trend estimator.

use crate::common::math;
use crate::models::indicators::TrendPoint;
use crate::models::series::PriceSeries;

/// Minimum observations before the short-series fallback switches from
/// "last close" to "average of available closes".
const MIN_POINTS_FOR_AVERAGE: usize = 5;

/// EMA at the last observed date for one horizon.
///
/// Standard recursive EMA with `alpha = 2 / (horizon + 1)`, seeded by the
/// first close. Short series degrade instead of failing: with fewer than
/// `horizon` points the value falls back to the simple average of the
/// available closes, or to the last close itself when fewer than 5 points
/// exist. Degenerate results collapse to 0.0.
pub fn horizon_ema(series: &PriceSeries, horizon: u32) -> Option<f64> {
    let closes = series.closes();
    if closes.is_empty() {
        return None;
    }

    let value = if closes.len() >= horizon as usize {
        math::ema(&closes, horizon as usize)?
    } else if closes.len() >= MIN_POINTS_FOR_AVERAGE {
        math::sma(&closes, horizon as usize)?
    } else {
        *closes.last()?
    };

    Some(math::sanitize(value))
}

/// One EMA per horizon, in the order the horizons are given
/// (shortest-to-longest by configuration contract).
///
/// Empty series is the caller's fatal input error; this returns an empty
/// set only in that case.
pub fn trend_set(series: &PriceSeries, horizons: &[u32]) -> Vec<TrendPoint> {
    horizons
        .iter()
        .filter_map(|&h| horizon_ema(series, h).map(|value| TrendPoint::new(h, value)))
        .collect()
}
