//! Historical volatility over a trailing window of daily closes.

use crate::common::math;
use crate::config::VolatilityMethod;
use crate::models::series::PriceSeries;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized historical volatility in percent.
///
/// Sample std-dev of log returns over the trailing `lookback` closes,
/// scaled by sqrt(252). Fewer than 2 observations yields 0.0, never an
/// error.
pub fn annualized_volatility(series: &PriceSeries, lookback: usize) -> f64 {
    let closes = series.trailing_closes(lookback);
    if closes.len() < 2 {
        return 0.0;
    }
    let returns = math::log_returns(&closes);
    math::sanitize(math::std_dev(&returns) * TRADING_DAYS_PER_YEAR.sqrt() * 100.0)
}

/// Unannualized std-dev of simple percentage returns over the window.
///
/// Alternative definition; the buy threshold is calibrated against one
/// definition per deployment, selected by configuration.
pub fn simple_volatility(series: &PriceSeries, lookback: usize) -> f64 {
    let closes = series.trailing_closes(lookback);
    if closes.len() < 2 {
        return 0.0;
    }
    let returns = math::pct_returns(&closes);
    math::sanitize(math::std_dev(&returns))
}

/// Volatility under the configured definition.
pub fn volatility(series: &PriceSeries, lookback: usize, method: VolatilityMethod) -> f64 {
    match method {
        VolatilityMethod::LogAnnualized => annualized_volatility(series, lookback),
        VolatilityMethod::SimplePct => simple_volatility(series, lookback),
    }
}
