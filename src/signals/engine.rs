//! The signal engine: trend → deviation / volatility → zone decision.

use crate::common::math;
use crate::config::EngineConfig;
use crate::indicators::trend::trend_set;
use crate::indicators::volatility::volatility;
use crate::models::series::PriceSeries;
use crate::models::signal::SignalResult;
use crate::signals::classifier;
use crate::signals::deviation::deviation_set;
use crate::signals::error::SignalError;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate one instrument's series into a zone score, label and buy
    /// flag.
    ///
    /// Pure and stateless: identical series and config produce identical
    /// results. Empty series and invalid configuration are the only error
    /// paths; every degenerate numeric condition is absorbed by the stage
    /// that produced it.
    pub fn evaluate(
        series: &PriceSeries,
        config: &EngineConfig,
    ) -> Result<SignalResult, SignalError> {
        config.validate()?;

        let last_close = math::sanitize(series.last_close().ok_or(SignalError::EmptySeries)?);

        let trends = trend_set(series, &config.horizons);
        let deviations = deviation_set(last_close, &trends);
        let volatility_pct = volatility(
            series,
            config.volatility_lookback,
            config.volatility_method,
        );

        let call = classifier::classify(&deviations, config);
        let buy_signal = classifier::buy_signal(
            config.policy,
            call.score,
            volatility_pct,
            config.volatility_threshold_pct,
            last_close,
            &trends,
        );

        Ok(SignalResult {
            last_close,
            trends,
            deviations,
            volatility_pct,
            zone_score: call.score,
            zone: call.zone,
            reason: call.reason,
            buy_signal,
        })
    }
}
