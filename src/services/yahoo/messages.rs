//! Typed subset of the Yahoo Finance v8 chart payload.

use chrono::DateTime;
use serde::Deserialize;

use crate::models::series::{PricePoint, PriceSeries};

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    /// Per-day closes; trading halts show up as nulls.
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}

impl ChartResult {
    /// Pair timestamps with closes, dropping null entries. Ordering and
    /// positivity are normalized by `PriceSeries::from_points`.
    pub fn into_series(self) -> PriceSeries {
        let timestamps = self.timestamp.unwrap_or_default();
        let closes = self
            .indicators
            .quote
            .into_iter()
            .next()
            .and_then(|q| q.close)
            .unwrap_or_default();

        let points = timestamps
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close?;
                let date = DateTime::from_timestamp(ts, 0)?.date_naive();
                Some(PricePoint::new(date, close))
            })
            .collect();

        PriceSeries::from_points(points)
    }
}
