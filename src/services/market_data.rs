//! Price history provider interface the engine pipeline consumes.

use crate::models::series::PriceSeries;
use async_trait::async_trait;

/// Supplies a fully materialized daily close series for one instrument.
///
/// Retrieval failure or an empty/short series must surface as an error,
/// never as a partially valid series.
#[async_trait]
pub trait PriceHistoryProvider {
    async fn daily_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<PriceSeries, Box<dyn std::error::Error + Send + Sync>>;
}
