//! Yahoo Finance daily-history provider with retrying fetch.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;
use tracing::{debug, warn};

use super::messages::ChartResponse;
use crate::models::series::PriceSeries;
use crate::services::market_data::PriceHistoryProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_RETRIES: usize = 3;

type ProviderError = Box<dyn std::error::Error + Send + Sync>;

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
    /// Series shorter than this are rejected as an explicit error rather
    /// than handed downstream as partially valid.
    min_points: usize,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            min_points: 0,
        }
    }

    /// Point the provider at a different endpoint (tests use a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Require at least this many observations in a fetched series.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    async fn fetch_chart(&self, symbol: &str, days: u32) -> Result<ChartResponse, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[("range", format!("{}d", days)), ("interval", "1d".into())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ChartResponse>().await?)
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceHistoryProvider for YahooFinanceProvider {
    async fn daily_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<PriceSeries, ProviderError> {
        debug!(symbol = %symbol, days = days, "fetching daily history for {}", symbol);

        let response = (|| self.fetch_chart(symbol, days))
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRIES))
            .notify(|err, dur| {
                warn!(symbol = %symbol, error = %err, "chart fetch failed, retrying in {:?}", dur);
            })
            .await?;

        if let Some(err) = response.chart.error {
            return Err(Box::new(std::io::Error::other(format!(
                "chart error for {}: {} ({})",
                symbol, err.description, err.code
            ))));
        }

        let result = response
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| {
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no data returned for {}", symbol),
                )) as ProviderError
            })?;

        let series = result.into_series();
        if series.is_empty() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no usable closes for {}", symbol),
            )));
        }
        if series.len() < self.min_points {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "insufficient data for {}: {} points, need {}",
                    symbol,
                    series.len(),
                    self.min_points
                ),
            )));
        }

        debug!(
            symbol = %symbol,
            points = series.len(),
            "fetched {} daily closes for {}",
            series.len(),
            symbol
        );
        Ok(series)
    }
}
