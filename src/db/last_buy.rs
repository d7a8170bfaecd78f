//! JSON-file store for per-ticker last buy dates.
//!
//! External bookkeeping around the engine, not part of classification. A
//! missing or corrupt file degrades to an empty map with a logged warning,
//! so a bad state file never blocks a report run.

use chrono::NaiveDate;
use serde_json;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type StoreError = Box<dyn std::error::Error + Send + Sync>;

pub struct LastBuyStore {
    path: PathBuf,
}

impl LastBuyStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the ticker → last-buy-date map.
    pub async fn load(&self) -> HashMap<String, NaiveDate> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "unreadable last-buy file, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => {
                debug!(path = %self.path.display(), "no last-buy file yet");
                HashMap::new()
            }
        }
    }

    /// Persist the map, pretty-printed for hand inspection.
    pub async fn save(&self, dates: &HashMap<String, NaiveDate>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(dates)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    /// Record a buy date for each ticker and persist in one write.
    pub async fn record_buys(
        &self,
        tickers: &[String],
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        if tickers.is_empty() {
            return Ok(());
        }
        let mut dates = self.load().await;
        for ticker in tickers {
            dates.insert(ticker.clone(), date);
        }
        self.save(&dates).await
    }
}
