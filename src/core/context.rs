//! Shared context for batch runs.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::LastBuyStore;
use crate::report::Mailer;
use crate::services::market_data::PriceHistoryProvider;

/// Everything a batch run needs, injected once at startup.
///
/// The engine itself stays free of these collaborators; only the runtime
/// touches retrieval, delivery and bookkeeping.
pub struct ReportContext {
    pub provider: Arc<dyn PriceHistoryProvider + Send + Sync>,
    pub store: LastBuyStore,
    /// Absent when mail credentials are not configured; the report is then
    /// logged instead of delivered.
    pub mailer: Option<Mailer>,
    pub config: AppConfig,
}

impl ReportContext {
    pub fn new(
        provider: Arc<dyn PriceHistoryProvider + Send + Sync>,
        store: LastBuyStore,
        mailer: Option<Mailer>,
        config: AppConfig,
    ) -> Self {
        Self {
            provider,
            store,
            mailer,
            config,
        }
    }
}
