//! Cron-driven trigger for batch runs.
//!
//! The deployment default is an external scheduler invoking the worker
//! once; this in-process loop covers long-running deployments. Each tick
//! sends a marker over a channel, the worker loop runs the batch.

use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{error, info};

/// Marker sent on every schedule tick.
#[derive(Debug, Clone, Copy)]
pub struct BatchTick;

pub struct ReportScheduler {
    schedule: Schedule,
    tx: mpsc::Sender<BatchTick>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ReportScheduler {
    /// Parse a cron expression (seconds-resolution, `cron` crate syntax).
    pub fn new(
        cron_expr: &str,
        tx: mpsc::Sender<BatchTick>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let schedule = Schedule::from_str(cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(cron = %cron_expr, "scheduler created with cron '{}'", cron_expr);

        Ok(Self {
            schedule,
            tx,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Spawn the tick loop.
    pub async fn start(&self) {
        let schedule = self.schedule.clone();
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            info!("scheduler started, waiting for next tick");
            loop {
                let next = schedule.upcoming(chrono::Utc).next();
                match next {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let wait = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(wait).await;
                        }
                        if let Err(e) = tx.send(BatchTick).await {
                            error!(error = %e, "batch channel closed, scheduler exiting");
                            break;
                        }
                    }
                    None => {
                        // Schedule has no future fire times.
                        info!("schedule exhausted, scheduler exiting");
                        break;
                    }
                }
            }
        });

        let mut slot = self.handle.write().await;
        *slot = Some(handle);
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
