//! Zonetrix Worker
//!
//! Runs the accumulation-zone report batch: fetch daily history for each
//! configured ticker, score it, deliver the HTML report by mail. With
//! `REPORT_CRON` set it stays up and re-runs on schedule; otherwise it runs
//! one batch and exits (external scheduler mode).

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use zonetrix::config::{get_environment, AppConfig};
use zonetrix::core::context::ReportContext;
use zonetrix::core::runtime::ReportRuntime;
use zonetrix::core::scheduler::ReportScheduler;
use zonetrix::db::LastBuyStore;
use zonetrix::logging;
use zonetrix::report::Mailer;
use zonetrix::services::yahoo::YahooFinanceProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    config.engine.validate().map_err(|e| format!("bad engine config: {}", e))?;

    info!("Starting Zonetrix Worker");
    info!(environment = %get_environment(), "Environment");
    info!(
        tickers = config.tickers.len(),
        policy = ?config.engine.policy,
        "Tracking {} tickers",
        config.tickers.len()
    );

    let provider = YahooFinanceProvider::new()
        .with_min_points(config.engine.max_horizon() as usize);
    let store = LastBuyStore::new(&config.last_buy_path);

    let mailer = match &config.mail {
        Some(mail_config) => match Mailer::from_config(mail_config) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                warn!(error = %e, "mail configuration invalid; reports will not be delivered");
                None
            }
        },
        None => {
            warn!("EMAIL_SENDER not set; reports will not be delivered");
            None
        }
    };

    let report_cron = config.report_cron.clone();
    let ctx = Arc::new(ReportContext::new(
        Arc::new(provider),
        store,
        mailer,
        config,
    ));
    let runtime = ReportRuntime::new(ctx);

    match report_cron {
        None => {
            // One-shot mode: the surrounding cron/CI owns the cadence.
            let outcome = runtime.run_once().await;
            info!(
                best_score = ?outcome.best_score,
                subject = %outcome.subject,
                "batch complete"
            );
        }
        Some(cron_expr) => {
            let (tx, mut rx) = mpsc::channel(1);
            let scheduler = ReportScheduler::new(&cron_expr, tx)
                .map_err(|e| format!("failed to create scheduler: {}", e))?;
            scheduler.start().await;

            info!("Worker started, waiting for schedule ticks or shutdown signal");
            loop {
                tokio::select! {
                    tick = rx.recv() => {
                        if tick.is_none() {
                            error!("scheduler channel closed");
                            break;
                        }
                        let outcome = runtime.run_once().await;
                        info!(
                            best_score = ?outcome.best_score,
                            "scheduled batch complete"
                        );
                    }
                    _ = signal::ctrl_c() => {
                        info!("Shutting down worker...");
                        scheduler.stop().await;
                        break;
                    }
                }
            }
            info!("Worker stopped");
        }
    }

    Ok(())
}
