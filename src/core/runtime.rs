//! Batch runtime: evaluate every ticker, compose and deliver the report.

use chrono::Utc;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::context::ReportContext;
use crate::models::signal::TickerReport;
use crate::report::html::{self, ReportMeta};
use crate::report::summary;
use crate::signals::engine::SignalEngine;

/// Result of one batch run, for callers that want to inspect it (tests,
/// one-shot mode logging).
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub reports: Vec<TickerReport>,
    pub best_score: Option<i32>,
    pub subject: String,
}

pub struct ReportRuntime {
    ctx: Arc<ReportContext>,
}

impl ReportRuntime {
    pub fn new(ctx: Arc<ReportContext>) -> Self {
        Self { ctx }
    }

    /// Fetch and score one ticker. Failures become an error report for that
    /// ticker only; they never abort the batch.
    pub async fn evaluate_ticker(ctx: &ReportContext, ticker: &str) -> TickerReport {
        let days = ctx.config.engine.required_history_days();

        let series = match ctx.provider.daily_history(ticker, days).await {
            Ok(series) => series,
            Err(e) => {
                error!(ticker = %ticker, error = %e, "failed to fetch history for {}", ticker);
                return TickerReport::failed(ticker, e.to_string());
            }
        };

        match SignalEngine::evaluate(&series, &ctx.config.engine) {
            Ok(signal) => {
                info!(
                    ticker = %ticker,
                    zone_score = signal.zone_score,
                    zone = %signal.zone,
                    buy = signal.buy_signal,
                    "{}: zone {} (score {}), buy={}",
                    ticker,
                    signal.zone,
                    signal.zone_score,
                    signal.buy_signal
                );
                TickerReport::ok(ticker, signal)
            }
            Err(e) => {
                error!(ticker = %ticker, error = %e, "signal evaluation failed for {}", ticker);
                TickerReport::failed(ticker, e.to_string())
            }
        }
    }

    /// Evaluate all configured tickers concurrently. Instruments have no
    /// data dependency on one another, so each gets its own task; report
    /// order follows the configured ticker order.
    pub async fn run_batch(&self) -> Vec<TickerReport> {
        let tasks = self.ctx.config.tickers.iter().map(|ticker| {
            let ctx = self.ctx.clone();
            let ticker = ticker.clone();
            tokio::spawn(async move { Self::evaluate_ticker(&ctx, &ticker).await })
        });

        join_all(tasks)
            .await
            .into_iter()
            .zip(&self.ctx.config.tickers)
            .map(|(joined, ticker)| match joined {
                Ok(report) => report,
                Err(e) => {
                    error!(ticker = %ticker, error = %e, "evaluation task panicked for {}", ticker);
                    TickerReport::failed(ticker.clone(), "evaluation task failed")
                }
            })
            .collect()
    }

    /// One full report cycle: batch, summary, HTML, delivery, bookkeeping.
    pub async fn run_once(&self) -> BatchOutcome {
        let today = Utc::now().date_naive();
        let force_buy = summary::is_last_day_of_month(today);

        info!(
            tickers = self.ctx.config.tickers.len(),
            force_buy = force_buy,
            "starting batch over {} tickers",
            self.ctx.config.tickers.len()
        );

        let reports = self.run_batch().await;
        let best_score = summary::best_zone_score(&reports);
        let subject = summary::subject_line(today, &reports, force_buy);

        let meta = ReportMeta {
            date: today,
            force_buy,
            volatility_threshold_pct: self.ctx.config.engine.volatility_threshold_pct,
        };
        let body = html::render(&reports, &meta);

        match &self.ctx.mailer {
            Some(mailer) => {
                if let Err(e) = mailer.send_html(&subject, body).await {
                    error!(error = %e, "failed to deliver report");
                }
            }
            None => {
                warn!("mail not configured; report generated but not delivered");
            }
        }

        let buys = summary::buy_tickers(&reports);
        if !buys.is_empty() {
            info!(tickers = ?buys, "buy signal fired for {}", buys.join(", "));
            if let Err(e) = self.ctx.store.record_buys(&buys, today).await {
                error!(error = %e, "failed to persist last-buy dates");
            }
        }

        BatchOutcome {
            reports,
            best_score,
            subject,
        }
    }
}
