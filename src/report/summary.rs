//! Cross-ticker aggregation for notification urgency.

use chrono::{Datelike, NaiveDate};

use crate::models::signal::TickerReport;

/// Best zone score across non-errored tickers; `None` when every ticker
/// errored. Errored tickers never participate in urgency selection.
pub fn best_zone_score(reports: &[TickerReport]) -> Option<i32> {
    reports
        .iter()
        .filter_map(|r| r.signal.as_ref())
        .map(|s| s.zone_score)
        .max()
}

/// Tickers whose buy flag fired this batch.
pub fn buy_tickers(reports: &[TickerReport]) -> Vec<String> {
    reports
        .iter()
        .filter(|r| r.is_buy())
        .map(|r| r.ticker.clone())
        .collect()
}

/// Last calendar day of the month: the monthly accumulate reminder goes out
/// regardless of signals on that day.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// Subject line with urgency derived from the batch outcome.
pub fn subject_line(date: NaiveDate, reports: &[TickerReport], force_buy: bool) -> String {
    let base = format!("Accumulation Zone Report - {}", date.format("%d %b %Y"));

    if force_buy {
        return format!("Monthly Reminder: {}", base);
    }

    if reports.iter().any(|r| r.is_buy()) {
        match best_zone_score(reports) {
            Some(best) if best >= 90 => return format!("Goated Price Alert: {}", base),
            Some(best) if best >= 75 => return format!("Great Accumulation Zone: {}", base),
            _ => {}
        }
    }

    base
}
