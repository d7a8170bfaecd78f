//! Unit tests for batch aggregation and subject urgency

use chrono::NaiveDate;
use zonetrix::models::indicators::{DeviationPoint, TrendPoint};
use zonetrix::models::signal::{SignalResult, TickerReport, Zone};
use zonetrix::report::summary::{
    best_zone_score, buy_tickers, is_last_day_of_month, subject_line,
};

fn signal(score: i32, buy: bool) -> SignalResult {
    SignalResult {
        last_close: 100.0,
        trends: vec![TrendPoint::new(20, 101.0)],
        deviations: vec![DeviationPoint::new(20, -1.0)],
        volatility_pct: 1.0,
        zone_score: score,
        zone: Zone::for_score(score),
        reason: "Below 20-day EMA".to_string(),
        buy_signal: buy,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_best_score_ignores_errored_tickers() {
    let reports = vec![
        TickerReport::ok("AAA", signal(60, false)),
        TickerReport::failed("BBB", "no data returned for BBB"),
        TickerReport::ok("CCC", signal(90, true)),
    ];
    assert_eq!(best_zone_score(&reports), Some(90));
}

#[test]
fn test_best_score_none_when_all_errored() {
    let reports = vec![
        TickerReport::failed("AAA", "fetch failed"),
        TickerReport::failed("BBB", "fetch failed"),
    ];
    assert_eq!(best_zone_score(&reports), None);
}

#[test]
fn test_buy_tickers_collects_only_fired_signals() {
    let reports = vec![
        TickerReport::ok("AAA", signal(100, true)),
        TickerReport::ok("BBB", signal(90, false)),
        TickerReport::failed("CCC", "fetch failed"),
    ];
    assert_eq!(buy_tickers(&reports), vec!["AAA".to_string()]);
}

#[test]
fn test_last_day_of_month() {
    assert!(is_last_day_of_month(date(2026, 1, 31)));
    assert!(!is_last_day_of_month(date(2026, 1, 30)));
    assert!(is_last_day_of_month(date(2024, 2, 29)));
    assert!(!is_last_day_of_month(date(2024, 2, 28)));
    assert!(is_last_day_of_month(date(2025, 12, 31)));
}

#[test]
fn test_subject_urgency_tiers() {
    let day = date(2026, 3, 10);

    let goated = vec![TickerReport::ok("AAA", signal(100, true))];
    assert!(subject_line(day, &goated, false).starts_with("Goated Price Alert:"));

    let great = vec![TickerReport::ok("AAA", signal(75, true))];
    assert!(subject_line(day, &great, false).starts_with("Great Accumulation Zone:"));

    let quiet = vec![TickerReport::ok("AAA", signal(20, false))];
    assert_eq!(
        subject_line(day, &quiet, false),
        "Accumulation Zone Report - 10 Mar 2026"
    );
}

#[test]
fn test_monthly_reminder_overrides_urgency() {
    let day = date(2026, 3, 31);
    let reports = vec![TickerReport::ok("AAA", signal(100, true))];
    assert!(subject_line(day, &reports, true).starts_with("Monthly Reminder:"));
}

#[test]
fn test_no_urgency_without_a_buy() {
    // A high score alone is not urgent; the buy flag gates the alert.
    let day = date(2026, 3, 10);
    let reports = vec![TickerReport::ok("AAA", signal(100, false))];
    assert_eq!(
        subject_line(day, &reports, false),
        "Accumulation Zone Report - 10 Mar 2026"
    );
}
