//! Unit tests for the multi-horizon trend estimator

use chrono::{Duration, NaiveDate};
use zonetrix::indicators::trend::{horizon_ema, trend_set};
use zonetrix::models::series::{PricePoint, PriceSeries};

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start + Duration::days(i as i64), close))
        .collect();
    PriceSeries::from_points(points)
}

fn rising_series(count: usize) -> PriceSeries {
    let closes: Vec<f64> = (0..count).map(|i| 100.0 + i as f64 * 0.5).collect();
    series_from_closes(&closes)
}

#[test]
fn test_one_ema_per_horizon() {
    let series = rising_series(250);
    let trends = trend_set(&series, &[20, 50, 100, 200]);
    assert_eq!(trends.len(), 4);
    assert_eq!(
        trends.iter().map(|t| t.horizon).collect::<Vec<_>>(),
        vec![20, 50, 100, 200]
    );
    assert!(trends.iter().all(|t| t.value.is_finite()));
}

#[test]
fn test_shorter_horizon_tracks_price_closer() {
    // On a steadily rising series the short EMA sits nearer the latest
    // close than the long one.
    let series = rising_series(250);
    let trends = trend_set(&series, &[20, 200]);
    let last = series.last_close().unwrap();
    let short_gap = last - trends[0].value;
    let long_gap = last - trends[1].value;
    assert!(short_gap > 0.0);
    assert!(long_gap > short_gap);
}

#[test]
fn test_constant_series_ema_equals_close() {
    let series = series_from_closes(&[75.0; 220]);
    for trend in trend_set(&series, &[20, 50, 100, 200]) {
        assert!((trend.value - 75.0).abs() < 1e-12);
    }
}

#[test]
fn test_short_series_falls_back_to_average() {
    let series = series_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    // 6 points for a 20-day horizon: average of the available closes.
    assert_eq!(horizon_ema(&series, 20), Some(35.0));
}

#[test]
fn test_tiny_series_falls_back_to_last_close() {
    let series = series_from_closes(&[10.0, 20.0, 30.0]);
    assert_eq!(horizon_ema(&series, 20), Some(30.0));
}

#[test]
fn test_empty_series_yields_no_trend() {
    let series = series_from_closes(&[]);
    assert_eq!(horizon_ema(&series, 20), None);
    assert!(trend_set(&series, &[20, 50]).is_empty());
}

#[test]
fn test_exact_horizon_length_uses_ema() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    let ema = horizon_ema(&series, 20).unwrap();
    // Recursive EMA of a rising series sits below the last close and above
    // the plain average.
    let mean = closes.iter().sum::<f64>() / closes.len() as f64;
    assert!(ema > mean);
    assert!(ema < *closes.last().unwrap());
}
