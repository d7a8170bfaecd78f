//! Unit tests for the historical volatility estimator

use chrono::{Duration, NaiveDate};
use zonetrix::config::VolatilityMethod;
use zonetrix::indicators::volatility::{annualized_volatility, simple_volatility, volatility};
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

#[test]
fn test_too_short_series_yields_zero() {
    assert_eq!(annualized_volatility(&series_from_closes(&[]), 63), 0.0);
    assert_eq!(annualized_volatility(&series_from_closes(&[100.0]), 63), 0.0);
}

#[test]
fn test_constant_series_yields_zero() {
    let series = series_from_closes(&[100.0; 80]);
    assert_eq!(annualized_volatility(&series, 63), 0.0);
}

#[test]
fn test_varied_series_yields_positive_volatility() {
    let closes: Vec<f64> = (0..80)
        .map(|i| if i % 2 == 0 { 100.0 } else { 102.0 })
        .collect();
    let series = series_from_closes(&closes);
    assert!(annualized_volatility(&series, 63) > 0.0);
}

#[test]
fn test_annualization_scale() {
    // Alternating +1%/-1% daily moves: daily std is ~1%, annualized should
    // land near 1% * sqrt(252) ~ 15.9%.
    let mut closes = Vec::new();
    let mut price = 100.0;
    for i in 0..64 {
        closes.push(price);
        price *= if i % 2 == 0 { 1.01 } else { 0.99 };
    }
    let series = series_from_closes(&closes);
    let vol = annualized_volatility(&series, 63);
    assert!(vol > 10.0 && vol < 25.0, "unexpected volatility {}", vol);
}

#[test]
fn test_lookback_window_is_respected() {
    // Wild swings outside the trailing window must not affect the result.
    let mut closes = vec![10.0, 500.0, 3.0, 800.0];
    closes.extend(std::iter::repeat(100.0).take(70));
    let series = series_from_closes(&closes);
    assert_eq!(annualized_volatility(&series, 63), 0.0);
}

#[test]
fn test_simple_method_is_unannualized() {
    let closes: Vec<f64> = (0..80)
        .map(|i| if i % 2 == 0 { 100.0 } else { 102.0 })
        .collect();
    let series = series_from_closes(&closes);
    let simple = simple_volatility(&series, 63);
    let annualized = annualized_volatility(&series, 63);
    assert!(simple > 0.0);
    assert!(annualized > simple);
}

#[test]
fn test_method_dispatch() {
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i % 3) as f64).collect();
    let series = series_from_closes(&closes);
    assert_eq!(
        volatility(&series, 63, VolatilityMethod::LogAnnualized),
        annualized_volatility(&series, 63)
    );
    assert_eq!(
        volatility(&series, 63, VolatilityMethod::SimplePct),
        simple_volatility(&series, 63)
    );
}
