//! Unit tests for the deviation calculator

use zonetrix::models::indicators::TrendPoint;
use zonetrix::signals::deviation::{deviation_pct, deviation_set};

#[test]
fn test_signed_percentage_deviation() {
    assert!((deviation_pct(110.0, 100.0) - 10.0).abs() < 1e-12);
    assert!((deviation_pct(95.0, 100.0) + 5.0).abs() < 1e-12);
    assert_eq!(deviation_pct(100.0, 100.0), 0.0);
}

#[test]
fn test_degenerate_trend_value_means_at_the_line() {
    assert_eq!(deviation_pct(100.0, 0.0), 0.0);
    assert_eq!(deviation_pct(100.0, f64::NAN), 0.0);
    assert_eq!(deviation_pct(100.0, f64::INFINITY), 0.0);
    assert_eq!(deviation_pct(100.0, f64::NEG_INFINITY), 0.0);
}

#[test]
fn test_deviation_set_parallels_trend_set() {
    let trends = vec![
        TrendPoint::new(20, 100.0),
        TrendPoint::new(50, 110.0),
        TrendPoint::new(100, 0.0),
        TrendPoint::new(200, 125.0),
    ];
    let deviations = deviation_set(100.0, &trends);

    assert_eq!(deviations.len(), trends.len());
    assert_eq!(
        deviations.iter().map(|d| d.horizon).collect::<Vec<_>>(),
        vec![20, 50, 100, 200]
    );
    assert_eq!(deviations[0].pct, 0.0);
    assert!(deviations[1].pct < 0.0);
    // Degenerate EMA: pinned to the trend line instead of raising.
    assert_eq!(deviations[2].pct, 0.0);
    assert_eq!(deviations[3].pct, -20.0);
}

#[test]
fn test_deviation_set_empty_trends() {
    assert!(deviation_set(100.0, &[]).is_empty());
}
