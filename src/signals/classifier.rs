//! Zone classification and the buy decision.
//!
//! Two policies share one entry point. Both walk the horizons from the
//! longest toward the shortest: a long-horizon signal dominates a shorter
//! one when both apply, and that ordering decides which label wins.

use crate::config::{EngineConfig, ZonePolicy};
use crate::models::indicators::{DeviationPoint, TrendPoint};
use crate::models::signal::Zone;

/// Scores for breaching/touching a horizon, longest horizon first.
const HORIZON_TIERS: [i32; 4] = [100, 90, 75, 60];

/// Proximity scores when nothing is touched, longest horizon first.
const NEAR_BELOW_TIERS: [i32; 4] = [85, 70, 55, 40];
const NEAR_ABOVE_TIERS: [i32; 4] = [25, 15, 5, 0];

/// Minimum score for the buy gate under each policy.
const BUY_MIN_SCORE_BELOW_TREND: i32 = 75;
const BUY_MIN_SCORE_TREND_TOUCH: i32 = 60;

/// Outcome of classifying one deviation set.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCall {
    pub score: i32,
    pub zone: Zone,
    /// What the classifier keyed on, for report rendering.
    pub reason: String,
}

impl ZoneCall {
    fn new(score: i32, reason: String) -> Self {
        Self {
            score,
            zone: Zone::for_score(score),
            reason,
        }
    }
}

fn tier(tiers: &[i32; 4], index_from_longest: usize) -> i32 {
    tiers
        .get(index_from_longest)
        .copied()
        .unwrap_or(tiers[tiers.len() - 1])
}

/// Classify a deviation set (ordered shortest-to-longest horizon) under the
/// configured policy.
pub fn classify(deviations: &[DeviationPoint], config: &EngineConfig) -> ZoneCall {
    match config.policy {
        ZonePolicy::BelowTrend => classify_below_trend(deviations),
        ZonePolicy::TrendTouch => classify_trend_touch(deviations, config.touch_tolerance_pct),
    }
}

/// Below-trend tiering: the longest horizon the price sits below sets the
/// score; with nothing breached, the count of horizons the price sits above
/// sets the expensive-side tier.
fn classify_below_trend(deviations: &[DeviationPoint]) -> ZoneCall {
    for (i, dev) in deviations.iter().rev().enumerate() {
        if dev.is_below() {
            let score = tier(&HORIZON_TIERS, i);
            return ZoneCall::new(score, format!("Below {}-day EMA", dev.horizon));
        }
    }

    // At or above every trend line.
    let total = deviations.len();
    let above = deviations.iter().filter(|d| d.is_above()).count();
    if above == total {
        ZoneCall::new(0, "Above all EMAs".to_string())
    } else if above + 1 == total {
        ZoneCall::new(10, format!("Above {} of {} EMAs", above, total))
    } else if above + 2 == total {
        ZoneCall::new(20, format!("Above {} of {} EMAs", above, total))
    } else {
        let shortest = deviations.first().map(|d| d.horizon).unwrap_or(0);
        ZoneCall::new(30, format!("Near the {}-day EMA", shortest))
    }
}

/// Trend-touch proximity: the longest horizon within tolerance sets the
/// score; with no touch, the single nearest horizon does, modulated by
/// whether the price sits above or below it.
fn classify_trend_touch(deviations: &[DeviationPoint], tolerance_pct: f64) -> ZoneCall {
    for (i, dev) in deviations.iter().rev().enumerate() {
        if dev.touches(tolerance_pct) {
            let score = tier(&HORIZON_TIERS, i);
            return ZoneCall::new(score, format!("Touching {}-day EMA", dev.horizon));
        }
    }

    // Nothing touched: fall back to the nearest horizon. Ties go to the
    // longer horizon, consistent with the longest-first rule.
    let nearest = deviations
        .iter()
        .enumerate()
        .rev()
        .min_by(|(_, a), (_, b)| {
            a.pct
                .abs()
                .partial_cmp(&b.pct.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some((idx, dev)) = nearest else {
        return ZoneCall::new(0, "No trend data".to_string());
    };
    let index_from_longest = deviations.len() - 1 - idx;

    if dev.is_below() {
        let score = tier(&NEAR_BELOW_TIERS, index_from_longest);
        ZoneCall::new(score, format!("Near but below {}-day EMA", dev.horizon))
    } else {
        let score = tier(&NEAR_ABOVE_TIERS, index_from_longest);
        ZoneCall::new(score, format!("Above {}-day EMA", dev.horizon))
    }
}

/// The buy gate.
///
/// Below-trend policy re-checks the strict price-below-all-trends condition
/// independently of the score; trend-touch does not carry that check. The
/// two gates are deliberately distinct policies, not variants of one rule.
pub fn buy_signal(
    policy: ZonePolicy,
    score: i32,
    volatility_pct: f64,
    volatility_threshold_pct: f64,
    last_close: f64,
    trends: &[TrendPoint],
) -> bool {
    let calm = volatility_pct <= volatility_threshold_pct;
    match policy {
        ZonePolicy::BelowTrend => {
            score >= BUY_MIN_SCORE_BELOW_TREND
                && calm
                && !trends.is_empty()
                && trends.iter().all(|t| last_close < t.value)
        }
        ZonePolicy::TrendTouch => score >= BUY_MIN_SCORE_TREND_TOUCH && calm,
    }
}
