use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::indicators::{DeviationPoint, TrendPoint};

/// Accumulation-zone label, one fixed band per score range.
///
/// Report rendering maps colors and severity off the score band alone, so
/// the label set must stay in sync with [`Zone::for_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Goated,
    Excellent,
    Great,
    Good,
    Caution,
    High,
    Expensive,
    VeryExpensive,
}

impl Zone {
    /// Map a zone score to its label band.
    pub fn for_score(score: i32) -> Self {
        match score {
            s if s >= 100 => Zone::Goated,
            s if s >= 90 => Zone::Excellent,
            s if s >= 75 => Zone::Great,
            s if s >= 60 => Zone::Good,
            s if s >= 30 => Zone::Caution,
            s if s >= 20 => Zone::High,
            s if s >= 10 => Zone::Expensive,
            _ => Zone::VeryExpensive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Goated => "Goated",
            Zone::Excellent => "Excellent",
            Zone::Great => "Great",
            Zone::Good => "Good",
            Zone::Caution => "Caution",
            Zone::High => "High",
            Zone::Expensive => "Expensive",
            Zone::VeryExpensive => "Very Expensive",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one engine run over one instrument's series.
///
/// Pure function of (series, config): no timestamps or other ambient state,
/// so identical inputs produce bit-identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub last_close: f64,
    /// One EMA per configured horizon, shortest horizon first.
    pub trends: Vec<TrendPoint>,
    /// Parallel to `trends`: signed % deviation of the latest close.
    pub deviations: Vec<DeviationPoint>,
    /// Annualized volatility in percent (or the configured alternative).
    pub volatility_pct: f64,
    pub zone_score: i32,
    pub zone: Zone,
    /// Short description of what the classifier keyed on.
    pub reason: String,
    pub buy_signal: bool,
}

/// Per-ticker outcome inside a batch: a signal or an error, never both.
///
/// Errored tickers are rendered distinctly in the report and excluded from
/// best-score aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<SignalResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TickerReport {
    pub fn ok(ticker: impl Into<String>, signal: SignalResult) -> Self {
        Self {
            ticker: ticker.into(),
            signal: Some(signal),
            error: None,
        }
    }

    pub fn failed(ticker: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            signal: None,
            error: Some(error.into()),
        }
    }

    pub fn is_buy(&self) -> bool {
        self.signal.as_ref().map(|s| s.buy_signal).unwrap_or(false)
    }
}
