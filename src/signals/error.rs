//! Engine error taxonomy.
//!
//! Only input and configuration problems surface as errors; degenerate
//! numeric conditions are absorbed inside each calculation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The price series had no observations. Fatal for this instrument's
    /// run; no score is produced.
    EmptySeries,
    /// The engine configuration cannot be run (empty or non-monotonic
    /// horizons, negative thresholds).
    InvalidConfig(String),
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalError::EmptySeries => write!(f, "empty price series"),
            SignalError::InvalidConfig(reason) => write!(f, "invalid engine config: {}", reason),
        }
    }
}

impl std::error::Error for SignalError {}
