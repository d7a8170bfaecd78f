use serde::{Deserialize, Serialize};

/// EMA value for one horizon (lookback in trading days).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub horizon: u32,
    pub value: f64,
}

impl TrendPoint {
    pub fn new(horizon: u32, value: f64) -> Self {
        Self { horizon, value }
    }
}

/// Signed percentage distance of the latest close from one horizon's EMA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationPoint {
    pub horizon: u32,
    pub pct: f64,
}

impl DeviationPoint {
    pub fn new(horizon: u32, pct: f64) -> Self {
        Self { horizon, pct }
    }

    /// Latest close sits below this trend line.
    pub fn is_below(&self) -> bool {
        self.pct < 0.0
    }

    /// Latest close sits above this trend line.
    pub fn is_above(&self) -> bool {
        self.pct > 0.0
    }

    /// Deviation is within `tolerance_pct` of the trend line.
    pub fn touches(&self, tolerance_pct: f64) -> bool {
        self.pct.abs() <= tolerance_pct
    }
}
