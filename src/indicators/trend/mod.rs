//! Trend indicators: multi-horizon EMA.

pub mod ema;

pub use ema::*;
