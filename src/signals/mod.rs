//! Signal evaluation: deviation scoring, zone classification, engine.

pub mod classifier;
pub mod deviation;
pub mod engine;
pub mod error;

pub use classifier::{buy_signal, classify, ZoneCall};
pub use deviation::{deviation_pct, deviation_set};
pub use engine::SignalEngine;
pub use error::SignalError;
