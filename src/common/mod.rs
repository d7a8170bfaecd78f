//! Shared numeric primitives used across indicators and signals.

pub mod math;
