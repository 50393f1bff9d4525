//! pvt-core: stable foundation for respvt.
//!
//! Contains:
//! - phase (reservoir phase index and raw-curve kinds)
//! - curve (two-column series and the tagged miscible/immiscible curve)

pub mod curve;
pub mod phase;

// Re-exports: nice ergonomics for downstream crates
pub use curve::{CurveSeries, PvtCurve};
pub use phase::{Phase, RawCurve};
