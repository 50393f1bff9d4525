//! pvt-units: physical quantities and unit-system conversion for respvt.
//!
//! Provides:
//! - `Quantity`: the dimension families a PVT curve axis can carry
//! - `UnitSystem`: a named set of per-quantity scale factors relative to SI
//! - `Convert`: builder for directed conversions between two unit systems
//!
//! Three unit systems coexist at runtime: the *native* system a result set
//! was written in, the *internal* SI reference all evaluation happens in,
//! and an optional caller-selected *output* system. This crate knows
//! nothing about where the factors come from — the native system is built
//! from serialized source metadata by the data layer.

pub mod convert;
pub mod quantity;
pub mod system;

// Re-exports for ergonomics
pub use convert::{Conversion, Convert};
pub use quantity::Quantity;
pub use system::{internal_unit_conventions, UnitError, UnitResult, UnitSystem};
