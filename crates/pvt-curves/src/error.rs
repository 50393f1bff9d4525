//! Errors raised while building a curve collection.
//!
//! Queries never error: invalid and unsupported requests produce empty
//! results by contract. Only construction from source data is fallible.

use pvt_units::UnitError;
use thiserror::Error;

/// Result type for curve-collection construction.
pub type CurveResult<T> = Result<T, CurveError>;

#[derive(Error, Debug)]
pub enum CurveError {
    /// Native unit conventions missing or non-physical.
    #[error("Unit conventions: {0}")]
    Units(#[from] UnitError),

    /// Region table present but inconsistent with the grid.
    #[error("Region table: {what} (expected {expected}, got {got})")]
    RegionTableSize {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Region table entry outside the 1-based identifier range.
    #[error("Region table: invalid region id {id} for cell {cell}")]
    InvalidRegionId { cell: usize, id: i32 },
}
