//! Contracts for the collaborators a curve collection is built from.
//!
//! The curve collection never reads result-set files itself. It consumes a
//! grid handle for the active-cell count and an init-data handle for
//! per-cell keyword vectors, unit conventions, and phase interpolant
//! factories. File formats live entirely behind these traits.

use crate::interpolant::PvtInterpolant;
use pvt_units::{UnitResult, UnitSystem};

/// Keyword of the per-cell PVT region vector in a result set.
pub const PVTNUM_KW: &str = "PVTNUM";

/// Grid topology handle.
pub trait CellGrid {
    /// Total number of active cells across all grids of the model.
    fn num_cells(&self) -> usize;
}

/// Initialization data of a simulation result set.
pub trait InitSource {
    /// Linearised per-cell integer data for `keyword`, in active-cell
    /// order. `None` (or an empty vector) when the result set does not
    /// carry the keyword for every grid of the model.
    fn linearised_cell_data_i32(&self, keyword: &str) -> Option<Vec<i32>>;

    /// Unit conventions the result set was serialized in.
    fn unit_conventions(&self) -> UnitResult<UnitSystem>;

    /// Oil-phase interpolant, when the result set defines tabulated oil
    /// properties.
    fn oil_interpolant(&self) -> Option<Box<dyn PvtInterpolant>>;

    /// Gas-phase interpolant, when the result set defines tabulated gas
    /// properties.
    fn gas_interpolant(&self) -> Option<Box<dyn PvtInterpolant>>;
}
