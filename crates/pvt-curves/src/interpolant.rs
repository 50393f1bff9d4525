//! Phase interpolant contract.

use pvt_core::{PvtCurve, RawCurve};

/// Tabulated property interpolant for one phase.
///
/// Implementations hold the per-region property tables of a result set and
/// perform the actual interpolation. One instance serves every region; the
/// `region` argument is the 0-based region index (callers convert from the
/// 1-based PVTNUM identifier).
///
/// Point-evaluation contracts:
/// - `pressure` and `mix_ratio` have equal length; the mixing ratio is Rs
///   for an oil interpolant and Rv for a gas interpolant.
/// - The result has the same length as `pressure`, or is empty when the
///   request cannot be served (e.g. unknown region). Never partial.
///
/// Implementations must be thread-safe (`Send + Sync`) so a curve
/// collection can be shared across read-only callers.
pub trait PvtInterpolant: Send + Sync {
    /// Formation volume factor at each (pressure, mixing-ratio) point, in
    /// internal SI units.
    fn formation_volume_factor(
        &self,
        region: usize,
        mix_ratio: &[f64],
        pressure: &[f64],
    ) -> Vec<f64>;

    /// Viscosity at each (pressure, mixing-ratio) point, in internal SI
    /// units.
    fn viscosity(&self, region: usize, mix_ratio: &[f64], pressure: &[f64]) -> Vec<f64>;

    /// The raw tabulated curve for `curve` in `region`, in internal SI
    /// units. The returned variant tag tells callers whether the fluid is
    /// miscible in this region.
    fn pvt_curve(&self, curve: RawCurve, region: usize) -> PvtCurve;
}
