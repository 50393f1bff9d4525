//! Point-style property evaluation against a phase interpolant.

use crate::interpolant::PvtInterpolant;
use pvt_core::RawCurve;

/// Evaluate `property` for one phase at explicit sample points.
///
/// Routes to the interpolant's FVF or viscosity operation. An absent
/// interpolant yields an empty result. An empty mixing ratio stands for
/// the saturated/no-mixing assumption and is normalized to all zeros of
/// pressure length before dispatch.
///
/// `SaturatedState` has no point-evaluation operation; the facade filters
/// it out before calling here.
pub(crate) fn phase_property(
    pvt: Option<&dyn PvtInterpolant>,
    property: RawCurve,
    region: usize,
    pressure: &[f64],
    mix_ratio: &[f64],
) -> Vec<f64> {
    let Some(pvt) = pvt else {
        // No such property interpolant. Return empty.
        return Vec::new();
    };

    debug_assert!(
        matches!(property, RawCurve::Fvf | RawCurve::Viscosity),
        "saturated state curve has no point evaluation"
    );

    let zeros;
    let ratio = if mix_ratio.is_empty() {
        zeros = vec![0.0; pressure.len()];
        zeros.as_slice()
    } else {
        mix_ratio
    };

    match property {
        RawCurve::Fvf => pvt.formation_volume_factor(region, ratio, pressure),
        _ => pvt.viscosity(region, ratio, pressure),
    }
}
