//! Unit conversion routing for table-style curves.
//!
//! The physical quantity on each axis of a raw curve depends on the curve
//! kind, the phase, and — for vapour-phase FVF and viscosity — on whether
//! the fluid is miscible: a miscible gas curve runs over Rv on the
//! independent axis where the immiscible curve runs over pressure.
//! Saturated-state curves never vary by miscibility. The whole mapping
//! lives in one exhaustive match below.

use pvt_core::{CurveSeries, Phase, PvtCurve, RawCurve};
use pvt_units::{Convert, Quantity, UnitSystem};

/// Physical quantities of the (x, y) axes for one curve request.
fn axis_quantities(curve: RawCurve, phase: Phase, miscible: bool) -> (Quantity, Quantity) {
    match (curve, phase) {
        // Oil FVF: x is pressure, y is Bo.
        (RawCurve::Fvf, Phase::Liquid) => (Quantity::Pressure, Quantity::OilFvf),

        // Gas FVF: x is pressure for dry gas, Rv for wet gas.
        (RawCurve::Fvf, Phase::Vapour) if miscible => {
            (Quantity::VaporisedOilGasRatio, Quantity::GasFvf)
        }
        (RawCurve::Fvf, Phase::Vapour) => (Quantity::Pressure, Quantity::GasFvf),

        // Viscosity: y is always viscosity; x follows the same wet-gas
        // rule as the FVF curve.
        (RawCurve::Viscosity, Phase::Liquid) => (Quantity::Pressure, Quantity::Viscosity),
        (RawCurve::Viscosity, Phase::Vapour) if miscible => {
            (Quantity::VaporisedOilGasRatio, Quantity::Viscosity)
        }
        (RawCurve::Viscosity, Phase::Vapour) => (Quantity::Pressure, Quantity::Viscosity),

        // Saturated state: x is pressure, y is the phase's mixing ratio.
        (RawCurve::SaturatedState, Phase::Liquid) => {
            (Quantity::Pressure, Quantity::DissolvedGasOilRatio)
        }
        (RawCurve::SaturatedState, Phase::Vapour) => {
            (Quantity::Pressure, Quantity::VaporisedOilGasRatio)
        }

        (_, Phase::Aqua) => {
            unreachable!("internal logic error: unsupported phase reached unit conversion")
        }
    }
}

fn convert_series(series: &mut CurveSeries, qx: Quantity, qy: Quantity, from: &UnitSystem, to: &UnitSystem) {
    Convert::new(qx).from(from).to(to).applied_to(&mut series.x);
    Convert::new(qy).from(from).to(to).applied_to(&mut series.y);
}

/// Convert a raw curve from `from` units into `to` units, axis by axis.
///
/// Every series of the curve is converted; the variant tag selects the
/// independent-axis quantity for vapour-phase FVF and viscosity curves.
/// Callers have already validated `phase`.
pub(crate) fn convert_to_output_units(
    mut curve: PvtCurve,
    kind: RawCurve,
    phase: Phase,
    from: &UnitSystem,
    to: &UnitSystem,
) -> PvtCurve {
    let (qx, qy) = axis_quantities(kind, phase, curve.is_miscible());

    for series in curve.series_mut() {
        convert_series(series, qx, qy, from, to);
    }

    curve
}
