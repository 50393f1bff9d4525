//! The curve collection facade.

use crate::convert::convert_to_output_units;
use crate::error::CurveResult;
use crate::evaluate::phase_property;
use crate::interpolant::PvtInterpolant;
use crate::region::RegionIndex;
use crate::source::{CellGrid, InitSource};
use pvt_core::{Phase, PvtCurve, RawCurve};
use pvt_units::{internal_unit_conventions, Convert, UnitSystem};

/// Per-cell access to the PVT property curves of a result set.
///
/// Owns the region index, one optional interpolant per supported phase,
/// and the three unit systems of the conversion pipeline. Region data,
/// interpolants, and the native/internal systems are fixed at
/// construction; the output system may be reconfigured at any time
/// through [`set_output_units`](Self::set_output_units).
///
/// Queries take `&self` and are safe to run concurrently from multiple
/// callers; reconfiguring the output system takes `&mut self`, so the
/// borrow checker serializes configuration changes against queries.
///
/// Invalid requests — an unsupported phase, an out-of-range cell, a phase
/// the result set does not define — yield well-defined empty results
/// rather than errors, so bulk callers iterating over many cells need no
/// per-cell error handling.
pub struct PvtCurveCollection {
    pvtnum: RegionIndex,
    gas: Option<Box<dyn PvtInterpolant>>,
    oil: Option<Box<dyn PvtInterpolant>>,
    usys_native: UnitSystem,
    usys_internal: UnitSystem,
    usys_output: Option<UnitSystem>,
}

impl PvtCurveCollection {
    /// Build the collection from a grid handle and init data.
    pub fn from_source(grid: &dyn CellGrid, init: &dyn InitSource) -> CurveResult<Self> {
        let usys_native = init.unit_conventions()?;
        usys_native.validate()?;

        Ok(Self {
            pvtnum: RegionIndex::from_source(grid, init)?,
            gas: init.gas_interpolant(),
            oil: init.oil_interpolant(),
            usys_native,
            usys_internal: internal_unit_conventions(),
            usys_output: None,
        })
    }

    /// Install or clear the caller's preferred output unit system.
    ///
    /// With no output system configured, table curves and native-query
    /// results are reported in internal (SI) units.
    pub fn set_output_units(&mut self, usys: Option<UnitSystem>) {
        self.usys_output = usys;
    }

    /// True iff `phase` is supported for PVT queries and `active_cell` is
    /// covered by the region index.
    pub fn is_valid_request(&self, phase: Phase, active_cell: usize) -> bool {
        matches!(phase, Phase::Liquid | Phase::Vapour) && active_cell < self.pvtnum.len()
    }

    /// The full tabulated `curve` for `phase` in the region of
    /// `active_cell`.
    ///
    /// Returns the empty sentinel (one empty series) for invalid requests
    /// and for phases without an interpolant. Results are in the output
    /// unit system when one is configured, internal (SI) units otherwise.
    pub fn pvt_curve(&self, curve: RawCurve, phase: Phase, active_cell: usize) -> PvtCurve {
        if !self.is_valid_request(phase, active_cell) {
            return PvtCurve::empty();
        }

        // PVTNUM is a traditional 1-based region identifier; subtract one
        // to index the per-region tables.
        let region = (self.pvtnum.region_id(active_cell) - 1) as usize;

        let raw = match self.phase_interpolant(phase) {
            Some(pvt) => pvt.pvt_curve(curve, region),
            // Result set does not provide the requisite tabulated
            // properties for this phase.
            None => PvtCurve::empty(),
        };

        match &self.usys_output {
            Some(out) => convert_to_output_units(raw, curve, phase, &self.usys_internal, out),
            None => raw,
        }
    }

    /// Evaluate `property` at explicit sample points given in internal
    /// (SI) units; results are in internal units as well.
    ///
    /// `mix_ratio` is Rs for Liquid and Rv for Vapour; empty means all
    /// zeros of pressure length. The result has the length of
    /// `phase_press`, or is empty for any invalid request — including
    /// `SaturatedState`, which has no point evaluation.
    pub fn dynamic_property_si(
        &self,
        property: RawCurve,
        phase: Phase,
        active_cell: usize,
        phase_press: &[f64],
        mix_ratio: &[f64],
    ) -> Vec<f64> {
        if !self.is_valid_request(phase, active_cell) || property == RawCurve::SaturatedState {
            return Vec::new();
        }

        let region = (self.pvtnum.region_id(active_cell) - 1) as usize;

        phase_property(
            self.phase_interpolant(phase),
            property,
            region,
            phase_press,
            mix_ratio,
        )
    }

    /// Evaluate `property` at sample points given in the native unit
    /// system of the result set.
    ///
    /// Inputs are converted native → internal, evaluation happens in
    /// internal units, and the result is converted to the output system
    /// when one is configured. Same request semantics as
    /// [`dynamic_property_si`](Self::dynamic_property_si).
    pub fn dynamic_property_native(
        &self,
        property: RawCurve,
        phase: Phase,
        active_cell: usize,
        mut phase_press: Vec<f64>,
        mut mix_ratio: Vec<f64>,
    ) -> Vec<f64> {
        if !self.is_valid_request(phase, active_cell) || property == RawCurve::SaturatedState {
            return Vec::new();
        }

        // 1) Inputs from native to internal (SI) units.
        Convert::pressure()
            .from(&self.usys_native)
            .to(&self.usys_internal)
            .applied_to(&mut phase_press);

        let ratio_convert = match phase {
            Phase::Liquid => Convert::dissolved_gas_oil_ratio(),
            Phase::Vapour => Convert::vaporised_oil_gas_ratio(),
            Phase::Aqua => unreachable!("internal logic error identifying supported phases"),
        };
        ratio_convert
            .from(&self.usys_native)
            .to(&self.usys_internal)
            .applied_to(&mut mix_ratio);

        // 2) Evaluate in strict SI.
        let mut prop =
            self.dynamic_property_si(property, phase, active_cell, &phase_press, &mix_ratio);

        // 3) Result to the caller's requested system, when set.
        let Some(out) = &self.usys_output else {
            return prop;
        };

        let prop_convert = match property {
            RawCurve::Viscosity => Convert::viscosity(),
            RawCurve::Fvf => match phase {
                Phase::Vapour => Convert::gas_fvf(),
                Phase::Liquid => Convert::oil_fvf(),
                Phase::Aqua => unreachable!("internal logic error identifying supported phases"),
            },
            RawCurve::SaturatedState => {
                unreachable!("internal logic error: saturated state rejected above")
            }
        };
        prop_convert
            .from(&self.usys_internal)
            .to(out)
            .applied_to(&mut prop);

        prop
    }

    fn phase_interpolant(&self, phase: Phase) -> Option<&dyn PvtInterpolant> {
        match phase {
            Phase::Liquid => self.oil.as_deref(),
            Phase::Vapour => self.gas.as_deref(),
            Phase::Aqua => None,
        }
    }
}
