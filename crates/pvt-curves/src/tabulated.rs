//! Dataset-backed interpolant over stored curves.

use crate::interpolant::PvtInterpolant;
use pvt_core::{CurveSeries, PvtCurve, RawCurve};
use serde::{Deserialize, Serialize};

/// Stored property curves for one PVT region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionTables {
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub fvf: PvtCurve,
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub viscosity: PvtCurve,
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub saturated_state: PvtCurve,
}

impl RegionTables {
    fn curve(&self, kind: RawCurve) -> &PvtCurve {
        match kind {
            RawCurve::Fvf => &self.fvf,
            RawCurve::Viscosity => &self.viscosity,
            RawCurve::SaturatedState => &self.saturated_state,
        }
    }
}

/// A `PvtInterpolant` backed by curves stored verbatim in a dataset.
///
/// Raw-curve queries return the stored shape for any curve kind. Point
/// evaluation is supported for immiscible (pressure-keyed, single-series)
/// tables only, by piecewise linear interpolation with endpoint clamping;
/// the mixing ratio is accepted but does not enter the lookup. Requests
/// this adapter cannot serve — an unknown region, a miscible stored table
/// — yield empty results, matching the collection's empty-result policy.
///
/// Series abscissas must be stored in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabulatedPvt {
    #[serde(default)]
    pub regions: Vec<RegionTables>,
}

impl TabulatedPvt {
    pub fn new(regions: Vec<RegionTables>) -> Self {
        Self { regions }
    }

    fn eval(&self, kind: RawCurve, region: usize, pressure: &[f64]) -> Vec<f64> {
        let Some(tables) = self.regions.get(region) else {
            return Vec::new();
        };

        match tables.curve(kind) {
            PvtCurve::Immiscible(s) if !s.is_empty() => {
                pressure.iter().map(|&p| lerp(s, p)).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Piecewise linear lookup with endpoint clamping.
fn lerp(series: &CurveSeries, x: f64) -> f64 {
    let (xs, ys) = (&series.x, &series.y);

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }

    let hi = xs.partition_point(|&node| node < x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}

impl PvtInterpolant for TabulatedPvt {
    fn formation_volume_factor(
        &self,
        region: usize,
        _mix_ratio: &[f64],
        pressure: &[f64],
    ) -> Vec<f64> {
        self.eval(RawCurve::Fvf, region, pressure)
    }

    fn viscosity(&self, region: usize, _mix_ratio: &[f64], pressure: &[f64]) -> Vec<f64> {
        self.eval(RawCurve::Viscosity, region, pressure)
    }

    fn pvt_curve(&self, curve: RawCurve, region: usize) -> PvtCurve {
        self.regions
            .get(region)
            .map(|tables| tables.curve(curve).clone())
            .unwrap_or_else(PvtCurve::empty)
    }
}
