//! Serialized result-set schema.
//!
//! A dataset file is a YAML export of the pieces of a simulation result
//! set the curve collection consumes: active-cell count, the optional
//! PVTNUM vector, the native unit conventions, and the per-phase stored
//! property tables. The struct doubles as the grid and init-data handles.

use std::fs;
use std::path::Path;

use pvt_curves::{CellGrid, InitSource, PvtInterpolant, TabulatedPvt, PVTNUM_KW};
use pvt_units::{UnitResult, UnitSystem};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvtDataset {
    /// Total active cells of the model.
    pub num_cells: usize,

    /// 1-based PVT region per active cell; empty means single-region.
    #[serde(default)]
    pub pvtnum: Vec<i32>,

    /// Unit conventions the tables were written in.
    pub native_units: UnitSystem,

    /// Reporting unit system to install on the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_units: Option<UnitSystem>,

    /// Oil-phase property tables, absent in gas-only result sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil: Option<TabulatedPvt>,

    /// Gas-phase property tables, absent in oil-only result sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<TabulatedPvt>,
}

impl PvtDataset {
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

impl CellGrid for PvtDataset {
    fn num_cells(&self) -> usize {
        self.num_cells
    }
}

impl InitSource for PvtDataset {
    fn linearised_cell_data_i32(&self, keyword: &str) -> Option<Vec<i32>> {
        match keyword {
            PVTNUM_KW if !self.pvtnum.is_empty() => Some(self.pvtnum.clone()),
            _ => None,
        }
    }

    fn unit_conventions(&self) -> UnitResult<UnitSystem> {
        Ok(self.native_units.clone())
    }

    fn oil_interpolant(&self) -> Option<Box<dyn PvtInterpolant>> {
        self.oil
            .clone()
            .map(|t| Box::new(t) as Box<dyn PvtInterpolant>)
    }

    fn gas_interpolant(&self) -> Option<Box<dyn PvtInterpolant>> {
        self.gas
            .clone()
            .map(|t| Box::new(t) as Box<dyn PvtInterpolant>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::{Phase, PvtCurve, RawCurve};
    use pvt_curves::PvtCurveCollection;

    const CASE: &str = r#"
num_cells: 3
pvtnum: [1, 2, 2]
native_units:
  name: field-like
  pressure: 6894.76
  dissolved_gas_oil_ratio: 178.1
oil:
  regions:
    - fvf:
        Immiscible:
          x: [1.0e5, 2.0e5]
          y: [1.2, 1.1]
      viscosity:
        Immiscible:
          x: [1.0e5, 2.0e5]
          y: [1.0e-3, 2.0e-3]
      saturated_state:
        Immiscible:
          x: [1.0e5, 2.0e5]
          y: [50.0, 90.0]
    - fvf:
        Immiscible:
          x: [1.0e5, 3.0e5]
          y: [1.4, 1.3]
      viscosity:
        Immiscible:
          x: [1.0e5, 3.0e5]
          y: [3.0e-3, 4.0e-3]
      saturated_state:
        Immiscible:
          x: [1.0e5, 3.0e5]
          y: [60.0, 120.0]
gas:
  regions:
    - fvf:
        Miscible:
          - x: [0.0, 1.0e-4]
            y: [5.0e-3, 4.0e-3]
          - x: [0.0, 2.0e-4]
            y: [4.5e-3, 3.5e-3]
      viscosity:
        Immiscible:
          x: [1.0e5, 2.0e5]
          y: [1.5e-5, 1.7e-5]
      saturated_state:
        Immiscible:
          x: [1.0e5, 2.0e5]
          y: [1.0e-4, 2.0e-4]
"#;

    #[test]
    fn parses_and_builds_a_collection() {
        let dataset: PvtDataset = serde_yaml::from_str(CASE).unwrap();
        assert_eq!(dataset.num_cells, 3);
        assert!(dataset.output_units.is_none());

        let pvt = PvtCurveCollection::from_source(&dataset, &dataset).unwrap();

        // Cell 0 is region 1, cell 2 is region 2.
        let bo0 = pvt.pvt_curve(RawCurve::Fvf, Phase::Liquid, 0);
        let bo2 = pvt.pvt_curve(RawCurve::Fvf, Phase::Liquid, 2);
        assert_eq!(bo0.series()[0].y, vec![1.2, 1.1]);
        assert_eq!(bo2.series()[0].y, vec![1.4, 1.3]);

        // Wet-gas FVF parses into the miscible shape; region 2 has no gas
        // tables, so the empty sentinel comes back.
        let bg0 = pvt.pvt_curve(RawCurve::Fvf, Phase::Vapour, 0);
        assert!(bg0.is_miscible());
        assert_eq!(bg0.series_count(), 2);
        assert_eq!(
            pvt.pvt_curve(RawCurve::Fvf, Phase::Vapour, 2),
            PvtCurve::empty()
        );
    }

    #[test]
    fn missing_pvtnum_defaults_to_single_region() {
        let mut dataset: PvtDataset = serde_yaml::from_str(CASE).unwrap();
        dataset.pvtnum = Vec::new();

        let pvt = PvtCurveCollection::from_source(&dataset, &dataset).unwrap();
        let bo0 = pvt.pvt_curve(RawCurve::Fvf, Phase::Liquid, 0);
        let bo2 = pvt.pvt_curve(RawCurve::Fvf, Phase::Liquid, 2);
        assert_eq!(bo0, bo2);
    }
}
