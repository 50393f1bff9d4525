//! Cell-to-region resolution.

use crate::error::{CurveError, CurveResult};
use crate::source::{CellGrid, InitSource, PVTNUM_KW};

/// Per-cell PVT region identifiers.
///
/// Holds one 1-based region id per active cell. When the result set lacks
/// a region table every cell belongs to region 1. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct RegionIndex {
    pvtnum: Vec<i32>,
}

impl RegionIndex {
    /// Build the region index from source data.
    ///
    /// A missing or empty "PVTNUM" vector is not an error: the index is
    /// synthesized as all-ones. A vector that is present but does not
    /// match the grid's active-cell count, or that carries ids below 1,
    /// fails construction.
    pub fn from_source(grid: &dyn CellGrid, init: &dyn InitSource) -> CurveResult<Self> {
        let pvtnum = match init.linearised_cell_data_i32(PVTNUM_KW) {
            Some(v) if !v.is_empty() => v,
            _ => {
                tracing::debug!(
                    num_cells = grid.num_cells(),
                    "no {PVTNUM_KW} data; assigning all cells to region 1"
                );
                return Ok(Self {
                    pvtnum: vec![1; grid.num_cells()],
                });
            }
        };

        if pvtnum.len() != grid.num_cells() {
            return Err(CurveError::RegionTableSize {
                what: "entry count does not match active cells",
                expected: grid.num_cells(),
                got: pvtnum.len(),
            });
        }

        if let Some((cell, &id)) = pvtnum.iter().enumerate().find(|&(_, &id)| id < 1) {
            return Err(CurveError::InvalidRegionId { cell, id });
        }

        Ok(Self { pvtnum })
    }

    /// Number of active cells covered by the index.
    pub fn len(&self) -> usize {
        self.pvtnum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pvtnum.is_empty()
    }

    /// The 1-based region identifier of `cell`.
    ///
    /// No bounds checking: callers validate the cell index first (see
    /// `PvtCurveCollection::is_valid_request`).
    pub fn region_id(&self, cell: usize) -> i32 {
        self.pvtnum[cell]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolant::PvtInterpolant;
    use pvt_units::{UnitResult, UnitSystem};

    struct Grid(usize);

    impl CellGrid for Grid {
        fn num_cells(&self) -> usize {
            self.0
        }
    }

    struct Init(Option<Vec<i32>>);

    impl InitSource for Init {
        fn linearised_cell_data_i32(&self, keyword: &str) -> Option<Vec<i32>> {
            assert_eq!(keyword, PVTNUM_KW);
            self.0.clone()
        }

        fn unit_conventions(&self) -> UnitResult<UnitSystem> {
            Ok(UnitSystem::si())
        }

        fn oil_interpolant(&self) -> Option<Box<dyn PvtInterpolant>> {
            None
        }

        fn gas_interpolant(&self) -> Option<Box<dyn PvtInterpolant>> {
            None
        }
    }

    #[test]
    fn missing_table_defaults_to_single_region() {
        let idx = RegionIndex::from_source(&Grid(4), &Init(None)).unwrap();
        assert_eq!(idx.len(), 4);
        for cell in 0..4 {
            assert_eq!(idx.region_id(cell), 1);
        }
    }

    #[test]
    fn empty_table_defaults_to_single_region() {
        let idx = RegionIndex::from_source(&Grid(3), &Init(Some(Vec::new()))).unwrap();
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.region_id(2), 1);
    }

    #[test]
    fn present_table_is_used_verbatim() {
        let idx = RegionIndex::from_source(&Grid(3), &Init(Some(vec![2, 1, 2]))).unwrap();
        assert_eq!(idx.region_id(0), 2);
        assert_eq!(idx.region_id(1), 1);
        assert_eq!(idx.region_id(2), 2);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let err = RegionIndex::from_source(&Grid(3), &Init(Some(vec![1, 1]))).unwrap_err();
        assert!(matches!(err, CurveError::RegionTableSize { .. }));
    }

    #[test]
    fn sub_one_region_id_is_rejected() {
        let err = RegionIndex::from_source(&Grid(2), &Init(Some(vec![1, 0]))).unwrap_err();
        assert!(matches!(
            err,
            CurveError::InvalidRegionId { cell: 1, id: 0 }
        ));
    }
}
