//! Two-column curve container for tabulated PVT properties.

use serde::{Deserialize, Serialize};

/// One series of a tabulated curve: equal-length abscissa and ordinate
/// columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    /// Independent-axis values.
    #[serde(default)]
    pub x: Vec<f64>,
    /// Dependent-axis values.
    #[serde(default)]
    pub y: Vec<f64>,
}

impl CurveSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len(), "curve series columns must match");
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A tabulated PVT curve.
///
/// The fluid state a curve describes is carried by the variant tag, not by
/// counting series: an `Immiscible` curve depends on pressure alone, a
/// `Miscible` curve holds one series per fixed mixing-ratio satellite value.
/// The tag determines which physical quantity governs the independent axis
/// of vapour-phase FVF and viscosity curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PvtCurve {
    /// Single-series curve of an immiscible fluid.
    Immiscible(CurveSeries),
    /// Multi-series curve of a miscible fluid.
    Miscible(Vec<CurveSeries>),
}

impl PvtCurve {
    /// The documented empty-result sentinel: exactly one empty series.
    ///
    /// Returned for invalid requests and for phases the result set does not
    /// define. Not an error signal.
    pub fn empty() -> Self {
        Self::Immiscible(CurveSeries::default())
    }

    pub fn is_miscible(&self) -> bool {
        matches!(self, Self::Miscible(_))
    }

    /// True when no series holds any points.
    pub fn is_empty(&self) -> bool {
        self.series().iter().all(CurveSeries::is_empty)
    }

    pub fn series_count(&self) -> usize {
        self.series().len()
    }

    /// All series of the curve, regardless of variant.
    pub fn series(&self) -> &[CurveSeries] {
        match self {
            Self::Immiscible(s) => std::slice::from_ref(s),
            Self::Miscible(s) => s,
        }
    }

    pub fn series_mut(&mut self) -> &mut [CurveSeries] {
        match self {
            Self::Immiscible(s) => std::slice::from_mut(s),
            Self::Miscible(s) => s,
        }
    }
}

impl Default for PvtCurve {
    fn default() -> Self {
        Self::empty()
    }
}
