//! Dimension families for PVT curve axes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical quantity carried by one axis of a PVT curve.
///
/// Each quantity has its own conversion rule between unit systems; picking
/// the right quantity per axis is the job of the conversion router, not of
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Phase pressure (canonical: Pa)
    Pressure,
    /// Oil formation volume factor (canonical: rm³/sm³)
    OilFvf,
    /// Gas formation volume factor (canonical: rm³/sm³)
    GasFvf,
    /// Dynamic viscosity (canonical: Pa·s)
    Viscosity,
    /// Rs, dissolved gas/oil ratio (canonical: sm³/sm³)
    DissolvedGasOilRatio,
    /// Rv, vaporised oil/gas ratio (canonical: sm³/sm³)
    VaporisedOilGasRatio,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "Pressure"),
            Self::OilFvf => write!(f, "Oil FVF"),
            Self::GasFvf => write!(f, "Gas FVF"),
            Self::Viscosity => write!(f, "Viscosity"),
            Self::DissolvedGasOilRatio => write!(f, "Dissolved Gas/Oil Ratio"),
            Self::VaporisedOilGasRatio => write!(f, "Vaporised Oil/Gas Ratio"),
        }
    }
}
