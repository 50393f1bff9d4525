//! Reservoir phase index and raw PVT curve kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase index as carried by a simulation result set.
///
/// Result sets identify up to three phases. PVT property queries support
/// `Liquid` (oil) and `Vapour` (gas) only; `Aqua` is a valid phase index in
/// the data but an invalid argument to every PVT entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Water phase.
    Aqua,
    /// Oil phase.
    Liquid,
    /// Gas phase.
    Vapour,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aqua => write!(f, "Aqua"),
            Self::Liquid => write!(f, "Liquid"),
            Self::Vapour => write!(f, "Vapour"),
        }
    }
}

/// Which raw tabulated property a curve request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawCurve {
    /// Formation volume factor (Bo or Bg).
    Fvf,
    /// Phase viscosity (mu_o or mu_g).
    Viscosity,
    /// Saturated-state mixing ratio (RsSat or RvSat).
    SaturatedState,
}

impl fmt::Display for RawCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fvf => write!(f, "FVF"),
            Self::Viscosity => write!(f, "Viscosity"),
            Self::SaturatedState => write!(f, "SaturatedState"),
        }
    }
}
