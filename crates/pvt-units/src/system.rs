//! Unit systems: named per-quantity scale factors relative to SI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quantity::Quantity;

/// Result type for unit-system operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors raised while building or validating a unit system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Scale factor is NaN, infinite, zero, or negative.
    #[error("Non-physical scale factor for {quantity} in unit system '{system}': {value}")]
    NonPhysicalScale {
        system: String,
        quantity: Quantity,
        value: f64,
    },

    /// Source data carries no unit conventions.
    #[error("Missing unit conventions: {what}")]
    MissingConventions { what: &'static str },
}

fn one() -> f64 {
    1.0
}

/// A named system of measurement units.
///
/// Each field is the SI magnitude of one unit of that quantity in this
/// system ("SI per unit"). The internal reference system is therefore the
/// identity. Where the factors of a concrete convention come from is the
/// data layer's business — typically serialized metadata in the result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSystem {
    pub name: String,
    #[serde(default = "one")]
    pub pressure: f64,
    #[serde(default = "one")]
    pub oil_fvf: f64,
    #[serde(default = "one")]
    pub gas_fvf: f64,
    #[serde(default = "one")]
    pub viscosity: f64,
    #[serde(default = "one")]
    pub dissolved_gas_oil_ratio: f64,
    #[serde(default = "one")]
    pub vaporised_oil_gas_ratio: f64,
}

impl UnitSystem {
    /// The fixed internal reference: strict SI, every factor one.
    pub fn si() -> Self {
        Self {
            name: "SI".to_string(),
            pressure: 1.0,
            oil_fvf: 1.0,
            gas_fvf: 1.0,
            viscosity: 1.0,
            dissolved_gas_oil_ratio: 1.0,
            vaporised_oil_gas_ratio: 1.0,
        }
    }

    /// SI magnitude of one unit of `quantity` in this system.
    pub fn scale(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Pressure => self.pressure,
            Quantity::OilFvf => self.oil_fvf,
            Quantity::GasFvf => self.gas_fvf,
            Quantity::Viscosity => self.viscosity,
            Quantity::DissolvedGasOilRatio => self.dissolved_gas_oil_ratio,
            Quantity::VaporisedOilGasRatio => self.vaporised_oil_gas_ratio,
        }
    }

    /// Check every scale factor is finite and strictly positive.
    pub fn validate(&self) -> UnitResult<()> {
        const ALL: [Quantity; 6] = [
            Quantity::Pressure,
            Quantity::OilFvf,
            Quantity::GasFvf,
            Quantity::Viscosity,
            Quantity::DissolvedGasOilRatio,
            Quantity::VaporisedOilGasRatio,
        ];

        for q in ALL {
            let value = self.scale(q);
            if !value.is_finite() || value <= 0.0 {
                return Err(UnitError::NonPhysicalScale {
                    system: self.name.clone(),
                    quantity: q,
                    value,
                });
            }
        }

        Ok(())
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::si()
    }
}

/// The fixed SI reference system all evaluation happens in.
pub fn internal_unit_conventions() -> UnitSystem {
    UnitSystem::si()
}
