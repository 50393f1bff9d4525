//! Directed conversions between two unit systems.
//!
//! A conversion is built in three steps mirroring how requests read:
//! pick the quantity, name the source system, name the target system.
//!
//! ```
//! use pvt_units::{Convert, UnitSystem};
//!
//! let bar = UnitSystem {
//!     name: "bar-based".to_string(),
//!     pressure: 1.0e5,
//!     ..UnitSystem::si()
//! };
//! let si = UnitSystem::si();
//!
//! let mut p = vec![2.0e5, 3.0e5];
//! Convert::pressure().from(&si).to(&bar).applied_to(&mut p);
//! assert_eq!(p, vec![2.0, 3.0]);
//! ```

use crate::quantity::Quantity;
use crate::system::UnitSystem;

/// Entry point of the conversion builder.
#[derive(Debug, Clone, Copy)]
pub struct Convert {
    quantity: Quantity,
}

impl Convert {
    pub fn new(quantity: Quantity) -> Self {
        Self { quantity }
    }

    pub fn pressure() -> Self {
        Self::new(Quantity::Pressure)
    }

    pub fn oil_fvf() -> Self {
        Self::new(Quantity::OilFvf)
    }

    pub fn gas_fvf() -> Self {
        Self::new(Quantity::GasFvf)
    }

    pub fn viscosity() -> Self {
        Self::new(Quantity::Viscosity)
    }

    pub fn dissolved_gas_oil_ratio() -> Self {
        Self::new(Quantity::DissolvedGasOilRatio)
    }

    pub fn vaporised_oil_gas_ratio() -> Self {
        Self::new(Quantity::VaporisedOilGasRatio)
    }

    pub fn from(self, usys: &UnitSystem) -> ConvertFrom<'_> {
        ConvertFrom {
            quantity: self.quantity,
            from: usys,
        }
    }
}

/// Conversion builder with the source system fixed.
#[derive(Debug, Clone, Copy)]
pub struct ConvertFrom<'a> {
    quantity: Quantity,
    from: &'a UnitSystem,
}

impl ConvertFrom<'_> {
    pub fn to(self, usys: &UnitSystem) -> Conversion {
        Conversion {
            factor: self.from.scale(self.quantity) / usys.scale(self.quantity),
        }
    }
}

/// A resolved conversion: multiply by a single factor.
///
/// All supported quantities convert by pure scaling; there are no offset
/// quantities (temperature is not a PVT curve axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    factor: f64,
}

impl Conversion {
    pub fn applied(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Convert every value in place.
    pub fn applied_to(&self, values: &mut [f64]) {
        for v in values.iter_mut() {
            *v *= self.factor;
        }
    }

    /// The reverse direction of this conversion.
    pub fn inverse(&self) -> Conversion {
        Conversion {
            factor: 1.0 / self.factor,
        }
    }
}
