//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all dimensional quantities (areas, lengths,
//! pressures, temperatures). Mach number, specific-heat ratio, and area
//! ratios are dimensionless and stay plain `f64`.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another to get a [`TemperatureInterval`], which [`uom`] does not provide
//! directly:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use nozzle_models::support::units::TemperatureDifference;
//!
//! let stagnation = ThermodynamicTemperature::new::<kelvin>(3000.0);
//! let coolant = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let driving = stagnation.minus(coolant);
//! ```
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Extension trait for computing temperature differences.
///
/// See [#380](https://github.com/iliekturtles/uom/issues/380) for why
/// subtracting two absolute temperatures is not an operator in [`uom`].
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
