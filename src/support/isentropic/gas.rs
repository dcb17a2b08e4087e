//! Calorically perfect gas constants.

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature, Velocity,
    },
    dynamic_viscosity::pascal_second,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::SpecificGasConstant,
};

use super::FlowError;

/// Specific-heat ratio and gas constant of a calorically perfect gas.
///
/// Constructed once and shared read-only by every computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    gamma: f64,
    gas_constant: SpecificGasConstant,
}

impl GasProperties {
    /// Creates gas properties from `γ` and `R`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if `γ ≤ 1` (or is not finite)
    /// or if `R` is not strictly positive.
    pub fn new(gamma: f64, gas_constant: SpecificGasConstant) -> Result<Self, FlowError> {
        check_gamma(gamma)?;
        StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>())
            .map_err(FlowError::constraint("gas constant"))?;

        Ok(Self {
            gamma,
            gas_constant,
        })
    }

    /// Returns the properties of a canonical gas.
    #[must_use]
    pub fn of<Gas: CanonicalGas>() -> Self {
        Gas::properties()
    }

    /// Dry air, `γ = 1.4`.
    #[must_use]
    pub fn air() -> Self {
        Air::properties()
    }

    /// Specific-heat ratio `γ = cp/cv`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Specific gas constant `R`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }

    /// Constant-pressure specific heat, `cp = γR/(γ−1)`.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        let r = self.gas_constant.get::<joule_per_kilogram_kelvin>();
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(self.gamma * r / (self.gamma - 1.0))
    }

    /// Speed of sound, `a = √(γRT)`.
    #[must_use]
    pub fn speed_of_sound(&self, temperature: ThermodynamicTemperature) -> Velocity {
        let r = self.gas_constant.get::<joule_per_kilogram_kelvin>();
        Velocity::new::<meter_per_second>((self.gamma * r * temperature.get::<kelvin>()).sqrt())
    }
}

/// Rejects specific-heat ratios that do not describe a real gas.
pub(super) fn check_gamma(gamma: f64) -> Result<(), FlowError> {
    if gamma.is_finite() && gamma > 1.0 {
        Ok(())
    } else {
        Err(FlowError::invalid_input(format!(
            "specific heat ratio must be greater than 1, got {gamma}"
        )))
    }
}

/// Molecular transport properties at a reference condition.
///
/// Used by film cooling correlations, which need viscosity and conductivity
/// in addition to the perfect-gas constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProperties {
    pub viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub reference_density: MassDensity,
}

/// A named gas with fixed perfect-gas and transport constants.
pub trait CanonicalGas {
    /// Returns `γ` and `R` for this gas.
    fn properties() -> GasProperties;

    /// Returns reference transport properties for this gas.
    fn transport() -> TransportProperties;
}

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

/// Canonical identifier for helium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Helium;

/// Canonical identifier for neon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neon;

/// Runtime choice among the canonical gases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GasSpecies {
    #[default]
    Air,
    Helium,
    Neon,
}

impl GasSpecies {
    #[must_use]
    pub fn properties(self) -> GasProperties {
        match self {
            Self::Air => Air::properties(),
            Self::Helium => Helium::properties(),
            Self::Neon => Neon::properties(),
        }
    }

    #[must_use]
    pub fn transport(self) -> TransportProperties {
        match self {
            Self::Air => Air::transport(),
            Self::Helium => Helium::transport(),
            Self::Neon => Neon::transport(),
        }
    }
}

fn constants(gamma: f64, r: f64) -> GasProperties {
    GasProperties {
        gamma,
        gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(r),
    }
}

fn transport(viscosity: f64, conductivity: f64, density: f64) -> TransportProperties {
    TransportProperties {
        viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
        thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
        reference_density: MassDensity::new::<kilogram_per_cubic_meter>(density),
    }
}

impl CanonicalGas for Air {
    fn properties() -> GasProperties {
        constants(1.4, 287.053)
    }

    fn transport() -> TransportProperties {
        transport(1.84e-5, 0.0262, 1.225)
    }
}

impl CanonicalGas for Helium {
    fn properties() -> GasProperties {
        constants(5.0 / 3.0, 2077.1)
    }

    fn transport() -> TransportProperties {
        transport(1.97e-5, 0.1513, 0.1786)
    }
}

impl CanonicalGas for Neon {
    fn properties() -> GasProperties {
        constants(5.0 / 3.0, 412.0)
    }

    fn transport() -> TransportProperties {
        transport(3.13e-5, 0.0491, 0.8999)
    }
}
