use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{FlowError, GasProperties, density_ratio, pressure_ratio, temperature_ratio};

/// Stagnation (total) conditions of a flow.
///
/// The state reached if the flow were brought to rest isentropically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagnation {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

impl Stagnation {
    /// Creates stagnation conditions.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if either value is not strictly positive.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, FlowError> {
        StrictlyPositive::check(&temperature.get::<kelvin>())
            .map_err(FlowError::constraint("stagnation temperature"))?;
        StrictlyPositive::check(&pressure.get::<pascal>())
            .map_err(FlowError::constraint("stagnation pressure"))?;

        Ok(Self {
            temperature,
            pressure,
        })
    }

    /// Recovers stagnation conditions from a static state moving at `mach`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] for a negative Mach number or
    /// non-positive static values.
    pub fn from_static(
        gas: &GasProperties,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        mach: f64,
    ) -> Result<Self, FlowError> {
        let t_ratio = temperature_ratio(gas.gamma(), mach)?;
        let p_ratio = pressure_ratio(gas.gamma(), mach)?;

        Self::new(
            ThermodynamicTemperature::new::<kelvin>(temperature.get::<kelvin>() * t_ratio),
            pressure * p_ratio,
        )
    }

    /// Stagnation density from the ideal gas equation of state.
    #[must_use]
    pub fn density(&self, gas: &GasProperties) -> MassDensity {
        self.pressure / (gas.gas_constant() * self.temperature)
    }
}

/// Static flow properties at a station.
///
/// A `FlowState` is derived entirely from gas properties, stagnation
/// conditions, and a Mach number. It is never patched in place; when any
/// input changes, build a new one with [`FlowState::from_stagnation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub mach: f64,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
    pub velocity: Velocity,
}

impl FlowState {
    /// Computes the static state at `mach` from stagnation conditions.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if `mach` is negative or not finite.
    pub fn from_stagnation(
        gas: &GasProperties,
        stagnation: &Stagnation,
        mach: f64,
    ) -> Result<Self, FlowError> {
        let gamma = gas.gamma();
        let t_ratio = temperature_ratio(gamma, mach)?;
        let p_ratio = pressure_ratio(gamma, mach)?;
        let d_ratio = density_ratio(gamma, mach)?;

        let t_static = stagnation.temperature.get::<kelvin>() / t_ratio;
        let temperature = ThermodynamicTemperature::new::<kelvin>(t_static);

        Ok(Self {
            mach,
            temperature,
            pressure: stagnation.pressure / p_ratio,
            density: stagnation.density(gas) / d_ratio,
            velocity: gas.speed_of_sound(temperature) * mach,
        })
    }
}
