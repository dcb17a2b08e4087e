//! Mass flow and thrust of a choked nozzle.

use log::warn;
use uom::si::{
    area::square_meter,
    f64::{Area, Force, MassRate, Pressure},
    force::newton,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    isentropic::{FlowError, FlowState, GasProperties, Stagnation, area_mach_ratio},
};

use super::{Contour, NozzleSpec};

/// Exit pressures within this fraction of ambient count as ideally expanded.
const IDEAL_BAND: f64 = 0.01;

/// Thresholds for classifying how the exit flow meets the ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceConfig {
    /// Exit-to-ambient pressure ratio below which the boundary layer is
    /// expected to separate from the wall.
    pub separation_pressure_ratio: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            separation_pressure_ratio: 0.4,
        }
    }
}

impl PerformanceConfig {
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] unless the ratio lies in `(0, 1)`.
    pub fn validate(&self) -> Result<(), FlowError> {
        let ratio = self.separation_pressure_ratio;
        if ratio > 0.0 && ratio < 1.0 {
            Ok(())
        } else {
            Err(FlowError::invalid_input(format!(
                "separation pressure ratio must lie in (0, 1), got {ratio}"
            )))
        }
    }
}

/// How the exit flow meets the ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// Exit pressure matches ambient.
    Ideal,

    /// Exit pressure is above ambient; expansion continues past the exit.
    UnderExpanded,

    /// Exit pressure is below ambient but the flow stays attached.
    OverExpanded,

    /// Exit pressure is low enough that the flow separates inside the nozzle.
    Separated,
}

impl Expansion {
    fn classify(exit_to_ambient: f64, config: &PerformanceConfig) -> Self {
        if (exit_to_ambient - 1.0).abs() <= IDEAL_BAND {
            Self::Ideal
        } else if exit_to_ambient > 1.0 {
            Self::UnderExpanded
        } else if exit_to_ambient < config.separation_pressure_ratio {
            Self::Separated
        } else {
            Self::OverExpanded
        }
    }
}

/// Nozzle performance at a given ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub mass_flow: MassRate,
    pub exit: FlowState,
    pub thrust: Force,
    pub expansion: Expansion,
}

/// Mass flow through a choked throat.
///
/// `ṁ = A* P₀ / √T₀ · √(γ/R) · ((γ+1)/2)^(−(γ+1)/(2(γ−1)))`
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if the throat area is not strictly positive.
pub fn choked_mass_flow(
    gas: &GasProperties,
    stagnation: &Stagnation,
    throat_area: Area,
) -> Result<MassRate, FlowError> {
    StrictlyPositive::check(&throat_area).map_err(FlowError::constraint("throat area"))?;

    let gamma = gas.gamma();
    let r = gas.gas_constant().get::<joule_per_kilogram_kelvin>();
    let p0 = stagnation.pressure.get::<pascal>();
    let t0 = stagnation.temperature.get::<kelvin>();

    let exponent = -(gamma + 1.0) / (2.0 * (gamma - 1.0));
    let flow = throat_area.get::<square_meter>() * p0 / t0.sqrt()
        * (gamma / r).sqrt()
        * ((gamma + 1.0) / 2.0).powf(exponent);

    Ok(MassRate::new::<kilogram_per_second>(flow))
}

/// Evaluates mass flow, thrust, and expansion state of a generated contour.
///
/// The contour must have been generated from `spec`: its exit station supplies
/// the exit state and `spec` supplies the throat and exit areas.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if the contour is empty, the ambient
/// pressure is not strictly positive, or the configuration is invalid.
pub fn evaluate_performance(
    contour: &Contour,
    spec: &NozzleSpec,
    ambient_pressure: Pressure,
    config: &PerformanceConfig,
) -> Result<Performance, FlowError> {
    config.validate()?;
    StrictlyPositive::check(&ambient_pressure).map_err(FlowError::constraint("ambient pressure"))?;

    let exit = contour
        .exit()
        .ok_or_else(|| FlowError::invalid_input("cannot evaluate an empty contour"))?
        .state;

    let flow = &contour.flow;
    let mass_flow = choked_mass_flow(&flow.gas, &flow.stagnation, spec.throat_area())?;

    let pressure_thrust = (exit.pressure - ambient_pressure).get::<pascal>()
        * spec.exit_area().get::<square_meter>();
    let momentum_thrust =
        mass_flow.get::<kilogram_per_second>() * exit.velocity.get::<meter_per_second>();
    let thrust = Force::new::<newton>(momentum_thrust + pressure_thrust);

    let ratio = exit.pressure.get::<pascal>() / ambient_pressure.get::<pascal>();
    let expansion = Expansion::classify(ratio, config);
    match expansion {
        Expansion::Separated => warn!(
            "exit pressure is {ratio:.3} of ambient, below the separation threshold {}; \
             expect flow separation inside the nozzle",
            config.separation_pressure_ratio,
        ),
        Expansion::OverExpanded => {
            warn!("nozzle is over-expanded: exit pressure is {ratio:.3} of ambient");
        }
        Expansion::Ideal | Expansion::UnderExpanded => {}
    }

    Ok(Performance {
        mass_flow,
        exit,
        thrust,
        expansion,
    })
}

/// Expansion ratio `A_e/A*` that brings the flow exactly to ambient pressure.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] unless `0 < P_a < P₀`.
pub fn ideal_expansion_ratio(
    gas: &GasProperties,
    stagnation: &Stagnation,
    ambient_pressure: Pressure,
) -> Result<f64, FlowError> {
    StrictlyPositive::check(&ambient_pressure).map_err(FlowError::constraint("ambient pressure"))?;
    if ambient_pressure >= stagnation.pressure {
        return Err(FlowError::invalid_input(format!(
            "ambient pressure {} Pa must be below the stagnation pressure {} Pa",
            ambient_pressure.get::<pascal>(),
            stagnation.pressure.get::<pascal>(),
        )));
    }

    let gamma = gas.gamma();
    let p_ratio = stagnation.pressure.get::<pascal>() / ambient_pressure.get::<pascal>();
    let mach = (2.0 / (gamma - 1.0) * (p_ratio.powf((gamma - 1.0) / gamma) - 1.0)).sqrt();

    area_mach_ratio(gamma, mach)
}
