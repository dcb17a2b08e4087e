use uom::si::{
    angle::degree,
    f64::{Angle, Length, MassRate, ThermodynamicTemperature},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    isentropic::{FlowError, FlowState, GasSpecies},
};

/// Coolant supplied to an injection slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coolant {
    pub gas: GasSpecies,
    pub mass_flow: MassRate,
    pub stagnation_temperature: ThermodynamicTemperature,
}

impl Coolant {
    fn validate(&self) -> Result<(), FlowError> {
        StrictlyPositive::check(&self.mass_flow)
            .map_err(FlowError::constraint("coolant mass flow"))?;
        StrictlyPositive::check(&self.stagnation_temperature.get::<kelvin>())
            .map_err(FlowError::constraint("coolant temperature"))
    }
}

/// A tangential injection slot on the nozzle wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectionSlot {
    /// Axial position of the slot, measured from the nozzle inlet.
    pub position: Length,

    /// Slot height normal to the wall.
    pub height: Length,

    /// Slot width along the wall perimeter.
    pub width: Length,

    /// Injection angle measured from the wall, `0° ≤ α < 90°`.
    pub angle: Angle,
}

impl InjectionSlot {
    fn validate(&self) -> Result<(), FlowError> {
        NonNegative::check(&self.position).map_err(FlowError::constraint("slot position"))?;
        StrictlyPositive::check(&self.height).map_err(FlowError::constraint("slot height"))?;
        StrictlyPositive::check(&self.width).map_err(FlowError::constraint("slot width"))?;

        let degrees = self.angle.get::<degree>();
        if (0.0..90.0).contains(&degrees) {
            Ok(())
        } else {
            Err(FlowError::invalid_input(format!(
                "injection angle must lie in [0°, 90°), got {degrees}°"
            )))
        }
    }
}

/// Coolant-to-main-flow ratios at the slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectionRatios {
    /// Mass flux ratio `B = ρ_c V_c / (ρ_∞ V_∞)`.
    pub blowing: f64,

    /// Momentum flux ratio `I = ρ_c V_c² / (ρ_∞ V_∞²)`.
    pub momentum: f64,
}

/// Blowing and momentum ratios of a coolant injected into the main flow.
///
/// The coolant leaves the slot at the main-flow static pressure and its own
/// stagnation temperature, so its density is `ρ_c = P / (R_c T_c)` and its
/// mass flux is `ṁ / (h·w)`.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if the coolant or slot is invalid, or
/// if the main flow has no positive density or velocity at the slot.
pub fn injection_ratios(
    main_flow: &FlowState,
    coolant: &Coolant,
    slot: &InjectionSlot,
) -> Result<InjectionRatios, FlowError> {
    coolant.validate()?;
    slot.validate()?;
    StrictlyPositive::check(&main_flow.density)
        .map_err(FlowError::constraint("main flow density"))?;
    StrictlyPositive::check(&main_flow.velocity)
        .map_err(FlowError::constraint("main flow velocity"))?;

    let slot_area = slot.height.get::<meter>() * slot.width.get::<meter>();
    let coolant_flux = coolant.mass_flow.get::<kilogram_per_second>() / slot_area;

    let coolant_density = main_flow.pressure.get::<pascal>()
        / (coolant
            .gas
            .properties()
            .gas_constant()
            .get::<joule_per_kilogram_kelvin>()
            * coolant.stagnation_temperature.get::<kelvin>());

    let main_density = main_flow.density.get::<kilogram_per_cubic_meter>();
    let main_flux = main_density * main_flow.velocity.get::<meter_per_second>();

    let blowing = coolant_flux / main_flux;
    let momentum = blowing * blowing * main_density / coolant_density;

    Ok(InjectionRatios { blowing, momentum })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::{MassDensity, Pressure, Velocity};

    fn main_flow() -> FlowState {
        FlowState {
            mach: 0.16,
            temperature: ThermodynamicTemperature::new::<kelvin>(1000.0),
            pressure: Pressure::new::<pascal>(1e6),
            density: MassDensity::new::<kilogram_per_cubic_meter>(3.48),
            velocity: Velocity::new::<meter_per_second>(100.0),
        }
    }

    fn slot() -> InjectionSlot {
        InjectionSlot {
            position: Length::new::<meter>(0.0),
            height: Length::new::<meter>(0.005),
            width: Length::new::<meter>(0.015),
            angle: Angle::new::<degree>(30.0),
        }
    }

    fn coolant(mass_flow: f64) -> Coolant {
        Coolant {
            gas: GasSpecies::Air,
            mass_flow: MassRate::new::<kilogram_per_second>(mass_flow),
            stagnation_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        }
    }

    #[test]
    fn ratios_from_mass_flux() -> Result<(), FlowError> {
        // 0.0522 kg/s through 7.5e-5 m² is 696 kg/m²s, twice the main flux.
        let ratios = injection_ratios(&main_flow(), &coolant(0.0522), &slot())?;

        let coolant_density = 1e6 / (287.053 * 300.0);
        assert_relative_eq!(ratios.blowing, 2.0, max_relative = 1e-12);
        assert_relative_eq!(
            ratios.momentum,
            4.0 * 3.48 / coolant_density,
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn lighter_coolant_carries_more_momentum() -> Result<(), FlowError> {
        let air = injection_ratios(&main_flow(), &coolant(0.0522), &slot())?;
        let helium = injection_ratios(
            &main_flow(),
            &Coolant {
                gas: GasSpecies::Helium,
                ..coolant(0.0522)
            },
            &slot(),
        )?;

        assert_relative_eq!(air.blowing, helium.blowing);
        assert!(helium.momentum > air.momentum);

        Ok(())
    }

    #[test]
    fn rejects_invalid_injection() {
        let flow = main_flow();

        for mass_flow in [0.0, -0.1] {
            assert!(matches!(
                injection_ratios(&flow, &coolant(mass_flow), &slot()),
                Err(FlowError::InvalidInput { .. })
            ));
        }

        let flat = InjectionSlot {
            height: Length::new::<meter>(0.0),
            ..slot()
        };
        assert!(matches!(
            injection_ratios(&flow, &coolant(0.05), &flat),
            Err(FlowError::InvalidInput { .. })
        ));

        let backward = InjectionSlot {
            angle: Angle::new::<degree>(120.0),
            ..slot()
        };
        assert!(matches!(
            injection_ratios(&flow, &coolant(0.05), &backward),
            Err(FlowError::InvalidInput { .. })
        ));

        let stagnant = FlowState {
            velocity: Velocity::new::<meter_per_second>(0.0),
            ..flow
        };
        assert!(matches!(
            injection_ratios(&stagnant, &coolant(0.05), &slot()),
            Err(FlowError::InvalidInput { .. })
        ));
    }
}
