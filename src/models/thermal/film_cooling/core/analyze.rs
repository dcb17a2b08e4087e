use log::{debug, warn};
use uom::si::{
    angle::radian,
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, Length, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{
    models::nozzle::Contour,
    support::{
        constraint::UnitInterval,
        isentropic::{FlowError, FlowState},
        units::TemperatureDifference,
    },
};

use super::{
    Coolant, CoolingResult, FilmCoolingConfig, InjectionSlot, correlation, injection_ratios,
};

/// Film cooling along a contour downstream of a single injection slot.
///
/// `main_flow` is the main-flow state at the slot; it sets the blowing and
/// momentum ratios. Each station strictly downstream of the slot then gets
/// a centerline effectiveness from its distance to the slot, a heat-transfer
/// coefficient from its own static state, and the resulting wall temperature.
/// Results are ordered by position, like the contour.
///
/// Effectiveness values outside `[0, 1]` are clipped, which happens close
/// to the slot where the correlation overshoots.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if:
/// - the configuration, coolant, or slot is invalid
/// - the coolant is not colder than the main-flow stagnation temperature
/// - the slot does not lie upstream of the last contour station
pub fn analyze(
    contour: &Contour,
    main_flow: &FlowState,
    coolant: &Coolant,
    slot: &InjectionSlot,
    config: &FilmCoolingConfig,
) -> Result<Vec<CoolingResult>, FlowError> {
    config.validate()?;

    let stagnation_temperature = contour.flow.stagnation.temperature.get::<kelvin>();
    let coolant_temperature = coolant.stagnation_temperature.get::<kelvin>();
    if coolant.stagnation_temperature >= contour.flow.stagnation.temperature {
        return Err(FlowError::invalid_input(format!(
            "coolant temperature {coolant_temperature} K must be below the main-flow \
             stagnation temperature {stagnation_temperature} K"
        )));
    }

    let ratios = injection_ratios(main_flow, coolant, slot)?;

    let exit = contour
        .exit()
        .ok_or_else(|| FlowError::invalid_input("cannot cool an empty contour"))?;
    if slot.position >= exit.position {
        return Err(FlowError::invalid_input(format!(
            "injection slot at x = {} m leaves no stations downstream (exit at x = {} m)",
            slot.position.get::<meter>(),
            exit.position.get::<meter>(),
        )));
    }

    let transport = config.main_gas.transport();
    let viscosity = transport.viscosity.get::<pascal_second>();
    let conductivity = transport.thermal_conductivity.get::<watt_per_meter_kelvin>();
    let slot_position = slot.position.get::<meter>();
    let slot_height = slot.height.get::<meter>();
    let angle = slot.angle.get::<radian>();

    let mut clipped = 0_usize;
    let results = contour
        .iter()
        .filter(|point| point.position > slot.position)
        .map(|point| -> Result<CoolingResult, FlowError> {
            let distance = point.position.get::<meter>() - slot_position;

            let raw = correlation::raw_effectiveness(
                config,
                ratios.momentum,
                distance / slot_height,
                angle,
            );
            let bounded = raw.clamp(0.0, 1.0);
            if bounded != raw {
                clipped += 1;
            }
            let effectiveness = UnitInterval::new(bounded)
                .map_err(FlowError::constraint("film cooling effectiveness"))?;

            let state = &point.state;
            let reynolds = state.density.get::<kilogram_per_cubic_meter>()
                * state.velocity.get::<meter_per_second>()
                * distance
                / viscosity;
            let nusselt = correlation::nusselt(config, reynolds, ratios.blowing);

            let t_aw = correlation::adiabatic_wall_temperature(
                config,
                state.temperature.get::<kelvin>(),
                stagnation_temperature,
            );
            let adiabatic_wall = ThermodynamicTemperature::new::<kelvin>(t_aw);
            let overheat = adiabatic_wall.minus(coolant.stagnation_temperature);
            let t_wall = correlation::wall_temperature(
                bounded,
                coolant_temperature,
                overheat.get::<delta_kelvin>(),
            );

            Ok(CoolingResult {
                position: point.position,
                distance: Length::new::<meter>(distance),
                effectiveness,
                adiabatic_wall_temperature: adiabatic_wall,
                wall_temperature: ThermodynamicTemperature::new::<kelvin>(t_wall),
                heat_transfer_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(
                    nusselt * conductivity / distance,
                ),
            })
        })
        .collect::<Result<Vec<_>, FlowError>>()?;

    if clipped > 0 {
        warn!(
            "film cooling effectiveness clipped to [0, 1] at {clipped} of {} stations",
            results.len()
        );
    }
    debug!(
        "film cooling from x = {slot_position} m: blowing {:.4}, momentum {:.4}, {} stations",
        ratios.blowing,
        ratios.momentum,
        results.len(),
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, f64::Angle};

    use crate::models::thermal::film_cooling::core::test_support::{contour, helium, throat_slot};

    #[test]
    fn covers_stations_downstream_of_slot() -> Result<(), FlowError> {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let throat = contour.throat_index.unwrap();

        let results = analyze(
            &contour,
            &main_flow,
            &helium(),
            &slot,
            &FilmCoolingConfig::default(),
        )?;

        assert_eq!(results.len(), contour.len() - throat - 1);
        assert!(results.iter().all(|r| r.position > slot.position));
        assert!(
            results
                .windows(2)
                .all(|pair| pair[1].position > pair[0].position)
        );
        assert_eq!(
            results.last().unwrap().position,
            contour.exit().unwrap().position
        );

        Ok(())
    }

    #[test]
    fn film_protects_the_wall() -> Result<(), FlowError> {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let coolant = helium();

        let results = analyze(
            &contour,
            &main_flow,
            &coolant,
            &slot,
            &FilmCoolingConfig::default(),
        )?;

        for result in &results {
            let eta = result.effectiveness();
            assert!((0.0..=1.0).contains(&eta));
            assert!(result.wall_temperature <= result.adiabatic_wall_temperature);
            assert!(result.wall_temperature >= coolant.stagnation_temperature);
            assert!(result.heat_transfer_coefficient.value > 0.0);
        }
        assert!(
            results
                .windows(2)
                .all(|pair| pair[1].effectiveness() <= pair[0].effectiveness())
        );

        Ok(())
    }

    #[test]
    fn matches_correlations_at_a_station() -> Result<(), FlowError> {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let coolant = helium();
        let config = FilmCoolingConfig::default();

        let results = analyze(&contour, &main_flow, &coolant, &slot, &config)?;
        let ratios = injection_ratios(&main_flow, &coolant, &slot)?;

        let result = results.last().unwrap();
        let exit = contour.exit().unwrap();
        let d = result.distance.get::<meter>();
        assert_relative_eq!(
            d,
            (exit.position - slot.position).get::<meter>(),
            max_relative = 1e-12
        );

        let inclination = 30f64.to_radians().cos();
        let raw = 1.9 * ratios.momentum.powf(0.2) * (d / 0.002).powf(-0.2) * inclination;
        let eta = raw.clamp(0.0, 1.0);
        assert_relative_eq!(result.effectiveness(), eta, max_relative = 1e-12);

        let re = exit.state.density.get::<kilogram_per_cubic_meter>()
            * exit.state.velocity.get::<meter_per_second>()
            * d
            / 1.84e-5;
        let h = 0.0296 * re.powf(0.8) * ratios.blowing.powf(0.2) * 0.0262 / d;
        assert_relative_eq!(
            result
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            h,
            max_relative = 1e-12
        );

        let t = exit.state.temperature.get::<kelvin>();
        let t_aw = t + 0.892 * (3000.0 - t);
        assert_relative_eq!(
            result.wall_temperature.get::<kelvin>(),
            t_aw - eta * (t_aw - 300.0),
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn tangential_injection_cools_better() -> Result<(), FlowError> {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let config = FilmCoolingConfig::default();

        let steep = InjectionSlot {
            angle: Angle::new::<degree>(60.0),
            ..slot
        };

        let inclined = analyze(&contour, &main_flow, &helium(), &slot, &config)?;
        let steeper = analyze(&contour, &main_flow, &helium(), &steep, &config)?;

        let exit = |results: &[CoolingResult]| results.last().unwrap().effectiveness();
        assert!(exit(&steeper) < exit(&inclined));

        Ok(())
    }

    #[test]
    fn rejects_coolant_hotter_than_main_flow() {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);

        for kelvins in [3000.0, 3500.0] {
            let coolant = Coolant {
                stagnation_temperature: ThermodynamicTemperature::new::<kelvin>(kelvins),
                ..helium()
            };
            assert!(matches!(
                analyze(
                    &contour,
                    &main_flow,
                    &coolant,
                    &slot,
                    &FilmCoolingConfig::default(),
                ),
                Err(FlowError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn rejects_slot_at_exit() {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let at_exit = InjectionSlot {
            position: contour.exit().unwrap().position,
            ..slot
        };

        assert!(matches!(
            analyze(
                &contour,
                &main_flow,
                &helium(),
                &at_exit,
                &FilmCoolingConfig::default(),
            ),
            Err(FlowError::InvalidInput { .. })
        ));
    }
}
