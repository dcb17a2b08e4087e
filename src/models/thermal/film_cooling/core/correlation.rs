//! Empirical film cooling correlations in SI units.

use super::FilmCoolingConfig;

/// Centerline effectiveness before clipping to the unit interval.
///
/// `distance_ratio` is the downstream distance over the slot height and
/// `angle` is the injection angle in radians.
pub(super) fn raw_effectiveness(
    config: &FilmCoolingConfig,
    momentum_ratio: f64,
    distance_ratio: f64,
    angle: f64,
) -> f64 {
    config.effectiveness_coefficient
        * momentum_ratio.powf(config.momentum_exponent)
        * distance_ratio.powf(config.distance_exponent)
        * angle.cos()
}

/// Local Nusselt number based on downstream distance.
pub(super) fn nusselt(config: &FilmCoolingConfig, reynolds: f64, blowing_ratio: f64) -> f64 {
    config.nusselt_coefficient
        * reynolds.powf(config.reynolds_exponent)
        * blowing_ratio.powf(config.blowing_exponent)
}

/// Adiabatic wall temperature from static and stagnation temperatures.
pub(super) fn adiabatic_wall_temperature(
    config: &FilmCoolingConfig,
    static_temperature: f64,
    stagnation_temperature: f64,
) -> f64 {
    static_temperature + config.recovery_factor * (stagnation_temperature - static_temperature)
}

/// Wall temperature under a film of the given effectiveness,
/// `T_w = T_aw − η (T_aw − T_c)`.
///
/// `overheat` is the adiabatic wall temperature minus the coolant temperature.
/// Written from the coolant side so a perfect film lands exactly on `T_c`.
pub(super) fn wall_temperature(effectiveness: f64, coolant: f64, overheat: f64) -> f64 {
    coolant + (1.0 - effectiveness) * overheat
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn effectiveness_decays_with_distance() {
        let config = FilmCoolingConfig::default();

        let near = raw_effectiveness(&config, 1.0, 10.0, 0.0);
        let far = raw_effectiveness(&config, 1.0, 100.0, 0.0);

        assert_relative_eq!(near, 1.9 * 10f64.powf(-0.2));
        assert!(far < near);
    }

    #[test]
    fn inclined_injection_reduces_effectiveness() {
        let config = FilmCoolingConfig::default();

        let tangential = raw_effectiveness(&config, 1.0, 20.0, 0.0);
        let inclined = raw_effectiveness(&config, 1.0, 20.0, 60f64.to_radians());

        assert_relative_eq!(inclined, 0.5 * tangential, max_relative = 1e-12);
    }

    #[test]
    fn nusselt_reference_value() {
        let config = FilmCoolingConfig::default();
        assert_relative_eq!(
            nusselt(&config, 1e5, 1.0),
            0.0296 * 1e4,
            max_relative = 1e-12
        );
    }

    #[test]
    fn wall_temperature_spans_coolant_to_adiabatic() {
        let config = FilmCoolingConfig::default();
        let t_aw = adiabatic_wall_temperature(&config, 1000.0, 1500.0);

        assert_relative_eq!(t_aw, 1446.0);
        assert_relative_eq!(wall_temperature(0.0, 300.0, t_aw - 300.0), t_aw);
        assert_eq!(wall_temperature(1.0, 300.0, t_aw - 300.0), 300.0);
        assert_relative_eq!(wall_temperature(0.5, 300.0, t_aw - 300.0), 873.0);
    }
}
