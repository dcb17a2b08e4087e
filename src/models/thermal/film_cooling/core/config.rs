use crate::support::isentropic::{FlowError, GasSpecies};

/// Correlation constants for film cooling.
///
/// Effectiveness follows a Goldstein-type slot correlation,
/// `η = C · I^a · (d/h)^b · cos α`, and the heat-transfer coefficient a
/// turbulent flat-plate correlation corrected for blowing,
/// `Nu = c · Re^m · B^p`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilmCoolingConfig {
    /// Leading coefficient `C` of the effectiveness correlation.
    pub effectiveness_coefficient: f64,

    /// Momentum-ratio exponent `a`.
    pub momentum_exponent: f64,

    /// Exponent `b` on the slot-normalized distance `d/h`.
    pub distance_exponent: f64,

    /// Leading coefficient `c` of the Nusselt correlation.
    pub nusselt_coefficient: f64,

    /// Reynolds-number exponent `m`.
    pub reynolds_exponent: f64,

    /// Blowing-ratio exponent `p`.
    pub blowing_exponent: f64,

    /// Recovery factor `r` in `T_aw = T + r (T₀ − T)`.
    pub recovery_factor: f64,

    /// Gas whose transport properties describe the main flow.
    pub main_gas: GasSpecies,
}

impl Default for FilmCoolingConfig {
    fn default() -> Self {
        Self {
            effectiveness_coefficient: 1.9,
            momentum_exponent: 0.2,
            distance_exponent: -0.2,
            nusselt_coefficient: 0.0296,
            reynolds_exponent: 0.8,
            blowing_exponent: 0.2,
            recovery_factor: 0.892,
            main_gas: GasSpecies::Air,
        }
    }
}

impl FilmCoolingConfig {
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if a coefficient is not strictly
    /// positive, an exponent is not finite, or the recovery factor lies
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), FlowError> {
        for (name, value) in [
            ("effectiveness coefficient", self.effectiveness_coefficient),
            ("Nusselt coefficient", self.nusselt_coefficient),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(FlowError::invalid_input(format!(
                    "{name} must be strictly positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("momentum exponent", self.momentum_exponent),
            ("distance exponent", self.distance_exponent),
            ("Reynolds exponent", self.reynolds_exponent),
            ("blowing exponent", self.blowing_exponent),
        ] {
            if !value.is_finite() {
                return Err(FlowError::invalid_input(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.recovery_factor) {
            return Err(FlowError::invalid_input(format!(
                "recovery factor must lie in [0, 1], got {}",
                self.recovery_factor
            )));
        }

        Ok(())
    }
}
