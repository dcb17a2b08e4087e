//! Film cooling of nozzle walls.
//!
//! A coolant injected through a wall slot forms a protective film that decays
//! downstream. [`FilmCooling`] is a [`twine_core::Model`] that evaluates the
//! film along a generated nozzle [`Contour`](crate::models::nozzle::Contour)
//! for a fixed coolant and slot.
//!
//! Only the centerline is modeled; spanwise variation is ignored.

mod core;

pub use self::core::{
    Coolant, CoolingResult, FilmCoolingConfig, InjectionRatios, InjectionSlot, analyze,
    injection_ratios,
};

use twine_core::Model;

use crate::{
    models::nozzle::Contour,
    support::isentropic::{FlowError, FlowState},
};

/// Input to [`FilmCooling`]: a contour and the main-flow state at the slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmCoolingInput {
    pub contour: Contour,
    pub main_flow: FlowState,
}

/// Evaluates film cooling for a fixed coolant and injection slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmCooling {
    pub coolant: Coolant,
    pub slot: InjectionSlot,
    pub config: FilmCoolingConfig,
}

impl FilmCooling {
    /// Creates a film cooling model with the default correlation constants.
    #[must_use]
    pub fn new(coolant: Coolant, slot: InjectionSlot) -> Self {
        Self {
            coolant,
            slot,
            config: FilmCoolingConfig::default(),
        }
    }
}

impl Model for FilmCooling {
    type Input = FilmCoolingInput;
    type Output = Vec<CoolingResult>;
    type Error = FlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        analyze(
            &input.contour,
            &input.main_flow,
            &self.coolant,
            &self.slot,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

    use super::core::test_support::{contour, helium, throat_slot};

    #[test]
    fn model_delegates_to_analyze() -> Result<(), FlowError> {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let model = FilmCooling::new(helium(), slot);

        let results = model.call(&FilmCoolingInput {
            contour: contour.clone(),
            main_flow,
        })?;
        let direct = analyze(
            &contour,
            &main_flow,
            &helium(),
            &slot,
            &FilmCoolingConfig::default(),
        )?;

        assert_eq!(results, direct);
        Ok(())
    }

    #[test]
    fn rejects_missing_coolant() {
        let contour = contour();
        let (slot, main_flow) = throat_slot(&contour);
        let model = FilmCooling::new(
            Coolant {
                mass_flow: MassRate::new::<kilogram_per_second>(0.0),
                ..helium()
            },
            slot,
        );

        assert!(matches!(
            model.call(&FilmCoolingInput { contour, main_flow }),
            Err(FlowError::InvalidInput { .. })
        ));
    }
}
