use uom::si::{angle::radian, f64::Angle, ratio::ratio};

use crate::models::nozzle::core::NozzleSpec;

use super::ContourShape;

/// Conventional conical convergent-divergent nozzle.
///
/// The equivalent radius rises linearly from the throat to the exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvergentDivergent;

impl ConvergentDivergent {
    /// Half-angle of the divergent cone implied by a [`NozzleSpec`].
    #[must_use]
    pub fn divergent_angle(&self, spec: &NozzleSpec) -> Angle {
        let rise = spec.exit_radius() - spec.throat_radius();
        let slope = (rise / spec.divergent_length()).get::<ratio>();
        Angle::new::<radian>(slope.atan())
    }
}

impl ContourShape for ConvergentDivergent {
    fn name(&self) -> &'static str {
        "convergent-divergent"
    }

    fn divergent_profile(&self, xi: f64) -> f64 {
        xi
    }
}
