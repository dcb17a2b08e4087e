use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::support::isentropic::FlowError;

use super::{ContourShape, check_half_angle};

/// Bell nozzle approximating a thrust-optimized contour.
///
/// The wall angle follows a linear schedule from `initial_angle` at the throat
/// to `exit_angle` at the exit. The radius rise is the integral of `tan θ`
/// along that schedule,
///
/// `F(ξ) = [ln cos θ_i − ln cos(θ_i + Δθ·ξ)] / Δθ`,
///
/// normalized by `F(1)` so the contour lands on the exit radius. The schedule
/// fixes the shape of the wall; its overall scale follows from the
/// [`NozzleSpec`](crate::models::nozzle::NozzleSpec).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bell {
    pub initial_angle: Angle,
    pub exit_angle: Angle,
}

impl Default for Bell {
    fn default() -> Self {
        Self {
            initial_angle: Angle::new::<degree>(30.0),
            exit_angle: Angle::new::<degree>(15.0),
        }
    }
}

impl Bell {
    /// Unnormalized integral of `tan θ` from the throat to divergent fraction `xi`.
    fn rise(&self, xi: f64) -> f64 {
        let initial = self.initial_angle.get::<radian>();
        let delta = self.exit_angle.get::<radian>() - initial;

        if delta.abs() < 1e-12 {
            return xi * initial.tan();
        }
        (initial.cos().ln() - (initial + delta * xi).cos().ln()) / delta
    }
}

impl ContourShape for Bell {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn validate(&self) -> Result<(), FlowError> {
        check_half_angle(
            "initial expansion angle",
            self.initial_angle.get::<degree>(),
        )?;
        check_half_angle("exit angle", self.exit_angle.get::<degree>())
    }

    fn divergent_profile(&self, xi: f64) -> f64 {
        self.rise(xi) / self.rise(1.0)
    }
}
