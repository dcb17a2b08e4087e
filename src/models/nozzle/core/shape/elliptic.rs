use std::f64::consts::PI;

use uom::si::{
    angle::{degree, radian},
    area::square_meter,
    f64::{Angle, Area, Length},
    length::meter,
};

use crate::{models::nozzle::core::WallSection, support::isentropic::FlowError};

use super::{ContourShape, check_half_angle};

/// Perimeter samples per lobe in the reported wall section.
const POINTS_PER_LOBE: usize = 16;

/// Lobed nozzle with a non-axisymmetric perimeter.
///
/// The cross-sectional area follows the same linear equivalent-radius rise as
/// [`ConvergentDivergent`](super::ConvergentDivergent). Only the reported wall
/// differs: at each station the perimeter is the lobed curve
///
/// `ρ(φ) = ρ₀ · (1 + k·cos(nφ))`, with `k = tan(lobe_angle / 2)`,
///
/// where `n` is the lobe count and `ρ₀` is chosen so the curve encloses the
/// station's area, `π·ρ₀²·(1 + k²/2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elliptic {
    pub lobes: u32,
    pub lobe_angle: Angle,
}

impl Default for Elliptic {
    fn default() -> Self {
        Self {
            lobes: 4,
            lobe_angle: Angle::new::<degree>(45.0),
        }
    }
}

impl Elliptic {
    /// Lobe amplitude `k` relative to the base radius.
    #[must_use]
    pub fn lobe_amplitude(&self) -> f64 {
        (0.5 * self.lobe_angle.get::<radian>()).tan()
    }

    /// Base radius `ρ₀` of the lobed curve enclosing `area`.
    #[must_use]
    pub fn base_radius(&self, area: Area) -> Length {
        let k = self.lobe_amplitude();
        Length::new::<meter>((area.get::<square_meter>() / (PI * (1.0 + 0.5 * k * k))).sqrt())
    }

    /// Radius at the lobe tips for a section enclosing `area`.
    #[must_use]
    pub fn tip_radius(&self, area: Area) -> Length {
        self.base_radius(area) * (1.0 + self.lobe_amplitude())
    }
}

impl ContourShape for Elliptic {
    fn name(&self) -> &'static str {
        "elliptic"
    }

    fn validate(&self) -> Result<(), FlowError> {
        if self.lobes < 2 {
            return Err(FlowError::invalid_input(format!(
                "elliptic nozzle needs at least 2 lobes, got {}",
                self.lobes
            )));
        }
        check_half_angle("lobe angle", self.lobe_angle.get::<degree>())
    }

    fn divergent_profile(&self, xi: f64) -> f64 {
        xi
    }

    fn wall_section(&self, area: Area) -> WallSection {
        let base = self.base_radius(area).get::<meter>();
        let k = self.lobe_amplitude();
        let lobes = f64::from(self.lobes);
        let count = self.lobes as usize * POINTS_PER_LOBE;

        let points = (0..count)
            .map(|i| {
                let phi = 2.0 * PI * i as f64 / count as f64;
                let rho = base * (1.0 + k * (lobes * phi).cos());
                [
                    Length::new::<meter>(rho * phi.cos()),
                    Length::new::<meter>(rho * phi.sin()),
                ]
            })
            .collect();

        WallSection::Lobed { points }
    }
}
