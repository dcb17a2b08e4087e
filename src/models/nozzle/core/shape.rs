//! Nozzle shape variants.
//!
//! Every shape shares the conical convergent section described by
//! [`NozzleSpec`](super::NozzleSpec) and differs only in how the equivalent
//! radius rises from the throat to the exit, and in the wall cross-section it
//! reports at each station.
//!
//! The flow computation never depends on the wall cross-section: it uses the
//! cross-sectional area alone.

mod bell;
mod convergent_divergent;
mod elliptic;

pub use bell::Bell;
pub use convergent_divergent::ConvergentDivergent;
pub use elliptic::Elliptic;

use uom::si::f64::Area;

use crate::support::isentropic::FlowError;

use super::{WallSection, spec::equivalent_radius};

/// The contract shared by all nozzle shapes.
///
/// A shape describes the divergent section as a normalized radius profile:
/// `divergent_profile(ξ)` is the fraction of the throat-to-exit radius rise
/// reached at the fraction `ξ` of the divergent length. It must be `0` at
/// `ξ = 0`, `1` at `ξ = 1`, and strictly increasing in between.
///
/// Contours are produced from a shape with [`generate`](super::generate).
pub trait ContourShape {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Checks the shape parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if a parameter is out of range.
    fn validate(&self) -> Result<(), FlowError> {
        Ok(())
    }

    /// Normalized radius rise at divergent fraction `xi ∈ [0, 1]`.
    fn divergent_profile(&self, xi: f64) -> f64;

    /// Wall cross-section enclosing the given area.
    fn wall_section(&self, area: Area) -> WallSection {
        WallSection::Circular {
            radius: equivalent_radius(area),
        }
    }
}

/// Tagged union of the supported shapes.
///
/// Useful when the shape is chosen at runtime, for example in a parameter
/// sweep that mixes shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NozzleShape {
    ConvergentDivergent(ConvergentDivergent),
    Elliptic(Elliptic),
    Bell(Bell),
}

impl Default for NozzleShape {
    fn default() -> Self {
        Self::ConvergentDivergent(ConvergentDivergent)
    }
}

impl From<ConvergentDivergent> for NozzleShape {
    fn from(shape: ConvergentDivergent) -> Self {
        Self::ConvergentDivergent(shape)
    }
}

impl From<Elliptic> for NozzleShape {
    fn from(shape: Elliptic) -> Self {
        Self::Elliptic(shape)
    }
}

impl From<Bell> for NozzleShape {
    fn from(shape: Bell) -> Self {
        Self::Bell(shape)
    }
}

impl ContourShape for NozzleShape {
    fn name(&self) -> &'static str {
        match self {
            Self::ConvergentDivergent(shape) => shape.name(),
            Self::Elliptic(shape) => shape.name(),
            Self::Bell(shape) => shape.name(),
        }
    }

    fn validate(&self) -> Result<(), FlowError> {
        match self {
            Self::ConvergentDivergent(shape) => shape.validate(),
            Self::Elliptic(shape) => shape.validate(),
            Self::Bell(shape) => shape.validate(),
        }
    }

    fn divergent_profile(&self, xi: f64) -> f64 {
        match self {
            Self::ConvergentDivergent(shape) => shape.divergent_profile(xi),
            Self::Elliptic(shape) => shape.divergent_profile(xi),
            Self::Bell(shape) => shape.divergent_profile(xi),
        }
    }

    fn wall_section(&self, area: Area) -> WallSection {
        match self {
            Self::ConvergentDivergent(shape) => shape.wall_section(area),
            Self::Elliptic(shape) => shape.wall_section(area),
            Self::Bell(shape) => shape.wall_section(area),
        }
    }
}

/// Checks that an angle in degrees lies strictly between 0° and 90°.
fn check_half_angle(name: &str, degrees: f64) -> Result<(), FlowError> {
    if degrees > 0.0 && degrees < 90.0 {
        Ok(())
    } else {
        Err(FlowError::invalid_input(format!(
            "{name} must lie in (0°, 90°), got {degrees}°"
        )))
    }
}
