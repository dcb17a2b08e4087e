use std::f64::consts::PI;

use uom::si::{
    angle::{degree, radian},
    area::square_meter,
    f64::{Angle, Area, Length},
    length::meter,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    isentropic::FlowError,
};

/// Geometry shared by every nozzle shape.
///
/// A nozzle starts with a conical convergent section from the inlet area down
/// to the throat, followed by a shape-specific divergent section that reaches
/// the exit area at `x = length`.
///
/// The convergent section is `(r_i − r_t) / tan θ_c` long, where `r` is the
/// equivalent circular radius `√(A/π)` and `θ_c` is the convergent half-angle.
/// Setting the inlet area equal to the throat area removes it, which puts the
/// throat at `x = 0`.
///
/// A `NozzleSpec` is validated on construction and is never modified in place:
/// each builder method returns a new, revalidated spec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleSpec {
    throat_area: Area,
    exit_area: Area,
    inlet_area: Area,
    length: Length,
    convergent_angle: Angle,
}

impl NozzleSpec {
    /// Creates a nozzle whose inlet area equals its exit area and whose
    /// convergent half-angle is 30°.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if an area or the length is not
    /// strictly positive, and [`FlowError::InvalidGeometry`] if the exit area
    /// does not exceed the throat area or the convergent section does not fit
    /// within the length.
    pub fn new(throat_area: Area, exit_area: Area, length: Length) -> Result<Self, FlowError> {
        StrictlyPositive::check(&throat_area).map_err(FlowError::constraint("throat area"))?;
        StrictlyPositive::check(&exit_area).map_err(FlowError::constraint("exit area"))?;
        StrictlyPositive::check(&length).map_err(FlowError::constraint("length"))?;

        if exit_area <= throat_area {
            return Err(FlowError::invalid_geometry(format!(
                "exit area {} m² must exceed throat area {} m²",
                exit_area.get::<square_meter>(),
                throat_area.get::<square_meter>(),
            )));
        }

        Self {
            throat_area,
            exit_area,
            inlet_area: exit_area,
            length,
            convergent_angle: Angle::new::<degree>(30.0),
        }
        .checked()
    }

    /// Returns a spec with the given inlet area.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] for a non-positive area and
    /// [`FlowError::InvalidGeometry`] if the inlet is smaller than the throat
    /// or the convergent section no longer fits.
    pub fn with_inlet_area(self, inlet_area: Area) -> Result<Self, FlowError> {
        StrictlyPositive::check(&inlet_area).map_err(FlowError::constraint("inlet area"))?;

        if inlet_area < self.throat_area {
            return Err(FlowError::invalid_geometry(format!(
                "inlet area {} m² is smaller than throat area {} m²",
                inlet_area.get::<square_meter>(),
                self.throat_area.get::<square_meter>(),
            )));
        }

        Self { inlet_area, ..self }.checked()
    }

    /// Returns a spec with the given convergent half-angle.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] unless `0° < angle < 90°`, and
    /// [`FlowError::InvalidGeometry`] if the convergent section no longer fits.
    pub fn with_convergent_angle(self, convergent_angle: Angle) -> Result<Self, FlowError> {
        let degrees = convergent_angle.get::<degree>();
        if !(degrees > 0.0 && degrees < 90.0) {
            return Err(FlowError::invalid_input(format!(
                "convergent half-angle must lie in (0°, 90°), got {degrees}°"
            )));
        }

        Self {
            convergent_angle,
            ..self
        }
        .checked()
    }

    fn checked(self) -> Result<Self, FlowError> {
        let convergent = self.convergent_length();
        if convergent >= self.length {
            return Err(FlowError::invalid_geometry(format!(
                "convergent section ({} m) leaves no room for a divergent section in {} m",
                convergent.get::<meter>(),
                self.length.get::<meter>(),
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn throat_area(&self) -> Area {
        self.throat_area
    }

    #[must_use]
    pub fn exit_area(&self) -> Area {
        self.exit_area
    }

    #[must_use]
    pub fn inlet_area(&self) -> Area {
        self.inlet_area
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn convergent_angle(&self) -> Angle {
        self.convergent_angle
    }

    /// Exit-to-throat area ratio `A_e/A*`.
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        self.exit_area.get::<square_meter>() / self.throat_area.get::<square_meter>()
    }

    /// Equivalent circular radius of the throat.
    #[must_use]
    pub fn throat_radius(&self) -> Length {
        equivalent_radius(self.throat_area)
    }

    /// Equivalent circular radius of the exit.
    #[must_use]
    pub fn exit_radius(&self) -> Length {
        equivalent_radius(self.exit_area)
    }

    /// Equivalent circular radius of the inlet.
    #[must_use]
    pub fn inlet_radius(&self) -> Length {
        equivalent_radius(self.inlet_area)
    }

    /// Axial length of the convergent section.
    #[must_use]
    pub fn convergent_length(&self) -> Length {
        let drop = self.inlet_radius() - self.throat_radius();
        drop / self.convergent_angle.get::<radian>().tan()
    }

    /// Axial position of the throat.
    #[must_use]
    pub fn throat_position(&self) -> Length {
        self.convergent_length()
    }

    /// Axial length of the divergent section.
    #[must_use]
    pub fn divergent_length(&self) -> Length {
        self.length - self.convergent_length()
    }
}

/// Radius of the circle with the given area.
#[must_use]
pub fn equivalent_radius(area: Area) -> Length {
    Length::new::<meter>((area.get::<square_meter>() / PI).sqrt())
}
