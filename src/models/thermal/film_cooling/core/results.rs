use uom::si::f64::{HeatTransfer, Length, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, UnitInterval};

/// Film cooling state at one contour station downstream of the slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingResult {
    /// Axial position of the station.
    pub position: Length,

    /// Distance downstream of the slot.
    pub distance: Length,

    /// Centerline film cooling effectiveness.
    pub effectiveness: Constrained<f64, UnitInterval>,

    /// Wall temperature without cooling.
    pub adiabatic_wall_temperature: ThermodynamicTemperature,

    /// Wall temperature under the coolant film.
    pub wall_temperature: ThermodynamicTemperature,

    pub heat_transfer_coefficient: HeatTransfer,
}

impl CoolingResult {
    /// Effectiveness as a plain number.
    #[must_use]
    pub fn effectiveness(&self) -> f64 {
        *self.effectiveness.as_ref()
    }
}
