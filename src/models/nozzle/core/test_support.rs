//! Shared fixtures for nozzle tests.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Pressure, ThermodynamicTemperature},
    length::meter,
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::isentropic::{GasProperties, Stagnation};

use super::{FlowConditions, NozzleSpec};

/// Air in a 3000 K, 2 MPa chamber.
pub(crate) fn air_chamber() -> FlowConditions {
    FlowConditions {
        gas: GasProperties::air(),
        stagnation: Stagnation::new(
            ThermodynamicTemperature::new::<kelvin>(3000.0),
            Pressure::new::<megapascal>(2.0),
        )
        .unwrap(),
    }
}

/// Throat 0.1 m², exit 0.5 m², 1 m long, default convergent section.
pub(crate) fn reference_spec() -> NozzleSpec {
    NozzleSpec::new(
        Area::new::<square_meter>(0.1),
        Area::new::<square_meter>(0.5),
        Length::new::<meter>(1.0),
    )
    .unwrap()
}
