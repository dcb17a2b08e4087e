//! Shared fixtures for film cooling tests.

use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length, MassRate, Pressure, ThermodynamicTemperature},
    length::meter,
    mass_rate::kilogram_per_second,
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::nozzle::{Contour, ContourConfig, FlowConditions, NozzleShape, NozzleSpec, generate},
    support::isentropic::{FlowState, GasProperties, GasSpecies, Stagnation},
};

use super::{Coolant, InjectionSlot};

/// Air nozzle with a 3000 K, 2 MPa chamber and a 5:1 cone.
pub(crate) fn contour() -> Contour {
    let spec = NozzleSpec::new(
        Area::new::<square_meter>(0.1),
        Area::new::<square_meter>(0.5),
        Length::new::<meter>(1.0),
    )
    .unwrap();
    let flow = FlowConditions {
        gas: GasProperties::air(),
        stagnation: Stagnation::new(
            ThermodynamicTemperature::new::<kelvin>(3000.0),
            Pressure::new::<megapascal>(2.0),
        )
        .unwrap(),
    };

    generate(
        &NozzleShape::default(),
        &spec,
        50,
        &flow,
        &ContourConfig::default(),
    )
    .unwrap()
}

/// Helium at 300 K, 0.5 kg/s.
pub(crate) fn helium() -> Coolant {
    Coolant {
        gas: GasSpecies::Helium,
        mass_flow: MassRate::new::<kilogram_per_second>(0.5),
        stagnation_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
    }
}

/// A 2 mm by 0.5 m slot at the throat, inclined 30° to the wall.
pub(crate) fn throat_slot(contour: &Contour) -> (InjectionSlot, FlowState) {
    let throat = contour.throat().unwrap();
    let slot = InjectionSlot {
        position: throat.position,
        height: Length::new::<meter>(0.002),
        width: Length::new::<meter>(0.5),
        angle: Angle::new::<degree>(30.0),
    };
    (slot, throat.state)
}
