//! Nozzle contour models.
//!
//! [`NozzleContour`] is a [`twine_core::Model`] that turns a [`NozzleSpec`]
//! into a sampled [`Contour`] for a fixed shape, flow, and sample count.
//! The computation lives in the internal `core` module, whose types and
//! functions are re-exported here for direct use.
//!
//! ```
//! use nozzle_models::{
//!     models::nozzle::{FlowConditions, NozzleContour, NozzleShape, NozzleSpec},
//!     support::isentropic::{GasProperties, Stagnation},
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Length, Pressure, ThermodynamicTemperature},
//!     length::meter,
//!     pressure::megapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let flow = FlowConditions {
//!     gas: GasProperties::air(),
//!     stagnation: Stagnation::new(
//!         ThermodynamicTemperature::new::<kelvin>(3000.0),
//!         Pressure::new::<megapascal>(2.0),
//!     )?,
//! };
//! let model = NozzleContour::new(NozzleShape::default(), flow, 50);
//!
//! let spec = NozzleSpec::new(
//!     Area::new::<square_meter>(0.1),
//!     Area::new::<square_meter>(0.5),
//!     Length::new::<meter>(1.0),
//! )?;
//! let contour = model.call(&spec)?;
//!
//! assert_eq!(contour.len(), 50);
//! assert_eq!(contour.throat().map(|p| p.mach()), Some(1.0));
//! # Ok::<(), nozzle_models::support::isentropic::FlowError>(())
//! ```

mod core;

pub use self::core::{
    Bell, Contour, ContourConfig, ContourPoint, ContourShape, ConvergentDivergent, Elliptic,
    Expansion, FlowConditions, FlowRegime, NozzleShape, NozzleSpec, Performance, PerformanceConfig,
    RegimeConfig, WallSection, choked_mass_flow, equivalent_radius, evaluate_performance, generate,
    ideal_expansion_ratio,
};

use twine_core::Model;

use crate::support::isentropic::FlowError;

/// Generates contours for nozzle specs with a fixed shape and flow.
#[derive(Debug, Clone, PartialEq)]
pub struct NozzleContour<Shape = NozzleShape> {
    pub shape: Shape,
    pub flow: FlowConditions,
    pub samples: usize,
    pub config: ContourConfig,
}

impl<Shape: ContourShape> NozzleContour<Shape> {
    /// Creates a contour model with the default configuration.
    pub fn new(shape: Shape, flow: FlowConditions, samples: usize) -> Self {
        Self {
            shape,
            flow,
            samples,
            config: ContourConfig::default(),
        }
    }

    /// Replaces the contour configuration.
    #[must_use]
    pub fn with_config(self, config: ContourConfig) -> Self {
        Self { config, ..self }
    }
}

impl<Shape: ContourShape> Model for NozzleContour<Shape> {
    type Input = NozzleSpec;
    type Output = Contour;
    type Error = FlowError;

    fn call(&self, spec: &Self::Input) -> Result<Self::Output, Self::Error> {
        generate(&self.shape, spec, self.samples, &self.flow, &self.config)
    }
}
