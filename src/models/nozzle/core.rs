//! Quasi-one-dimensional nozzle geometry and flow.
//!
//! A [`NozzleSpec`] fixes the throat, exit, and inlet areas along with the
//! length. A [`ContourShape`] decides how the wall rises from the throat to
//! the exit, and [`generate`] samples the pair into a [`Contour`] by inverting
//! the area-Mach relation at every station.

mod contour;
mod generate;
mod performance;
mod shape;
mod spec;

#[cfg(test)]
pub(crate) mod test_support;

pub use contour::{
    Contour, ContourConfig, ContourPoint, FlowConditions, FlowRegime, RegimeConfig, WallSection,
};
pub use generate::generate;
pub use performance::{
    Expansion, Performance, PerformanceConfig, choked_mass_flow, evaluate_performance,
    ideal_expansion_ratio,
};
pub use shape::{Bell, ContourShape, ConvergentDivergent, Elliptic, NozzleShape};
pub use spec::{NozzleSpec, equivalent_radius};
