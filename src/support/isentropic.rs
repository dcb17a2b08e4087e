//! One-dimensional isentropic flow of a calorically perfect gas.
//!
//! This module is the gas-dynamics engine behind the nozzle and film cooling
//! models:
//!
//! - [`GasProperties`]: specific-heat ratio `γ` and gas constant `R`, plus
//!   canonical gases ([`Air`], [`Helium`], [`Neon`]), selectable at runtime
//!   through [`GasSpecies`].
//! - Stagnation-to-static relations as pure functions of Mach number:
//!   [`temperature_ratio`], [`pressure_ratio`], [`density_ratio`], and the
//!   area-Mach relation [`area_mach_ratio`].
//! - [`Stagnation`] and [`FlowState`]: a static state derived entirely from
//!   stagnation conditions and a Mach number.
//! - [`area_mach::solve`]: inversion of `A/A*` on the subsonic or supersonic
//!   branch.
//!
//! All functions are pure. Nothing here holds state across calls, so any of
//! them can be evaluated concurrently by the caller.
//!
//! # Example
//!
//! ```
//! use nozzle_models::support::isentropic::{
//!     Branch, GasProperties, SolverConfig, area_mach, area_mach_ratio,
//! };
//!
//! let air = GasProperties::air();
//! let config = SolverConfig::default();
//!
//! let subsonic = area_mach::solve(air.gamma(), 2.0, Branch::Subsonic, &config).unwrap();
//! let supersonic = area_mach::solve(air.gamma(), 2.0, Branch::Supersonic, &config).unwrap();
//!
//! assert!((subsonic - 0.306).abs() < 1e-3);
//! assert!((supersonic - 2.197).abs() < 1e-3);
//! assert!((area_mach_ratio(air.gamma(), supersonic).unwrap() - 2.0).abs() < 1e-6);
//! ```

mod error;
mod gas;
mod relations;
mod state;

pub mod area_mach;

pub use area_mach::{Branch, SolverConfig};
pub use error::FlowError;
pub use gas::{Air, CanonicalGas, GasProperties, GasSpecies, Helium, Neon, TransportProperties};
pub use relations::{area_mach_ratio, density_ratio, pressure_ratio, temperature_ratio};
pub use state::{FlowState, Stagnation};
