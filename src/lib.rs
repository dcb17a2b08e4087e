//! # Nozzle Models
//!
//! Quasi-one-dimensional isentropic nozzle models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for nozzle contours
//!   and film cooling, along with the functions behind them.
//! - [`support`]: The gas-dynamics engine (isentropic relations and the
//!   area-Mach solver) and supporting utilities.
//!
//! ## Scope
//!
//! Everything here is a pure function of its inputs: a calorically perfect
//! gas in steady, adiabatic, one-dimensional flow. Multi-dimensional effects,
//! shocks inside the nozzle, and real-gas chemistry are out of scope and
//! belong to tools that consume the contours produced here.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
