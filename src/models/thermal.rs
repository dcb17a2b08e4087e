//! Thermal protection models.
//!
//! This module contains models for protecting nozzle walls from the hot main
//! flow, starting with film cooling.

pub mod film_cooling;
