//! Slot film cooling correlations.

mod analyze;
mod config;
mod correlation;
mod injection;
mod results;

#[cfg(test)]
pub(crate) mod test_support;

pub use analyze::analyze;
pub use config::FilmCoolingConfig;
pub use injection::{Coolant, InjectionRatios, InjectionSlot, injection_ratios};
pub use results::CoolingResult;
