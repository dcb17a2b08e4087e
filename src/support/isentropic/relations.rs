//! Stagnation-to-static isentropic relations.
//!
//! Each relation is a pure function of `γ` and the Mach number `M`:
//!
//! - `T₀/T = 1 + (γ−1)/2 · M²`
//! - `P₀/P = (T₀/T)^(γ/(γ−1))`
//! - `ρ₀/ρ = (T₀/T)^(1/(γ−1))`
//! - `A/A* = (1/M) · [2/(γ+1) · T₀/T]^((γ+1)/(2(γ−1)))`

use crate::support::constraint::{Constraint, NonNegative};

use super::{FlowError, gas::check_gamma};

fn check(gamma: f64, mach: f64) -> Result<(), FlowError> {
    check_gamma(gamma)?;
    NonNegative::check(&mach).map_err(FlowError::constraint("Mach number"))?;
    if mach.is_finite() {
        Ok(())
    } else {
        Err(FlowError::invalid_input("Mach number must be finite"))
    }
}

/// Returns the stagnation-to-static temperature ratio `T₀/T`.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if `M < 0` or `γ ≤ 1`.
pub fn temperature_ratio(gamma: f64, mach: f64) -> Result<f64, FlowError> {
    check(gamma, mach)?;
    Ok(1.0 + 0.5 * (gamma - 1.0) * mach * mach)
}

/// Returns the stagnation-to-static pressure ratio `P₀/P`.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if `M < 0` or `γ ≤ 1`.
pub fn pressure_ratio(gamma: f64, mach: f64) -> Result<f64, FlowError> {
    Ok(temperature_ratio(gamma, mach)?.powf(gamma / (gamma - 1.0)))
}

/// Returns the stagnation-to-static density ratio `ρ₀/ρ`.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if `M < 0` or `γ ≤ 1`.
pub fn density_ratio(gamma: f64, mach: f64) -> Result<f64, FlowError> {
    Ok(temperature_ratio(gamma, mach)?.powf(1.0 / (gamma - 1.0)))
}

/// Returns the isentropic area ratio `A/A*` at Mach number `M`.
///
/// The relation has a minimum of exactly 1 at `M = 1` and diverges as `M → 0`.
///
/// # Errors
///
/// Returns [`FlowError::InvalidInput`] if `M < 0` or `γ ≤ 1`, and
/// [`FlowError::SingularInput`] at `M = 0`.
pub fn area_mach_ratio(gamma: f64, mach: f64) -> Result<f64, FlowError> {
    let t_ratio = temperature_ratio(gamma, mach)?;
    if mach == 0.0 {
        return Err(FlowError::SingularInput {
            context: "area-Mach ratio is unbounded at M = 0".into(),
        });
    }

    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    Ok((2.0 / (gamma + 1.0) * t_ratio).powf(exponent) / mach)
}
