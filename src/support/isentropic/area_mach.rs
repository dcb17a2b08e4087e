//! Inversion of the area-Mach relation.
//!
//! `A/A*` is strictly decreasing in `M` on `(0, 1]` and strictly increasing
//! on `[1, ∞)`, so every area ratio `r > 1` has exactly one subsonic and one
//! supersonic solution. [`solve`] finds the one on the requested [`Branch`]
//! by bisection on a verified bracket:
//!
//! - subsonic: `[M_min, 1]`, where `M_min` starts at `subsonic_floor` and
//!   shrinks by `branch_expansion_factor` until `A/A*(M_min)` exceeds the
//!   target.
//! - supersonic: `[1, M_max]`, where `M_max` starts at
//!   `initial_supersonic_bound` and grows by `branch_expansion_factor` until
//!   `A/A*(M_max)` exceeds the target.
//!
//! An estimate that misses the tolerance is never returned; the caller gets
//! [`FlowError::ConvergenceFailure`] with the best residual instead.

mod config;
mod problem;

pub use config::SolverConfig;

use log::trace;
use twine_solvers::equation::bisection;

use super::{FlowError, area_mach_ratio, gas::check_gamma};

use problem::{AreaRatioModel, AreaRatioProblem};

/// Selects which of the two area-Mach solutions to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    /// `M ≤ 1`, upstream of the throat.
    Subsonic,
    /// `M ≥ 1`, downstream of the throat.
    Supersonic,
}

/// Returns the Mach number on `branch` whose isentropic area ratio is `area_ratio`.
///
/// An area ratio of exactly one returns `M = 1` without iterating.
///
/// # Errors
///
/// - [`FlowError::InvalidInput`] if `area_ratio < 1` (or `NaN`), `γ ≤ 1`, or
///   the configuration is invalid.
/// - [`FlowError::ConvergenceFailure`] if the tolerance is not met within
///   `max_iterations`, or the bracket cannot be grown to enclose the root
///   within `max_expansions`.
pub fn solve(
    gamma: f64,
    area_ratio: f64,
    branch: Branch,
    config: &SolverConfig,
) -> Result<f64, FlowError> {
    check_gamma(gamma)?;
    config.validate()?;

    if area_ratio.is_nan() || area_ratio < 1.0 {
        return Err(FlowError::invalid_input(format!(
            "area ratio must be at least 1, got {area_ratio}"
        )));
    }
    if area_ratio == 1.0 {
        return Ok(1.0);
    }

    let bracket = match branch {
        Branch::Subsonic => subsonic_bracket(gamma, area_ratio, config)?,
        Branch::Supersonic => supersonic_bracket(gamma, area_ratio, config)?,
    };

    let model = AreaRatioModel::new(gamma);
    let problem = AreaRatioProblem::new(area_ratio);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // The area ratio is only undefined at M = 0, where it tends to +∞.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged
        || solution.residual.abs() > config.tolerance
    {
        return Err(FlowError::ConvergenceFailure {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    trace!(
        "area ratio {area_ratio} ({branch:?}): M = {} after {} iterations, residual {:e}",
        solution.x,
        solution.iters,
        solution.residual
    );

    Ok(solution.x)
}

fn subsonic_bracket(
    gamma: f64,
    area_ratio: f64,
    config: &SolverConfig,
) -> Result<[f64; 2], FlowError> {
    let mut lower = config.subsonic_floor;
    let mut upper = 1.0;

    for expansion in 0..=config.max_expansions {
        let lower_ratio = area_mach_ratio(gamma, lower)?;
        if lower_ratio >= area_ratio {
            trace!("subsonic bracket [{lower}, {upper}] after {expansion} expansions");
            return Ok([lower, upper]);
        }
        upper = lower;
        lower /= config.branch_expansion_factor;
    }

    let residual = area_mach_ratio(gamma, upper)? / area_ratio - 1.0;
    Err(FlowError::ConvergenceFailure {
        residual,
        iters: config.max_expansions,
    })
}

fn supersonic_bracket(
    gamma: f64,
    area_ratio: f64,
    config: &SolverConfig,
) -> Result<[f64; 2], FlowError> {
    let mut lower = 1.0;
    let mut upper = config.initial_supersonic_bound;

    for expansion in 0..=config.max_expansions {
        let upper_ratio = area_mach_ratio(gamma, upper)?;
        if upper_ratio >= area_ratio {
            trace!("supersonic bracket [{lower}, {upper}] after {expansion} expansions");
            return Ok([lower, upper]);
        }
        lower = upper;
        upper *= config.branch_expansion_factor;
    }

    let residual = area_mach_ratio(gamma, lower)? / area_ratio - 1.0;
    Err(FlowError::ConvergenceFailure {
        residual,
        iters: config.max_expansions,
    })
}
