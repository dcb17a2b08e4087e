use twine_solvers::equation::bisection;

use crate::support::isentropic::FlowError;

/// Solver configuration for area-Mach inversion.
///
/// Passed explicitly to every solve; there is no process-wide default state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Relative tolerance on the area ratio residual, `|A/A*(M) / r − 1|`.
    pub tolerance: f64,

    /// Maximum bisection iteration count.
    pub max_iterations: usize,

    /// Growth factor applied to the supersonic upper bound until it brackets the root.
    pub branch_expansion_factor: f64,

    /// Initial lower Mach bound of the subsonic bracket.
    pub subsonic_floor: f64,

    /// Initial upper Mach bound of the supersonic bracket.
    pub initial_supersonic_bound: f64,

    /// Maximum number of bracket expansions on either branch.
    pub max_expansions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
            branch_expansion_factor: 2.0,
            subsonic_floor: 1e-6,
            initial_supersonic_bound: 2.0,
            max_expansions: 64,
        }
    }
}

impl SolverConfig {
    /// Checks that this configuration can drive a solve.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] naming the first offending option.
    pub fn validate(&self) -> Result<(), FlowError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(FlowError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(FlowError::invalid_input("max_iterations must be at least 1"));
        }
        if !(self.branch_expansion_factor > 1.0 && self.branch_expansion_factor.is_finite()) {
            return Err(FlowError::invalid_input(format!(
                "branch_expansion_factor must exceed 1, got {}",
                self.branch_expansion_factor
            )));
        }
        if !(self.subsonic_floor > 0.0 && self.subsonic_floor < 1.0) {
            return Err(FlowError::invalid_input(format!(
                "subsonic_floor must lie in (0, 1), got {}",
                self.subsonic_floor
            )));
        }
        if !(self.initial_supersonic_bound > 1.0 && self.initial_supersonic_bound.is_finite()) {
            return Err(FlowError::invalid_input(format!(
                "initial_supersonic_bound must exceed 1, got {}",
                self.initial_supersonic_bound
            )));
        }
        Ok(())
    }

    /// Converts this configuration into a bisection solver configuration.
    ///
    /// Convergence is judged on the residual; the relative Mach tolerance only
    /// stops the search once the bracket has collapsed to machine precision,
    /// which keeps tiny subsonic Mach numbers resolvable.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iterations,
            x_abs_tol: 0.0,
            x_rel_tol: 1e-15,
            residual_tol: self.tolerance,
        }
    }
}
