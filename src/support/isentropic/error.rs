use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::constraint::ConstraintError;

/// Errors that may occur in gas-dynamics, contour, or film cooling calculations.
///
/// Every error is reported to the caller as soon as it is detected.
/// Nothing in this crate retries or substitutes a default value.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A scalar input lies outside its physical domain.
    ///
    /// For example, a negative Mach number, `γ ≤ 1`, or a non-positive area.
    #[error("invalid input: {context}")]
    InvalidInput { context: String },

    /// The evaluation is mathematically undefined at the given input.
    ///
    /// For example, the area-Mach relation at `M = 0`.
    #[error("singular input: {context}")]
    SingularInput { context: String },

    /// A nozzle geometry is degenerate or cannot be sampled.
    #[error("invalid geometry: {context}")]
    InvalidGeometry { context: String },

    /// The area-Mach inversion did not meet its tolerance within the iteration cap.
    #[error("no convergence after {iters} iterations: residual={residual:e}")]
    ConvergenceFailure {
        /// Best relative area-ratio residual reached.
        residual: f64,

        /// Iteration count performed.
        iters: usize,
    },

    /// The bisection root finder rejected its bracket or configuration.
    #[error("bisection solver error")]
    Solver(#[from] bisection::Error),
}

impl FlowError {
    pub(crate) fn invalid_input(context: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_geometry(context: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            context: context.into(),
        }
    }

    /// Maps a constraint violation on the named input into [`FlowError::InvalidInput`].
    pub(crate) fn constraint(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |err| Self::invalid_input(format!("{name}: {err}"))
    }
}
