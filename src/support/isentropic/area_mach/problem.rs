//! Problem formulation for area-Mach inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::support::isentropic::{FlowError, area_mach_ratio};

/// Evaluates the area-Mach relation for a fixed `γ`.
///
/// Input is the Mach number; output is `A/A*`.
pub(super) struct AreaRatioModel {
    gamma: f64,
}

impl AreaRatioModel {
    pub(super) fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl Model for AreaRatioModel {
    type Input = f64;
    type Output = f64;
    type Error = FlowError;

    fn call(&self, mach: &Self::Input) -> Result<Self::Output, Self::Error> {
        area_mach_ratio(self.gamma, *mach)
    }
}

/// Residual `A/A*(M) / target − 1`.
///
/// The relative form keeps the tolerance meaningful for both area ratios
/// near one and very large expansion ratios.
pub(super) struct AreaRatioProblem {
    target: f64,
}

impl AreaRatioProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for AreaRatioProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output / self.target - 1.0])
    }
}
