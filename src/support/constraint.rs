//! Construction-time numeric invariants.
//!
//! Nozzle geometry and flow inputs carry simple sign and range requirements:
//! areas and lengths are strictly positive, Mach numbers are non-negative,
//! and film cooling effectiveness lies in the closed unit interval.
//! [`Constrained<T, C>`] checks such a requirement once, at construction,
//! so downstream code can rely on it without re-validating.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonNegative`]: Zero or greater
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//!
//! # Example
//!
//! ```
//! use nozzle_models::support::constraint::{ConstraintError, StrictlyPositive};
//! use uom::si::{area::square_meter, f64::Area};
//!
//! let throat = StrictlyPositive::new(Area::new::<square_meter>(0.1)).unwrap();
//! assert_eq!(throat.into_inner().get::<square_meter>(), 0.1);
//!
//! let err = StrictlyPositive::new(Area::new::<square_meter>(-0.1)).unwrap_err();
//! assert_eq!(err, ConstraintError::Negative);
//! ```

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{One, Zero};
use thiserror::Error;

/// A numeric requirement checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker type enforcing that a value is greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing the closed unit interval `0 ≤ x ≤ 1`.
///
/// Film cooling effectiveness is the main user of this constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a [`Constrained<T, UnitInterval>`] if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, above one, or `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        NonNegative::check(value)?;
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
            Some(Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn strictly_positive_rejects_zero_negative_and_nan() {
        assert!(StrictlyPositive::new(1.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn works_with_uom_quantities() {
        let length = StrictlyPositive::new(Length::new::<meter>(1.5)).unwrap();
        assert_eq!(length.as_ref().get::<meter>(), 1.5);

        assert!(NonNegative::new(Length::new::<meter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<meter>(-1e-9)).is_err());
    }

    #[test]
    fn unit_interval_bounds_are_inclusive() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert_eq!(
            UnitInterval::new(1.0 + 1e-12),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(UnitInterval::new(-0.1), Err(ConstraintError::Negative));
    }
}
