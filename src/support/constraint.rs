//! Numeric constraints checked once, at construction.
//!
//! Room dimensions, envelope areas and airflow overrides arrive as raw
//! floats. The normalizer wraps each in a [`Constrained`] value so the load
//! stages can rely on the sign and finiteness of every quantity they read.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: finite and zero or greater
//! - [`StrictlyPositive`]: finite and greater than zero
//!
//! Both reject `NaN` and infinities, which a form field or a hand-edited
//! JSON file can easily produce.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use num_traits::Float;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced when a [`Constrained`] value is built.
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
    #[error("value must be a finite number")]
    NotFinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use hvac_sizing::support::constraint::{Constrained, StrictlyPositive};
///
/// let length = Constrained::<f64, StrictlyPositive>::new(15.0).unwrap();
/// assert_eq!(length.into_inner(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
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

    /// Returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Shared finiteness check for the float constraints.
fn check_finite<T: Float>(value: T) -> ConstraintResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConstraintError::NotFinite)
    }
}
