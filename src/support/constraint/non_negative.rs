use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult, check_finite};

/// Marker for finite values that are zero or greater.
///
/// # Examples
///
/// ```
/// use hvac_sizing::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-0.5).is_err());
/// assert!(NonNegative::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, infinite or `NaN`.
    pub fn new<T: Float>(value: T) -> ConstraintResult<Constrained<T, NonNegative>> {
        Constrained::new(value)
    }
}

impl<T: Float> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        check_finite(*value)?;
        if *value < T::zero() {
            return Err(ConstraintError::Negative);
        }
        Ok(())
    }
}
