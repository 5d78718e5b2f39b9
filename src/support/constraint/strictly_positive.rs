use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult, check_finite};

/// Marker for finite values greater than zero.
///
/// # Examples
///
/// ```
/// use hvac_sizing::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(10.0).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite or `NaN`.
    pub fn new<T: Float>(value: T) -> ConstraintResult<Constrained<T, StrictlyPositive>> {
        Constrained::new(value)
    }
}

impl<T: Float> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        check_finite(*value)?;
        if *value == T::zero() {
            Err(ConstraintError::Zero)
        } else if *value < T::zero() {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        let x = StrictlyPositive::new(3.5).unwrap();
        assert_eq!(x.as_ref(), &3.5);
    }

    #[test]
    fn classifies_failures() {
        assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(StrictlyPositive::new(-0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(StrictlyPositive::new(-2.0).unwrap_err(), ConstraintError::Negative);
        assert_eq!(
            StrictlyPositive::new(f64::INFINITY).unwrap_err(),
            ConstraintError::NotFinite
        );
    }
}
