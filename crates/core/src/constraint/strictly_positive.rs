use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is finite and strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use freefall_core::constraint::StrictlyPositive;
///
/// let dt = StrictlyPositive::new(0.1).unwrap();
/// assert_eq!(dt.into_inner(), 0.1);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a strictly positive [`Constrained`] value.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotFinite`] for NaN or an infinity,
    /// [`ConstraintError::Zero`] for zero, and [`ConstraintError::Negative`]
    /// for values below zero.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: Float> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if !value.is_finite() {
            Err(ConstraintError::NotFinite)
        } else if *value < T::zero() {
            Err(ConstraintError::Negative)
        } else if value.is_zero() {
            Err(ConstraintError::Zero)
        } else {
            Ok(())
        }
    }
}
