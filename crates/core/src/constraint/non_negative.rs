use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is finite and non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use freefall_core::constraint::NonNegative;
///
/// let h = NonNegative::new(0.0).unwrap();
/// assert_eq!(h.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a non-negative [`Constrained`] value.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotFinite`] for NaN or an infinity and
    /// [`ConstraintError::Negative`] for values below zero.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: Float> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if !value.is_finite() {
            Err(ConstraintError::NotFinite)
        } else if *value < T::zero() {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}
