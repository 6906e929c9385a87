use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is neither NaN nor infinite.
///
/// Use this marker with [`Constrained`] for signed quantities that may take
/// any real value, such as an initial velocity.
///
/// # Examples
///
/// ```
/// use freefall_core::constraint::Finite;
///
/// let v = Finite::new(-4.5).unwrap();
/// assert_eq!(v.into_inner(), -4.5);
///
/// assert!(Finite::new(f64::INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Finite;

impl Finite {
    /// Constructs a finite [`Constrained`] value.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotFinite`] for NaN or an infinity.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ConstraintError::NotFinite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_finite_sign() {
        assert!(Finite::new(3.0).is_ok());
        assert!(Finite::new(0.0).is_ok());
        assert!(Finite::new(-3.0).is_ok());
        assert!(Finite::new(f64::MAX).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotFinite));
        assert_eq!(
            Finite::new(f64::NEG_INFINITY),
            Err(ConstraintError::NotFinite)
        );
    }
}
