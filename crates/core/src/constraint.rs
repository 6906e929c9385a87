//! Numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] wraps a value that has already passed the check of
//! the marker type `C`, so downstream code can rely on the invariant without
//! re-validating it.
//!
//! # Provided Constraints
//!
//! - [`Finite`]: Neither NaN nor infinite
//! - [`NonNegative`]: Finite and zero or greater
//! - [`StrictlyPositive`]: Finite and greater than zero
//!
//! Each marker also provides an associated `new()` constructor for
//! convenience, so `StrictlyPositive::new(9.81)` reads the same as
//! `Constrained::<_, StrictlyPositive>::new(9.81)`.

mod finite;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::Finite;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric rule a marker type enforces.
pub trait Constraint<T> {
    /// Accepts `value` or names the rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was refused by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is negative")]
    Negative,
    #[error("value is zero")]
    Zero,
    #[error("value is NaN or infinite")]
    NotFinite,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use freefall_core::constraint::{Constrained, StrictlyPositive};
///
/// let g = Constrained::<_, StrictlyPositive>::new(9.81).unwrap();
/// assert_eq!(g.into_inner(), 9.81);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Fails with the violation reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self::new_unchecked(value))
    }

    /// Wraps a value the caller has already proven satisfies `C`.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Every non-negative value is finite.
impl<T> From<Constrained<T, NonNegative>> for Constrained<T, Finite>
where
    NonNegative: Constraint<T>,
    Finite: Constraint<T>,
{
    fn from(value: Constrained<T, NonNegative>) -> Self {
        Self::new_unchecked(value.into_inner())
    }
}

