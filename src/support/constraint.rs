//! Numeric constraints checked once, at construction time.
//!
//! Catalog capacities, line-item quantities, simultaneity percentages and room
//! areas all carry a sign invariant. Rather than re-checking those values at
//! every use site, they are wrapped in [`Constrained<T, C>`] when they enter the
//! crate, and the wrapper is unwrapped with [`Constrained::into_inner`] once the
//! invariant is no longer interesting.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero, with an associated `new()`
//!   constructor (e.g., `StrictlyPositive::new(76_432)`).
//!
//! # Extending
//!
//! Other invariants can be expressed by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
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
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use hvac_sizing::support::constraint::{Constrained, StrictlyPositive};
///
/// let quantity = Constrained::<u32, StrictlyPositive>::new(3).unwrap();
/// assert_eq!(quantity.into_inner(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Constructs a constrained value without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the value satisfies the constraint.
    #[must_use]
    pub(crate) const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
