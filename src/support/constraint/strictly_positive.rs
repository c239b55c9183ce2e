use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for rated capacities, quantities and simultaneity percentages, where a
/// zero would make a ratio meaningless.
///
/// # Examples
///
/// ```
/// use hvac_sizing::support::constraint::{Constrained, StrictlyPositive};
///
/// let nominal = Constrained::<_, StrictlyPositive>::new(76_432_u32).unwrap();
/// assert_eq!(nominal.into_inner(), 76_432);
///
/// let percent = StrictlyPositive::new(110.0).unwrap();
/// assert_eq!(percent.into_inner(), 110.0);
///
/// assert!(StrictlyPositive::new(0_u32).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities() {
        let x = Constrained::<u32, StrictlyPositive>::new(9_554).unwrap();
        assert_eq!(x.into_inner(), 9_554);

        let y = StrictlyPositive::new(25_u32).unwrap();
        assert_eq!(y.as_ref(), &25);

        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
    }

    #[test]
    fn percentages() {
        assert!(StrictlyPositive::new(145.0).is_ok());
        assert!(StrictlyPositive::new(0.5).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-110.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
