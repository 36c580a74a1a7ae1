use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Wind speed and conductor current use this constraint: still air and an
/// unloaded line are valid, reversed magnitudes are not.
///
/// # Examples
///
/// ```
/// use twine_ampacity::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// let calm = NonNegative::new(Velocity::new::<meter_per_second>(0.0)).unwrap();
/// assert_eq!(calm.into_inner().get::<meter_per_second>(), 0.0);
///
/// let breeze = Constrained::<_, NonNegative>::new(0.61).unwrap();
/// assert_eq!(breeze.into_inner(), 0.61);
///
/// assert!(NonNegative::new(-0.5).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
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

/// Adds two `Constrained<T, NonNegative>` values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        electric_current::ampere,
        f64::{ElectricCurrent, Velocity},
        velocity::meter_per_second,
    };

    #[test]
    fn wind_speeds() {
        assert!(NonNegative::new(Velocity::new::<meter_per_second>(0.61)).is_ok());
        assert!(NonNegative::new(Velocity::new::<meter_per_second>(0.0)).is_ok());
        assert!(matches!(
            NonNegative::new(Velocity::new::<meter_per_second>(-1.0)),
            Err(ConstraintError::Negative)
        ));
    }

    #[test]
    fn currents_sum() {
        let a = NonNegative::new(ElectricCurrent::new::<ampere>(600.0)).unwrap();
        let b = NonNegative::new(ElectricCurrent::new::<ampere>(425.0)).unwrap();
        let total: Constrained<_, NonNegative> = [a, b, NonNegative::zero()].into_iter().sum();
        assert_eq!(total.into_inner().get::<ampere>(), 1025.0);
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }
}
