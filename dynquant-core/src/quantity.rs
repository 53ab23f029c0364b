//! The quantity type: a numeric value paired with its dimension.

use core::cmp::Ordering;
use core::fmt;
use core::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use num_traits::Float;

use crate::dimensions::Dimensions;
use crate::error::{QuantityError, Result};
use crate::exponent::Exponent;
use crate::fixed_rational::FixedRational;

/// Numeric interface required of a quantity's value type.
///
/// This is a blanket alias over [`num_traits::Float`]; `f32` and `f64`
/// satisfy it out of the box.
pub trait Scalar: Float + Debug + Display + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + 'static {}

/// Converts an `f64` into any [`Scalar`].
///
/// Every `Float` type can represent an `f64`, possibly with rounding; a
/// failed cast degrades to NaN rather than panicking.
#[inline]
pub(crate) fn from_f64<T: Scalar>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// A numeric value paired with its physical dimension.
///
/// `Quantity<T, R>` owns a value of type `T` and a [`Dimensions<R>`] by
/// value; the dimension is small and `Copy`, so quantities behave like plain
/// numbers that carry their dimension along. The stored dimension is always
/// the true dimension of the stored value: every arithmetic operation
/// recomputes the result dimension through the dimension algebra and
/// constructs the result through [`Quantity::new`].
///
/// ```rust
/// use dynquant_core::{Dimensions, Quantity};
///
/// let distance: Quantity<f64> = Quantity::new(6.0, Dimensions::length());
/// let time: Quantity<f64> = Quantity::new(2.0, Dimensions::time());
/// let speed = distance / time;
/// assert_eq!(speed.value(), 3.0);
/// assert_eq!(speed.dimensions(), Dimensions::length() / Dimensions::time());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<T: Scalar, R: Exponent = FixedRational> {
    value: T,
    dims: Dimensions<R>,
}

impl<T: Scalar, R: Exponent> Quantity<T, R> {
    /// Creates a quantity from a value and its dimension.
    #[inline]
    pub fn new(value: T, dims: Dimensions<R>) -> Self {
        Self { value, dims }
    }

    /// Creates a dimensionless quantity.
    #[inline]
    pub fn dimensionless(value: T) -> Self {
        Self::new(value, Dimensions::dimensionless())
    }

    /// Creates a quantity with the dimension copied from an existing one.
    #[inline]
    pub fn with_dimensions_of(value: T, other: &Self) -> Self {
        Self::new(value, other.dims)
    }

    /// The raw numeric value, with the dimension discarded.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The dimension of this quantity.
    #[inline]
    pub fn dimensions(&self) -> Dimensions<R> {
        self.dims
    }

    /// Whether this quantity is dimensionless.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_dimensionless()
    }

    /// Compares two quantities of the same dimension.
    ///
    /// Fails with [`QuantityError::DimensionMismatch`] when the dimensions
    /// differ; `Ok(None)` is reserved for NaN values.
    pub fn try_partial_cmp(&self, other: &Self) -> Result<Option<Ordering>> {
        if self.dims != other.dims {
            return Err(QuantityError::DimensionMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(self.value.partial_cmp(&other.value))
    }
}

/// Ordering is defined only within a dimension; quantities of different
/// dimensions are incomparable (`None`).
impl<T: Scalar, R: Exponent> PartialOrd for Quantity<T, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dims != other.dims {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Scalar, R: Exponent> fmt::Display for Quantity<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dims.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.dims)
        }
    }
}

/// Returns the raw numeric value of a quantity, discarding its dimension.
///
/// ```rust
/// use dynquant_core::{ustrip, Dimensions, Quantity};
///
/// let q: Quantity<f64> = Quantity::new(9.81, Dimensions::length() / Dimensions::time().powi(2));
/// assert_eq!(ustrip(q), 9.81);
/// ```
#[inline]
pub fn ustrip<T: Scalar, R: Exponent>(quantity: Quantity<T, R>) -> T {
    quantity.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims;

    fn meters(v: f64) -> Quantity<f64> {
        Quantity::new(v, Dimensions::length())
    }

    #[test]
    fn constructors_and_accessors() {
        let q = meters(5.0);
        assert_eq!(q.value(), 5.0);
        assert_eq!(q.dimensions(), Dimensions::length());
        assert!(!q.is_dimensionless());

        let copy = Quantity::with_dimensions_of(7.5, &q);
        assert_eq!(copy.dimensions(), q.dimensions());
        assert_eq!(copy.value(), 7.5);

        assert!(Quantity::<f64>::dimensionless(1.0).is_dimensionless());
    }

    #[test]
    fn equality_needs_value_and_dimension() {
        assert_eq!(meters(2.0), meters(2.0));
        assert_ne!(meters(2.0), meters(3.0));
        let seconds = Quantity::new(2.0, Dimensions::time());
        assert_ne!(meters(2.0), seconds);
    }

    #[test]
    fn ordering_within_a_dimension() {
        assert!(meters(1.0) < meters(2.0));
        assert_eq!(
            meters(1.0).try_partial_cmp(&meters(2.0)).unwrap(),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn ordering_across_dimensions() {
        let s = Quantity::new(1.0, Dimensions::time());
        assert_eq!(meters(1.0).partial_cmp(&s), None);
        let err = meters(1.0).try_partial_cmp(&s).unwrap_err();
        assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
    }

    #[test]
    fn nan_compares_as_none_not_error() {
        let a = meters(f64::NAN);
        assert_eq!(a.try_partial_cmp(&meters(1.0)).unwrap(), None);
    }

    #[test]
    fn display_renders_value_and_dimension() {
        assert_eq!(meters(3.0).to_string(), "3 m");
        assert_eq!(Quantity::<f64>::dimensionless(3.0).to_string(), "3");
        let v: Quantity<f64> = Quantity::new(2.5, dims!(length: 1, time: -1));
        assert_eq!(v.to_string(), "2.5 m s⁻¹");
    }

    #[test]
    fn ustrip_discards_dimension() {
        assert_eq!(ustrip(meters(4.0)), 4.0);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn quantity_roundtrip() {
            let q = meters(12.5);
            let json = serde_json::to_string(&q).unwrap();
            let back: Quantity<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, q);
        }
    }
}
