//! The exponent representation interface.
//!
//! Dimension exponents are generic over a small numeric interface so the same
//! algebra works with integer exponents, bounded-denominator rationals
//! ([`FixedRational`](crate::FixedRational), the default), or general
//! rationals ([`Rational32`]). The interface is deliberately narrow: add,
//! subtract, negate, exact scaling, zero test, equality, and a
//! rationalization protocol for non-integer power requests.

use core::fmt::{Debug, Display};
use core::ops::{Add, Neg, Sub};

use num_rational::Rational32;
use num_traits::{CheckedMul, ToPrimitive, Zero};

use crate::error::{QuantityError, Result};

/// Numeric interface required of a dimension-exponent representation.
///
/// Implementations must be exact: arithmetic either produces the
/// mathematically correct result or (for [`checked_mul`](Exponent::checked_mul)
/// and [`rationalize`](Exponent::rationalize)) refuses. No implementation may
/// round silently.
///
/// ```rust
/// use dynquant_core::{Exponent, FixedRational};
///
/// let half = FixedRational::rationalize(0.5).unwrap();
/// assert_eq!(half + half, FixedRational::from_int(1));
/// ```
pub trait Exponent:
    Copy
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
{
    /// Short name of the representation, used in diagnostics.
    const REPR: &'static str;

    /// Human-readable description of what the representation can hold.
    const LIMITS: &'static str;

    /// The additive identity.
    fn zero() -> Self;

    /// Converts a small integer exponent.
    fn from_int(n: i32) -> Self;

    /// Whether this exponent is zero.
    fn is_zero(&self) -> bool;

    /// The exponent as an integer, if it is integral.
    fn as_int(&self) -> Option<i32>;

    /// Exact product, or `None` when the result is not representable.
    fn checked_mul(self, other: Self) -> Option<Self>;

    /// Exact scaling by an integer factor, or `None` when the result is not
    /// representable.
    fn checked_scale(self, n: i32) -> Option<Self>;

    /// The exponent as a floating-point value.
    fn to_f64(self) -> f64;

    /// Converts an arbitrary real exponent into this representation.
    ///
    /// Succeeds iff the representation can hold `x` exactly; otherwise fails
    /// with [`QuantityError::RationalizeError`] reporting the requested
    /// exponent and the representation's limits.
    fn rationalize(x: f64) -> Result<Self>;
}

/// Builds the rationalization failure for representation `R`.
pub(crate) fn rationalize_error<R: Exponent>(requested: f64) -> QuantityError {
    QuantityError::RationalizeError {
        requested,
        representation: R::REPR,
        limits: R::LIMITS,
    }
}

impl Exponent for i32 {
    const REPR: &'static str = "i32";
    const LIMITS: &'static str = "integer exponents only";

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn from_int(n: i32) -> Self {
        n
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0
    }

    #[inline]
    fn as_int(&self) -> Option<i32> {
        Some(*self)
    }

    #[inline]
    fn checked_mul(self, other: Self) -> Option<Self> {
        i32::checked_mul(self, other)
    }

    #[inline]
    fn checked_scale(self, n: i32) -> Option<Self> {
        i32::checked_mul(self, n)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn rationalize(x: f64) -> Result<Self> {
        if x.is_finite()
            && x == x.trunc()
            && x >= f64::from(i32::MIN)
            && x <= f64::from(i32::MAX)
        {
            Ok(x as i32)
        } else {
            Err(rationalize_error::<Self>(x))
        }
    }
}

impl Exponent for Rational32 {
    const REPR: &'static str = "Rational32";
    const LIMITS: &'static str = "ratios of 32-bit integers";

    #[inline]
    fn zero() -> Self {
        Zero::zero()
    }

    #[inline]
    fn from_int(n: i32) -> Self {
        Rational32::from_integer(n)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    #[inline]
    fn as_int(&self) -> Option<i32> {
        if *self.denom() == 1 {
            Some(*self.numer())
        } else {
            None
        }
    }

    #[inline]
    fn checked_mul(self, other: Self) -> Option<Self> {
        CheckedMul::checked_mul(&self, &other)
    }

    #[inline]
    fn checked_scale(self, n: i32) -> Option<Self> {
        CheckedMul::checked_mul(&self, &Rational32::from_integer(n))
    }

    #[inline]
    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn rationalize(x: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(rationalize_error::<Self>(x));
        }
        // Continued-fraction approximation, then an exactness check: the
        // candidate is accepted only if it converts back to the requested
        // float bit-for-bit.
        match Rational32::approximate_float(x) {
            Some(r) if ToPrimitive::to_f64(&r) == Some(x) => Ok(r),
            _ => Err(rationalize_error::<Self>(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i32_rationalize_integral() {
        assert_eq!(i32::rationalize(3.0).unwrap(), 3);
        assert_eq!(i32::rationalize(-2.0).unwrap(), -2);
        assert_eq!(i32::rationalize(0.0).unwrap(), 0);
    }

    #[test]
    fn i32_rationalize_rejects_fractions() {
        let err = i32::rationalize(0.5).unwrap_err();
        match err {
            QuantityError::RationalizeError {
                requested,
                representation,
                ..
            } => {
                assert_eq!(requested, 0.5);
                assert_eq!(representation, "i32");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn i32_rationalize_rejects_non_finite() {
        assert!(i32::rationalize(f64::NAN).is_err());
        assert!(i32::rationalize(f64::INFINITY).is_err());
    }

    #[test]
    fn rational32_rationalize_simple_fractions() {
        assert_eq!(
            Rational32::rationalize(0.5).unwrap(),
            Rational32::new(1, 2)
        );
        assert_eq!(
            Rational32::rationalize(1.0 / 3.0).unwrap(),
            Rational32::new(1, 3)
        );
        assert_eq!(
            Rational32::rationalize(-0.75).unwrap(),
            Rational32::new(-3, 4)
        );
    }

    #[test]
    fn rational32_rationalize_round_trips_exactly() {
        // Whatever is accepted must reproduce the requested float exactly.
        for x in [0.5, 1.0 / 3.0, -0.75, 2.25, 1e6] {
            let r = Rational32::rationalize(x).unwrap();
            assert_eq!(Exponent::to_f64(r), x);
        }
    }

    #[test]
    fn rational32_rationalize_rejects_unrepresentable() {
        // Out of numerator range for 32-bit rationals.
        assert!(Rational32::rationalize(3.0e9).is_err());
        assert!(Rational32::rationalize(f64::NAN).is_err());
        assert!(Rational32::rationalize(f64::INFINITY).is_err());
    }

    #[test]
    fn rational32_as_int() {
        assert_eq!(Rational32::from_integer(4).as_int(), Some(4));
        assert_eq!(Rational32::new(1, 2).as_int(), None);
    }

    #[test]
    fn checked_mul_overflow_refused() {
        assert_eq!(i32::MAX.checked_mul(2), None);
        assert_eq!(3_i32.checked_mul(4), Some(12));
    }
}
