//! The default dimension-exponent representation.

use core::fmt;
use core::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exponent::{rationalize_error, Exponent};

/// A rational number with a fixed denominator of 25 200.
///
/// `FixedRational` stores only an `i32` numerator; the denominator is the
/// compile-time constant `25 200 = 2⁴ · 3² · 5² · 7`, chosen so that halves,
/// thirds, quarters, fifths, sixths, sevenths and their products are all
/// representable. This covers every exponent that arises from roots and
/// small rational powers of physical dimensions while keeping the exponent a
/// single machine word.
///
/// Addition and subtraction are always exact. Multiplication is exact or
/// refused ([`Exponent::checked_mul`]); there is no silent rounding anywhere.
///
/// ```rust
/// use dynquant_core::{Exponent, FixedRational};
///
/// let half = FixedRational::rationalize(0.5).unwrap();
/// let third = FixedRational::rationalize(1.0 / 3.0).unwrap();
/// assert_eq!((half + third).to_f64(), 5.0 / 6.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedRational(i32);

impl FixedRational {
    /// The fixed denominator shared by every `FixedRational`.
    pub const DENOM: i32 = 25_200;

    /// Builds from a raw numerator over [`Self::DENOM`].
    #[inline]
    pub const fn from_raw(numerator: i32) -> Self {
        Self(numerator)
    }

    /// The raw numerator over [`Self::DENOM`].
    #[inline]
    pub const fn numerator(self) -> i32 {
        self.0
    }
}

impl From<i32> for FixedRational {
    #[inline]
    fn from(n: i32) -> Self {
        Self::from_int(n)
    }
}

/// Widening into a general rational; always exact.
impl From<FixedRational> for num_rational::Rational32 {
    #[inline]
    fn from(x: FixedRational) -> Self {
        num_rational::Rational32::new(x.0, FixedRational::DENOM)
    }
}

impl Add for FixedRational {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for FixedRational {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for FixedRational {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Exponent for FixedRational {
    const REPR: &'static str = "FixedRational";
    const LIMITS: &'static str = "rationals with denominator dividing 25200";

    #[inline]
    fn zero() -> Self {
        Self(0)
    }

    #[inline]
    fn from_int(n: i32) -> Self {
        Self(n * Self::DENOM)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn as_int(&self) -> Option<i32> {
        if self.0 % Self::DENOM == 0 {
            Some(self.0 / Self::DENOM)
        } else {
            None
        }
    }

    fn checked_mul(self, other: Self) -> Option<Self> {
        // (a/D) * (b/D) = (a*b/D) / D; exact iff D divides a*b.
        let wide = i64::from(self.0) * i64::from(other.0);
        if wide % i64::from(Self::DENOM) != 0 {
            return None;
        }
        i32::try_from(wide / i64::from(Self::DENOM)).ok().map(Self)
    }

    #[inline]
    fn checked_scale(self, n: i32) -> Option<Self> {
        // The denominator is untouched, so only the numerator can overflow.
        let wide = i64::from(self.0) * i64::from(n);
        i32::try_from(wide).ok().map(Self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::DENOM)
    }

    fn rationalize(x: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(rationalize_error::<Self>(x));
        }
        let scaled = x * f64::from(Self::DENOM);
        let rounded = scaled.round();
        if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
            return Err(rationalize_error::<Self>(x));
        }
        let numerator = rounded as i32;
        // Exactness check: accept only if the candidate converts back to the
        // requested float bit-for-bit.
        if f64::from(numerator) / f64::from(Self::DENOM) == x {
            Ok(Self(numerator))
        } else {
            Err(rationalize_error::<Self>(x))
        }
    }
}

impl fmt::Display for FixedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.as_int() {
            return write!(f, "{n}");
        }
        let g = gcd(self.0.unsigned_abs(), Self::DENOM as u32) as i32;
        write!(f, "{}/{}", self.0 / g, Self::DENOM / g)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}
