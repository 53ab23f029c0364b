//! Binary operator dispatch and cross-kind promotion.
//!
//! All binary arithmetic funnels through one generic algorithm per operator:
//! both operands are first brought to a common *kind* (value type + exponent
//! type) by [`Promote`], then the operation runs on the promoted pair. The
//! promotion happens exactly once at the start of the operator, never
//! recursively. Same-kind operands go through the identity promotion, which
//! compiles away.

use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_rational::Rational32;

use crate::dimensions::Dimensions;
use crate::error::{QuantityError, Result};
use crate::exponent::Exponent;
use crate::fixed_rational::FixedRational;
use crate::quantity::{Quantity, Scalar};

/// Selects the common kind for a pair of quantity representations.
///
/// A *kind* is the pair of concrete types backing a quantity: the numeric
/// value type and the dimension-exponent type. Combining two quantities of
/// different kinds promotes both to the common kind given by this trait and
/// retries the operation there; `f32` widens to `f64`, `i32` exponents widen
/// to [`FixedRational`], and both widen to [`Rational32`].
///
/// ```rust
/// use dynquant_core::{Dimensions, Quantity};
///
/// let narrow: Quantity<f32, i32> = Quantity::new(2.0, Dimensions::length());
/// let wide: Quantity<f64> = Quantity::new(3.0, Dimensions::time());
/// let product = narrow * wide; // Quantity<f64, FixedRational>
/// assert_eq!(product.value(), 6.0);
/// ```
pub trait Promote<Rhs> {
    /// Common value type.
    type T: Scalar;
    /// Common exponent type.
    type R: Exponent;

    /// Converts the left operand to the common kind.
    fn promote(self) -> Quantity<Self::T, Self::R>;

    /// Converts the right operand to the common kind.
    fn promote_rhs(rhs: Rhs) -> Quantity<Self::T, Self::R>;
}

/// Same-kind operands promote to themselves.
impl<T: Scalar, R: Exponent> Promote<Quantity<T, R>> for Quantity<T, R> {
    type T = T;
    type R = R;

    #[inline]
    fn promote(self) -> Self {
        self
    }

    #[inline]
    fn promote_rhs(rhs: Self) -> Self {
        rhs
    }
}

/// One `Promote` impl per cross-kind pair: `(T1, R1) ⊗ (T2, R2) → (T, R)`.
macro_rules! impl_promote {
    ($t1:ty, $r1:ty, $t2:ty, $r2:ty => $t:ty, $r:ty) => {
        impl Promote<Quantity<$t2, $r2>> for Quantity<$t1, $r1> {
            type T = $t;
            type R = $r;

            #[inline]
            fn promote(self) -> Quantity<$t, $r> {
                Quantity::new(
                    <$t>::from(self.value()),
                    self.dimensions().convert::<$r>(),
                )
            }

            #[inline]
            fn promote_rhs(rhs: Quantity<$t2, $r2>) -> Quantity<$t, $r> {
                Quantity::new(
                    <$t>::from(rhs.value()),
                    rhs.dimensions().convert::<$r>(),
                )
            }
        }
    };
}

// Value types differ, exponent types agree.
impl_promote!(f32, i32, f64, i32 => f64, i32);
impl_promote!(f64, i32, f32, i32 => f64, i32);
impl_promote!(f32, FixedRational, f64, FixedRational => f64, FixedRational);
impl_promote!(f64, FixedRational, f32, FixedRational => f64, FixedRational);
impl_promote!(f32, Rational32, f64, Rational32 => f64, Rational32);
impl_promote!(f64, Rational32, f32, Rational32 => f64, Rational32);

// Exponent types differ, value types agree.
impl_promote!(f32, i32, f32, FixedRational => f32, FixedRational);
impl_promote!(f32, FixedRational, f32, i32 => f32, FixedRational);
impl_promote!(f32, i32, f32, Rational32 => f32, Rational32);
impl_promote!(f32, Rational32, f32, i32 => f32, Rational32);
impl_promote!(f32, FixedRational, f32, Rational32 => f32, Rational32);
impl_promote!(f32, Rational32, f32, FixedRational => f32, Rational32);
impl_promote!(f64, i32, f64, FixedRational => f64, FixedRational);
impl_promote!(f64, FixedRational, f64, i32 => f64, FixedRational);
impl_promote!(f64, i32, f64, Rational32 => f64, Rational32);
impl_promote!(f64, Rational32, f64, i32 => f64, Rational32);
impl_promote!(f64, FixedRational, f64, Rational32 => f64, Rational32);
impl_promote!(f64, Rational32, f64, FixedRational => f64, Rational32);

// Both differ.
impl_promote!(f32, i32, f64, FixedRational => f64, FixedRational);
impl_promote!(f64, FixedRational, f32, i32 => f64, FixedRational);
impl_promote!(f32, FixedRational, f64, i32 => f64, FixedRational);
impl_promote!(f64, i32, f32, FixedRational => f64, FixedRational);
impl_promote!(f32, i32, f64, Rational32 => f64, Rational32);
impl_promote!(f64, Rational32, f32, i32 => f64, Rational32);
impl_promote!(f32, Rational32, f64, i32 => f64, Rational32);
impl_promote!(f64, i32, f32, Rational32 => f64, Rational32);
impl_promote!(f32, FixedRational, f64, Rational32 => f64, Rational32);
impl_promote!(f64, Rational32, f32, FixedRational => f64, Rational32);
impl_promote!(f32, Rational32, f64, FixedRational => f64, Rational32);
impl_promote!(f64, FixedRational, f32, Rational32 => f64, Rational32);

type Promoted<L, Rhs> = Quantity<<L as Promote<Rhs>>::T, <L as Promote<Rhs>>::R>;

// ─────────────────────────────────────────────────────────────────────────────
// Checked arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar, R: Exponent> Quantity<T, R> {
    /// Combines two same-dimension quantities, or fails with the dimensions
    /// of both operands.
    fn checked_combine(self, rhs: Self, f: impl FnOnce(T, T) -> T) -> Result<Self> {
        if self.dimensions() != rhs.dimensions() {
            return Err(QuantityError::DimensionMismatch {
                left: self.to_string(),
                right: rhs.to_string(),
            });
        }
        Ok(Self::new(f(self.value(), rhs.value()), self.dimensions()))
    }

    /// Adds two quantities of equal dimension.
    ///
    /// Fails with [`QuantityError::DimensionMismatch`] when the dimensions
    /// differ. Cross-kind operands are promoted first.
    pub fn try_add<Rhs>(self, rhs: Rhs) -> Result<Promoted<Self, Rhs>>
    where
        Self: Promote<Rhs>,
    {
        let lhs = self.promote();
        let rhs = <Self as Promote<Rhs>>::promote_rhs(rhs);
        lhs.checked_combine(rhs, |a, b| a + b)
    }

    /// Subtracts two quantities of equal dimension.
    ///
    /// Fails with [`QuantityError::DimensionMismatch`] when the dimensions
    /// differ. Cross-kind operands are promoted first.
    pub fn try_sub<Rhs>(self, rhs: Rhs) -> Result<Promoted<Self, Rhs>>
    where
        Self: Promote<Rhs>,
    {
        let lhs = self.promote();
        let rhs = <Self as Promote<Rhs>>::promote_rhs(rhs);
        lhs.checked_combine(rhs, |a, b| a - b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations: quantity ⊗ quantity
// ─────────────────────────────────────────────────────────────────────────────

impl<T1, R1, T2, R2> Mul<Quantity<T2, R2>> for Quantity<T1, R1>
where
    T1: Scalar,
    R1: Exponent,
    T2: Scalar,
    R2: Exponent,
    Quantity<T1, R1>: Promote<Quantity<T2, R2>>,
{
    type Output = Promoted<Self, Quantity<T2, R2>>;

    #[inline]
    fn mul(self, rhs: Quantity<T2, R2>) -> Self::Output {
        let lhs = self.promote();
        let rhs = <Self as Promote<Quantity<T2, R2>>>::promote_rhs(rhs);
        Quantity::new(
            lhs.value() * rhs.value(),
            lhs.dimensions() * rhs.dimensions(),
        )
    }
}

impl<T1, R1, T2, R2> Div<Quantity<T2, R2>> for Quantity<T1, R1>
where
    T1: Scalar,
    R1: Exponent,
    T2: Scalar,
    R2: Exponent,
    Quantity<T1, R1>: Promote<Quantity<T2, R2>>,
{
    type Output = Promoted<Self, Quantity<T2, R2>>;

    #[inline]
    fn div(self, rhs: Quantity<T2, R2>) -> Self::Output {
        let lhs = self.promote();
        let rhs = <Self as Promote<Quantity<T2, R2>>>::promote_rhs(rhs);
        Quantity::new(
            lhs.value() / rhs.value(),
            lhs.dimensions() / rhs.dimensions(),
        )
    }
}

/// Addition of quantities with equal dimensions.
///
/// # Panics
///
/// Panics with the [`QuantityError::DimensionMismatch`] message when the
/// dimensions differ; use [`Quantity::try_add`] for the checked form.
impl<T1, R1, T2, R2> Add<Quantity<T2, R2>> for Quantity<T1, R1>
where
    T1: Scalar,
    R1: Exponent,
    T2: Scalar,
    R2: Exponent,
    Quantity<T1, R1>: Promote<Quantity<T2, R2>>,
{
    type Output = Promoted<Self, Quantity<T2, R2>>;

    fn add(self, rhs: Quantity<T2, R2>) -> Self::Output {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Subtraction of quantities with equal dimensions.
///
/// # Panics
///
/// Panics with the [`QuantityError::DimensionMismatch`] message when the
/// dimensions differ; use [`Quantity::try_sub`] for the checked form.
impl<T1, R1, T2, R2> Sub<Quantity<T2, R2>> for Quantity<T1, R1>
where
    T1: Scalar,
    R1: Exponent,
    T2: Scalar,
    R2: Exponent,
    Quantity<T1, R1>: Promote<Quantity<T2, R2>>,
{
    type Output = Promoted<Self, Quantity<T2, R2>>;

    fn sub(self, rhs: Quantity<T2, R2>) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(diff) => diff,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Remainder takes the dimension of the **first** operand; the second
/// operand's dimension is deliberately ignored (documented asymmetry).
impl<T1, R1, T2, R2> Rem<Quantity<T2, R2>> for Quantity<T1, R1>
where
    T1: Scalar,
    R1: Exponent,
    T2: Scalar,
    R2: Exponent,
    Quantity<T1, R1>: Promote<Quantity<T2, R2>>,
{
    type Output = Promoted<Self, Quantity<T2, R2>>;

    #[inline]
    fn rem(self, rhs: Quantity<T2, R2>) -> Self::Output {
        let lhs = self.promote();
        let rhs = <Self as Promote<Quantity<T2, R2>>>::promote_rhs(rhs);
        Quantity::new(lhs.value() % rhs.value(), lhs.dimensions())
    }
}

impl<T: Scalar, R: Exponent> Neg for Quantity<T, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value(), self.dimensions())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations: quantity ⊗ bare number
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($t:ty) => {
        impl<R: Exponent> Mul<$t> for Quantity<$t, R> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.value() * rhs, self.dimensions())
            }
        }

        impl<R: Exponent> Mul<Quantity<$t, R>> for $t {
            type Output = Quantity<$t, R>;
            #[inline]
            fn mul(self, rhs: Quantity<$t, R>) -> Self::Output {
                rhs * self
            }
        }

        impl<R: Exponent> Div<$t> for Quantity<$t, R> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.value() / rhs, self.dimensions())
            }
        }

        /// Dividing a bare number by a quantity inverts the dimension.
        impl<R: Exponent> Div<Quantity<$t, R>> for $t {
            type Output = Quantity<$t, R>;
            #[inline]
            fn div(self, rhs: Quantity<$t, R>) -> Self::Output {
                Quantity::new(self / rhs.value(), rhs.dimensions().inv())
            }
        }

        /// Adding a bare number requires a dimensionless quantity.
        ///
        /// # Panics
        ///
        /// Panics with the
        /// [`QuantityError::DimensionMismatch`] message when
        /// the quantity is dimensioned.
        impl<R: Exponent> Add<$t> for Quantity<$t, R> {
            type Output = Self;
            fn add(self, rhs: $t) -> Self {
                self + Quantity::dimensionless(rhs)
            }
        }

        /// Adding a quantity to a bare number requires it be dimensionless.
        ///
        /// # Panics
        ///
        /// Panics with the
        /// [`QuantityError::DimensionMismatch`] message when
        /// the quantity is dimensioned.
        impl<R: Exponent> Add<Quantity<$t, R>> for $t {
            type Output = Quantity<$t, R>;
            fn add(self, rhs: Quantity<$t, R>) -> Self::Output {
                Quantity::dimensionless(self) + rhs
            }
        }

        /// Subtracting a bare number requires a dimensionless quantity.
        ///
        /// # Panics
        ///
        /// Panics with the
        /// [`QuantityError::DimensionMismatch`] message when
        /// the quantity is dimensioned.
        impl<R: Exponent> Sub<$t> for Quantity<$t, R> {
            type Output = Self;
            fn sub(self, rhs: $t) -> Self {
                self - Quantity::dimensionless(rhs)
            }
        }

        /// Subtracting a quantity from a bare number requires it be
        /// dimensionless.
        ///
        /// # Panics
        ///
        /// Panics with the
        /// [`QuantityError::DimensionMismatch`] message when
        /// the quantity is dimensioned.
        impl<R: Exponent> Sub<Quantity<$t, R>> for $t {
            type Output = Quantity<$t, R>;
            fn sub(self, rhs: Quantity<$t, R>) -> Self::Output {
                Quantity::dimensionless(self) - rhs
            }
        }

        /// Remainder by a bare number keeps the quantity's dimension.
        impl<R: Exponent> Rem<$t> for Quantity<$t, R> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: $t) -> Self {
                Self::new(self.value() % rhs, self.dimensions())
            }
        }
    };
}

impl_scalar_ops!(f32);
impl_scalar_ops!(f64);

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations: quantity ⊗ raw Dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Attaches a dimension: the value is untouched, the dimensions combine.
impl<T: Scalar, R: Exponent> Mul<Dimensions<R>> for Quantity<T, R> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Dimensions<R>) -> Self {
        Self::new(self.value(), self.dimensions() * rhs)
    }
}

/// Detaches a dimension: the value is untouched, the dimensions divide.
impl<T: Scalar, R: Exponent> Div<Dimensions<R>> for Quantity<T, R> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Dimensions<R>) -> Self {
        Self::new(self.value(), self.dimensions() / rhs)
    }
}

/// A raw dimension acts as a quantity with value one.
impl<T: Scalar, R: Exponent> Mul<Quantity<T, R>> for Dimensions<R> {
    type Output = Quantity<T, R>;
    #[inline]
    fn mul(self, rhs: Quantity<T, R>) -> Self::Output {
        Quantity::new(rhs.value(), self * rhs.dimensions())
    }
}

/// A raw dimension acts as a quantity with value one.
impl<T: Scalar, R: Exponent> Div<Quantity<T, R>> for Dimensions<R> {
    type Output = Quantity<T, R>;
    #[inline]
    fn div(self, rhs: Quantity<T, R>) -> Self::Output {
        Quantity::new(rhs.value().recip(), self / rhs.dimensions())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rounded integer division
// ─────────────────────────────────────────────────────────────────────────────

/// Rounding mode for [`Quantity::div_rounded`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round the quotient toward zero (the default, truncation).
    #[default]
    TowardZero,
    /// Round the quotient toward negative infinity.
    Floor,
    /// Round the quotient toward positive infinity.
    Ceil,
    /// Round the quotient to the nearest integer.
    Nearest,
}

impl RoundingMode {
    #[inline]
    fn apply<T: Scalar>(self, x: T) -> T {
        match self {
            RoundingMode::TowardZero => x.trunc(),
            RoundingMode::Floor => x.floor(),
            RoundingMode::Ceil => x.ceil(),
            RoundingMode::Nearest => x.round(),
        }
    }
}

impl<T: Scalar, R: Exponent> Quantity<T, R> {
    /// Integer division: divides the values, rounds the quotient per `mode`,
    /// and divides the dimensions exactly like `/`.
    pub fn div_rounded<Rhs>(self, rhs: Rhs, mode: RoundingMode) -> Promoted<Self, Rhs>
    where
        Self: Promote<Rhs>,
    {
        let lhs = self.promote();
        let rhs = <Self as Promote<Rhs>>::promote_rhs(rhs);
        Quantity::new(
            mode.apply(lhs.value() / rhs.value()),
            lhs.dimensions() / rhs.dimensions(),
        )
    }

    /// Integer division by a bare number; the dimension is unchanged.
    pub fn div_scalar_rounded(self, rhs: T, mode: RoundingMode) -> Self {
        Self::new(mode.apply(self.value() / rhs), self.dimensions())
    }

    /// Integer division of a bare number by a quantity; the dimension is
    /// inverted.
    pub fn scalar_div_rounded(lhs: T, rhs: Self, mode: RoundingMode) -> Self {
        Self::new(
            mode.apply(lhs / rhs.value()),
            rhs.dimensions().inv(),
        )
    }
}
