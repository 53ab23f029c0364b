//! Unary functions on quantities.
//!
//! Each family has a fixed dimension-transform rule applied mechanically:
//!
//! | family | dimension rule |
//! |---|---|
//! | `abs`, `floor`, `ceil`, `trunc`, `round`, `signum`, `ldexp` | unchanged |
//! | `sqrt` | halved (via rationalize) |
//! | `cbrt` | divided by three (via rationalize) |
//! | `inv` | negated |
//! | `abs2` | doubled |
//! | `copysign`, `flipsign`, `%` | first operand's dimension only |
//! | trig / log / exp | must be dimensionless; returns a bare value |

use crate::error::{QuantityError, Result};
use crate::exponent::Exponent;
use crate::quantity::{from_f64, Quantity, Scalar};

/// Generates dimension-preserving unary functions that delegate to the
/// float's method of the same name.
macro_rules! dimension_preserving_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "Applies `", stringify!($name),
                "` to the value; the dimension is unchanged."
            )]
            #[inline]
            pub fn $name(self) -> Self {
                Self::new(self.value().$name(), self.dimensions())
            }
        )*
    };
}

/// Generates dimensionless-only functions that validate the dimension and
/// return a bare value.
macro_rules! dimensionless_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "Computes `", stringify!($name),
                "` of a dimensionless quantity, returning a bare value."
            )]
            /// Fails with
            /// [`QuantityError::DimensionError`] when the
            /// input carries a dimension.
            pub fn $name(&self) -> Result<T> {
                self.require_dimensionless(stringify!($name))?;
                Ok(self.value().$name())
            }
        )*
    };
}

impl<T: Scalar, R: Exponent> Quantity<T, R> {
    dimension_preserving_fns!(abs, floor, ceil, trunc, round, signum);

    /// Multiplies the value by `2^n`; the dimension is unchanged.
    #[inline]
    pub fn ldexp(self, n: i32) -> Self {
        let two = T::one() + T::one();
        Self::new(self.value() * two.powi(n), self.dimensions())
    }

    /// The value with the sign of `sign`'s value.
    ///
    /// The result takes the dimension of `self`; `sign`'s dimension is
    /// deliberately ignored (documented asymmetry, mirroring `%`).
    #[inline]
    pub fn copysign<R2: Exponent>(self, sign: Quantity<T, R2>) -> Self {
        Self::new(self.value().copysign(sign.value()), self.dimensions())
    }

    /// The value negated when `sign`'s value is negative.
    ///
    /// Unlike [`copysign`](Self::copysign) this flips rather than overwrites
    /// the sign. The result takes the dimension of `self`; `sign`'s
    /// dimension is deliberately ignored.
    #[inline]
    pub fn flipsign<R2: Exponent>(self, sign: Quantity<T, R2>) -> Self {
        if sign.value().is_sign_negative() {
            Self::new(-self.value(), self.dimensions())
        } else {
            self
        }
    }

    /// The squared magnitude: value squared, dimension doubled.
    #[inline]
    pub fn abs2(self) -> Self {
        Self::new(
            self.value() * self.value(),
            self.dimensions() * self.dimensions(),
        )
    }

    /// The reciprocal: value inverted, dimension negated.
    #[inline]
    pub fn inv(self) -> Self {
        Self::new(self.value().recip(), self.dimensions().inv())
    }

    /// Raises to an integer power. Small powers expand into repeated
    /// dimension addition, exactly matching the general path.
    ///
    /// # Panics
    ///
    /// Panics with the
    /// [`QuantityError::RationalizeError`] message when scaling an exponent
    /// leaves `R`'s representable range; [`try_powf`](Self::try_powf)
    /// reports the same condition as an error.
    pub fn powi(self, n: i32) -> Self {
        Self::new(self.value().powi(n), self.dimensions().powi(n))
    }

    /// Raises to an arbitrary real power.
    ///
    /// The exponent is rationalized against `R` and the **exact**
    /// rationalized value is applied to the numeric value, so value and
    /// dimension stay consistent even when `R` rounds the request. Fails
    /// with [`QuantityError::RationalizeError`] when `R` cannot represent
    /// the exponent; a dimensionless quantity may be raised to any real
    /// power.
    pub fn try_powf(self, exp: f64) -> Result<Self> {
        if self.is_dimensionless() {
            return Ok(Self::new(
                self.value().powf(from_f64(exp)),
                self.dimensions(),
            ));
        }
        if let Ok(n) = i32::rationalize(exp) {
            let dims = self.dimensions().try_powi(n)?;
            return Ok(Self::new(self.value().powi(n), dims));
        }
        let factor = R::rationalize(exp)?;
        let dims = self.dimensions().try_scale(factor, exp)?;
        Ok(Self::new(
            self.value().powf(from_f64(factor.to_f64())),
            dims,
        ))
    }

    /// Square root: value rooted, every exponent halved.
    ///
    /// Inherits the rationalization failure mode of a `1/2` power.
    pub fn try_sqrt(self) -> Result<Self> {
        Ok(Self::new(
            self.value().sqrt(),
            self.dimensions().try_sqrt()?,
        ))
    }

    /// Cube root: value rooted, every exponent divided by three.
    ///
    /// Inherits the rationalization failure mode of a `1/3` power.
    pub fn try_cbrt(self) -> Result<Self> {
        Ok(Self::new(
            self.value().cbrt(),
            self.dimensions().try_cbrt()?,
        ))
    }

    fn require_dimensionless(&self, function: &'static str) -> Result<()> {
        if self.is_dimensionless() {
            Ok(())
        } else {
            Err(QuantityError::DimensionError {
                function,
                quantity: self.to_string(),
            })
        }
    }

    dimensionless_fns!(
        sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh,
        atanh, exp, exp2, exp_m1, ln, ln_1p, log2, log10,
    );
}
