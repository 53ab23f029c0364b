//! The dimension vector and its exponent algebra.
//!
//! Every physical quantity has a dimension built from powers of the 7 SI
//! base quantities. Multiplying quantities adds exponents, dividing
//! subtracts them, and raising to a power scales them, so the whole algebra
//! reduces to componentwise arithmetic on the exponent vector.

use core::fmt;
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exponent::{rationalize_error, Exponent};
use crate::fixed_rational::FixedRational;

/// The dimension of a physical quantity: 7 exponents over the SI base
/// quantities.
///
/// `Dimensions` is an immutable value type. Two dimensions are equal iff all
/// 7 exponents are equal; a dimension is *dimensionless* iff all 7 are zero.
/// The exponent representation `R` defaults to [`FixedRational`], which
/// represents every exponent arising from roots and small rational powers;
/// `i32` and [`num_rational::Rational32`] are also supported.
///
/// ```rust
/// use dynquant_core::{dims, Dimensions};
///
/// let velocity: Dimensions = dims!(length: 1, time: -1);
/// let acceleration = velocity / Dimensions::time();
/// assert_eq!(acceleration, dims!(length: 1, time: -2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions<R: Exponent = FixedRational> {
    /// Length exponent (metre).
    pub length: R,
    /// Mass exponent (kilogram).
    pub mass: R,
    /// Time exponent (second).
    pub time: R,
    /// Electric current exponent (ampere).
    pub current: R,
    /// Thermodynamic temperature exponent (kelvin).
    pub temperature: R,
    /// Luminous intensity exponent (candela).
    pub luminosity: R,
    /// Amount of substance exponent (mole).
    pub amount: R,
}

impl<R: Exponent> Dimensions<R> {
    /// Builds a dimension from all 7 exponents.
    pub fn new(
        length: R,
        mass: R,
        time: R,
        current: R,
        temperature: R,
        luminosity: R,
        amount: R,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            luminosity,
            amount,
        }
    }

    /// The dimensionless dimension (all exponents zero).
    pub fn dimensionless() -> Self {
        Self::new(
            R::zero(),
            R::zero(),
            R::zero(),
            R::zero(),
            R::zero(),
            R::zero(),
            R::zero(),
        )
    }

    /// Whether all 7 exponents are zero.
    pub fn is_dimensionless(&self) -> bool {
        self.length.is_zero()
            && self.mass.is_zero()
            && self.time.is_zero()
            && self.current.is_zero()
            && self.temperature.is_zero()
            && self.luminosity.is_zero()
            && self.amount.is_zero()
    }

    /// Applies `f` to every exponent.
    pub fn map<R2: Exponent>(self, mut f: impl FnMut(R) -> R2) -> Dimensions<R2> {
        Dimensions {
            length: f(self.length),
            mass: f(self.mass),
            time: f(self.time),
            current: f(self.current),
            temperature: f(self.temperature),
            luminosity: f(self.luminosity),
            amount: f(self.amount),
        }
    }

    /// Applies `f` to every pair of corresponding exponents.
    pub fn map2(self, other: Self, mut f: impl FnMut(R, R) -> R) -> Self {
        Self {
            length: f(self.length, other.length),
            mass: f(self.mass, other.mass),
            time: f(self.time, other.time),
            current: f(self.current, other.current),
            temperature: f(self.temperature, other.temperature),
            luminosity: f(self.luminosity, other.luminosity),
            amount: f(self.amount, other.amount),
        }
    }

    /// Fallible [`map`](Self::map); fails on the first exponent `f` refuses.
    fn try_map(self, mut f: impl FnMut(R) -> Result<R>) -> Result<Self> {
        Ok(Self {
            length: f(self.length)?,
            mass: f(self.mass)?,
            time: f(self.time)?,
            current: f(self.current)?,
            temperature: f(self.temperature)?,
            luminosity: f(self.luminosity)?,
            amount: f(self.amount)?,
        })
    }

    /// The reciprocal dimension (all exponents negated).
    pub fn inv(self) -> Self {
        self.map(|x| -x)
    }

    /// Raises to an integer power.
    ///
    /// Small powers expand into repeated addition and negation; larger ones
    /// scale every exponent by `n`. Both paths produce identical results.
    ///
    /// # Panics
    ///
    /// Panics with the
    /// [`QuantityError::RationalizeError`](crate::QuantityError::RationalizeError)
    /// message when scaling an exponent leaves `R`'s representable range;
    /// use [`try_powi`](Self::try_powi) for the checked form.
    pub fn powi(self, n: i32) -> Self {
        match n {
            0 => Self::dimensionless(),
            1 => self,
            2 => self * self,
            3 => self * self * self,
            -1 => self.inv(),
            -2 => {
                let inv = self.inv();
                inv * inv
            }
            _ => match self.try_powi(n) {
                Ok(scaled) => scaled,
                Err(e) => panic!("{e}"),
            },
        }
    }

    /// Checked integer power: scales every exponent by `n`.
    ///
    /// Fails with
    /// [`QuantityError::RationalizeError`](crate::QuantityError::RationalizeError)
    /// when scaling an exponent leaves `R`'s representable range.
    pub fn try_powi(self, n: i32) -> Result<Self> {
        self.try_map(|x| {
            x.checked_scale(n)
                .ok_or_else(|| rationalize_error::<R>(f64::from(n)))
        })
    }

    /// Raises to an arbitrary real power.
    ///
    /// The exponent is first rationalized into `R`; if `R` cannot represent
    /// it exactly the operation fails with
    /// [`QuantityError::RationalizeError`](crate::QuantityError::RationalizeError).
    /// A dimensionless dimension may be raised to any real power.
    pub fn try_pow(self, exp: f64) -> Result<Self> {
        if self.is_dimensionless() {
            return Ok(self);
        }
        if let Ok(n) = i32::rationalize(exp) {
            return self.try_powi(n);
        }
        let factor = R::rationalize(exp)?;
        self.try_scale(factor, exp)
    }

    /// Halves every exponent (the dimension of a square root).
    pub fn try_sqrt(self) -> Result<Self> {
        self.try_pow(0.5)
    }

    /// Thirds every exponent (the dimension of a cube root).
    pub fn try_cbrt(self) -> Result<Self> {
        self.try_pow(1.0 / 3.0)
    }

    /// Scales every exponent by an already-rationalized factor.
    ///
    /// `requested` is the original real exponent, reported if scaling an
    /// individual exponent leaves the representable range.
    pub(crate) fn try_scale(self, factor: R, requested: f64) -> Result<Self> {
        self.try_map(|x| {
            x.checked_mul(factor)
                .ok_or_else(|| rationalize_error::<R>(requested))
        })
    }

    /// Converts the exponent representation.
    pub fn convert<R2>(self) -> Dimensions<R2>
    where
        R2: Exponent + From<R>,
    {
        self.map(R2::from)
    }

    /// The base dimension of length.
    pub fn length() -> Self {
        Self {
            length: R::from_int(1),
            ..Self::dimensionless()
        }
    }

    /// The base dimension of mass.
    pub fn mass() -> Self {
        Self {
            mass: R::from_int(1),
            ..Self::dimensionless()
        }
    }

    /// The base dimension of time.
    pub fn time() -> Self {
        Self {
            time: R::from_int(1),
            ..Self::dimensionless()
        }
    }

    /// The base dimension of electric current.
    pub fn current() -> Self {
        Self {
            current: R::from_int(1),
            ..Self::dimensionless()
        }
    }

    /// The base dimension of thermodynamic temperature.
    pub fn temperature() -> Self {
        Self {
            temperature: R::from_int(1),
            ..Self::dimensionless()
        }
    }

    /// The base dimension of luminous intensity.
    pub fn luminosity() -> Self {
        Self {
            luminosity: R::from_int(1),
            ..Self::dimensionless()
        }
    }

    /// The base dimension of amount of substance.
    pub fn amount() -> Self {
        Self {
            amount: R::from_int(1),
            ..Self::dimensionless()
        }
    }
}

impl<R: Exponent> Default for Dimensions<R> {
    fn default() -> Self {
        Self::dimensionless()
    }
}

/// Dimension of a product of quantities: exponents add.
impl<R: Exponent> Mul for Dimensions<R> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a + b)
    }
}

/// Dimension of a quotient of quantities: exponents subtract.
impl<R: Exponent> Div for Dimensions<R> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a - b)
    }
}

impl<R: Exponent> fmt::Display for Dimensions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let fields = [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("A", self.current),
            ("K", self.temperature),
            ("cd", self.luminosity),
            ("mol", self.amount),
        ];
        let mut first = true;
        for (symbol, exp) in fields {
            if exp.is_zero() {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match exp.as_int() {
                Some(1) => write!(f, "{symbol}")?,
                Some(n) => write!(f, "{symbol}{}", superscript(n))?,
                None => write!(f, "{symbol}^({exp})")?,
            }
        }
        Ok(())
    }
}

/// Renders an integer exponent with superscript digits.
fn superscript(n: i32) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for d in n.unsigned_abs().to_string().chars() {
        out.push(match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        });
    }
    out
}
