//! Core type system for runtime-checked physical quantities.
//!
//! `dynquant-core` provides a lightweight dimensional-analysis model:
//!
//! - A [`Dimensions<R>`] is a vector of seven SI base exponents (length,
//!   mass, time, current, temperature, luminosity, amount), each of
//!   exponent type `R`.
//! - A value tagged with dimensions is a [`Quantity<T, R>`], backed by a
//!   floating-point scalar `T`.
//! - Arithmetic combines dimensions by the usual exponent algebra and
//!   rejects invalid combinations (adding metres to seconds, taking the
//!   sine of a length) at runtime with a descriptive [`QuantityError`].
//! - Mixed-kind operations promote both operands to a common richer kind
//!   via the [`Promote`] trait before combining them.
//!
//! Unlike phantom-type unit libraries, the dimension here is a runtime
//! value: two quantities with different dimensions share one Rust type, so
//! heterogeneous collections and data read at runtime work naturally.
//!
//! Most users should depend on `dynquant` (the facade crate) unless they
//! need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Dimensional consistency checks on values whose dimensions are only
//!   known at runtime.
//! - Rational exponents (`m^(1/2)`) through the [`FixedRational`] default
//!   or an arbitrary [`Exponent`] implementation.
//! - Compact homogeneous storage via [`QuantityArray`], which keeps one
//!   dimension beside a plain `Vec<T>`.
//!
//! # What this crate does not try to solve
//!
//! - Unit systems and conversion factors (everything is expressed in SI
//!   base dimensions; `3 km` is stored as `3000 m`).
//! - Compile-time dimension checking; use a phantom-type library when the
//!   dimensions are statically known.
//! - Symbolic or exact-value arithmetic (`Quantity` values are IEEE-754
//!   floats).
//!
//! # Quick start
//!
//! ```rust
//! use dynquant_core::{dims, Dimensions, Quantity};
//!
//! let distance: Quantity<f64> = Quantity::new(100.0, Dimensions::length());
//! let time: Quantity<f64> = Quantity::new(20.0, Dimensions::time());
//!
//! let speed = distance / time;
//! assert_eq!(speed.value(), 5.0);
//! assert_eq!(speed.dimensions(), dims!(length: 1, time: -1));
//!
//! // Incompatible additions are caught, not silently computed.
//! assert!(distance.try_add(time).is_err());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Dimensions`], [`Quantity`] and
//!   [`QuantityArray`]; serialization covers both the value(s) and the
//!   exponent vector.
//!
//! # Panics and errors
//!
//! Fallible operations come in `try_*` form returning [`Result`]. The
//! operator traits `+` and `-` panic on a dimension mismatch because the
//! `std::ops` signatures leave no error channel; use
//! [`Quantity::try_add`] / [`Quantity::try_sub`] where the dimensions are
//! not known to agree. `*`, `/` and `%` never fail. Numeric edge cases
//! follow IEEE-754 (NaN and infinities propagate).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod array;
mod dimensions;
mod error;
mod exponent;
mod fixed_rational;
mod macros;
mod math;
mod ops;
mod quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use array::QuantityArray;
pub use dimensions::Dimensions;
pub use error::{QuantityError, Result};
pub use exponent::Exponent;
pub use fixed_rational::FixedRational;
pub use ops::{Promote, RoundingMode};
pub use quantity::{ustrip, Quantity, Scalar};

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-module behavior; per-module details live in each module's own
    // test block.

    #[test]
    fn velocity_from_division() {
        let d: Quantity<f64> = Quantity::new(100.0, Dimensions::length());
        let t: Quantity<f64> = Quantity::new(20.0, Dimensions::time());
        let v = d / t;
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.dimensions(), dims!(length: 1, time: -1));
    }

    #[test]
    fn kinetic_energy_has_energy_dimensions() {
        let m: Quantity<f64> = Quantity::new(2.0, Dimensions::mass());
        let v: Quantity<f64> = Quantity::new(3.0, dims!(length: 1, time: -1));
        let e = 0.5 * m * v * v;
        assert_eq!(e.value(), 9.0);
        assert_eq!(e.dimensions(), dims!(mass: 1, length: 2, time: -2));
    }

    #[test]
    fn mismatched_sum_reports_both_dimensions() {
        let d: Quantity<f64> = Quantity::new(1.0, Dimensions::length());
        let t: Quantity<f64> = Quantity::new(1.0, Dimensions::time());
        let err = d.try_add(t).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('m') && msg.contains('s'), "{msg}");
    }

    #[test]
    fn fractional_exponent_survives_display_and_algebra() {
        let root = Dimensions::<FixedRational>::length().try_sqrt().unwrap();
        assert_eq!(root.to_string(), "m^(1/2)");
        assert_eq!(root * root, Dimensions::length());
    }

    #[test]
    fn array_elements_behave_like_scalar_quantities() {
        let arr: QuantityArray<f64> =
            QuantityArray::from_raw(vec![10.0, 20.0], Dimensions::length());
        let t: Quantity<f64> = Quantity::new(5.0, Dimensions::time());
        let v = arr.get(1).unwrap() / t;
        assert_eq!(v.value(), 4.0);
        assert_eq!(v.dimensions(), dims!(length: 1, time: -1));
    }
}
