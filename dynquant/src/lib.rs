//! Runtime-checked physical quantities.
//!
//! `dynquant` is the user-facing crate in this workspace. It re-exports the
//! full API from `dynquant-core`.
//!
//! The core idea is: a value is a [`Quantity<T, R>`] carrying a numeric
//! value of type `T` and a [`Dimensions<R>`], a vector of the seven SI base
//! exponents. Dimensions are ordinary runtime data, so quantities whose
//! dimensions come from user input, files or computation all share one Rust
//! type and are checked when they are combined.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds, or take the sine of a length) even when the dimensions are
//!   only known at runtime.
//! - Tracks rational exponents, so `sqrt(1 m²) = 1 m` and `sqrt(1 m)` is
//!   `1 m^(1/2)` rather than an error or a silent truncation.
//! - Mixes numeric and exponent kinds safely: `f32` with `f64`, integer
//!   exponents with rationals, promoting to the richer kind.
//!
//! # What this crate does not try to solve
//!
//! - Unit systems: everything is expressed in SI base dimensions, and there
//!   are no conversion factors (`3 km` is stored as `3000 m`).
//! - Compile-time checking: when the dimensions of every value are known
//!   statically, a phantom-type units library catches errors earlier.
//!
//! # Quick start
//!
//! ```rust
//! use dynquant::{dims, Dimensions, Quantity};
//!
//! let distance: Quantity<f64> = Quantity::new(100.0, Dimensions::length());
//! let time: Quantity<f64> = Quantity::new(20.0, Dimensions::time());
//!
//! let speed = distance / time;
//! assert_eq!(speed.value(), 5.0);
//! assert_eq!(speed.dimensions(), dims!(length: 1, time: -1));
//! assert_eq!(speed.to_string(), "5 m s⁻¹");
//! ```
//!
//! Invalid combinations are reported, not computed:
//!
//! ```rust
//! use dynquant::{Dimensions, Quantity, QuantityError};
//!
//! let d: Quantity<f64> = Quantity::new(1.0, Dimensions::length());
//! let t: Quantity<f64> = Quantity::new(1.0, Dimensions::time());
//!
//! assert!(matches!(
//!     d.try_add(t),
//!     Err(QuantityError::DimensionMismatch { .. })
//! ));
//! assert!(matches!(d.sin(), Err(QuantityError::DimensionError { .. })));
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Dimensions`], [`Quantity`] and
//!   [`QuantityArray`].
//!
//! # Panics and errors
//!
//! Fallible operations come in `try_*` form returning
//! [`Result`](dynquant_core::Result). The `+` and `-` operators panic on a
//! dimension mismatch because `std::ops` leaves no error channel; use
//! [`Quantity::try_add`] / [`Quantity::try_sub`] where the dimensions are
//! not known to agree.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use dynquant_core::*;
