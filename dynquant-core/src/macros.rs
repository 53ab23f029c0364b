//! Macros for constructing dimensions.

/// Builds a [`Dimensions`](crate::Dimensions) from named exponents.
///
/// Omitted fields default to zero. Field names are the 7 SI base quantities:
/// `length`, `mass`, `time`, `current`, `temperature`, `luminosity`,
/// `amount`.
///
/// ```rust
/// use dynquant_core::{dims, Dimensions};
///
/// let energy: Dimensions = dims!(mass: 1, length: 2, time: -2);
/// assert_eq!(energy, Dimensions::mass() * Dimensions::length().powi(2) / Dimensions::time().powi(2));
///
/// let one: Dimensions = dims!();
/// assert!(one.is_dimensionless());
/// ```
#[macro_export]
macro_rules! dims {
    ($($field:ident: $exp:expr),* $(,)?) => {{
        let mut dims = $crate::Dimensions::dimensionless();
        $( dims.$field = $crate::Exponent::from_int($exp); )*
        dims
    }};
}
