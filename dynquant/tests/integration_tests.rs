//! Integration-level smoke tests for the `dynquant` facade crate.

use dynquant::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

fn meters(v: f64) -> Quantity<f64> {
    Quantity::new(v, Dimensions::length())
}

fn seconds(v: f64) -> Quantity<f64> {
    Quantity::new(v, Dimensions::time())
}

#[test]
fn smoke_test_velocity() {
    let v = meters(100.0) / seconds(20.0);
    assert_eq!(v.value(), 5.0);
    assert_eq!(v.dimensions(), dims!(length: 1, time: -1));
}

#[test]
fn smoke_test_display() {
    let v = meters(5.0) / seconds(1.0);
    assert_eq!(v.to_string(), "5 m s⁻¹");
    assert_eq!(Quantity::<f64>::dimensionless(2.5).to_string(), "2.5");
}

#[test]
fn addition_is_commutative() {
    let a = meters(1.5);
    let b = meters(2.25);
    assert_eq!(a + b, b + a);
}

#[test]
fn double_inverse_is_identity() {
    let v = meters(4.0) / seconds(2.0);
    assert_eq!(v.inv().inv(), v);
}

#[test]
fn self_division_is_dimensionless_one() {
    let q = meters(7.0);
    let r = q / q;
    assert!(r.is_dimensionless());
    assert_eq!(r.value(), 1.0);
}

#[test]
fn add_then_subtract_round_trips() {
    let q = meters(3.0);
    let r = meters(11.5);
    assert_eq!((q + r) - r, q);
}

#[test]
fn small_integer_powers_match_repeated_multiplication() {
    let q = meters(2.0);
    assert_eq!(q.powi(2), q * q);
    assert_eq!(q.powi(3), q * q * q);
    assert_eq!(q.powi(-1), q.inv());
    assert_eq!(q.powi(-2), (q * q).inv());
    assert!(q.powi(0).is_dimensionless());
}

#[test]
fn sqrt_halves_the_dimension() {
    let area: Quantity<f64> = Quantity::new(9.0, dims!(length: 2));
    let side = area.try_sqrt().unwrap();
    assert_abs_diff_eq!(side.value(), 3.0, epsilon = 1e-12);
    assert_eq!(side.dimensions(), Dimensions::length());

    // A fractional exponent is representable, not an error.
    let root = meters(4.0).try_sqrt().unwrap();
    assert_eq!(root.to_string(), "2 m^(1/2)");
    assert_eq!(root * root, meters(4.0));
}

#[test]
fn dimensionless_accepts_any_real_exponent() {
    let x = Quantity::<f64>::dimensionless(2.0);
    let y = x.try_powf(std::f64::consts::PI).unwrap();
    assert_abs_diff_eq!(y.value(), 2.0_f64.powf(std::f64::consts::PI));
}

#[test]
fn dimensioned_irrational_exponent_is_rejected() {
    let err = meters(2.0).try_powf(std::f64::consts::PI).unwrap_err();
    assert!(matches!(err, QuantityError::RationalizeError { .. }));
}

#[test]
fn mismatched_addition_is_reported() {
    let err = meters(1.0).try_add(seconds(1.0)).unwrap_err();
    match err {
        QuantityError::DimensionMismatch { left, right } => {
            assert_eq!(left, "1 m");
            assert_eq!(right, "1 s");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn transcendental_functions_guard_their_domain() {
    assert!(matches!(
        meters(1.0).sin(),
        Err(QuantityError::DimensionError { function: "sin", .. })
    ));
    let x = Quantity::<f64>::dimensionless(std::f64::consts::FRAC_PI_2);
    assert_abs_diff_eq!(x.sin().unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn remainder_takes_first_operand_dimension() {
    let r = meters(7.0) % seconds(4.0);
    assert_eq!(r.value(), 3.0);
    assert_eq!(r.dimensions(), Dimensions::length());
}

#[test]
fn comparison_across_dimensions_is_unordered() {
    assert_eq!(meters(1.0).partial_cmp(&seconds(1.0)), None);
    assert!(matches!(
        meters(1.0).try_partial_cmp(&seconds(1.0)),
        Err(QuantityError::DimensionMismatch { .. })
    ));
    assert_eq!(
        meters(1.0).partial_cmp(&meters(2.0)),
        Some(std::cmp::Ordering::Less)
    );
}

#[test]
fn promotion_mixes_value_and_exponent_kinds() {
    let narrow: Quantity<f32, i32> = Quantity::new(2.0, Dimensions::length());
    let wide: Quantity<f64> = Quantity::new(3.0, Dimensions::time());
    let product = narrow * wide;
    let expected: Quantity<f64> = Quantity::new(6.0, dims!(length: 1, time: 1));
    assert_eq!(product, expected);
}

#[test]
fn array_rejects_quantity_writes_but_accepts_bare_values() {
    let mut arr: QuantityArray<f64> =
        QuantityArray::from_raw(vec![1.0, 2.0, 3.0], Dimensions::length());

    let q = arr.get(0).unwrap();
    assert!(matches!(
        arr.set_quantity(1, &q),
        Err(QuantityError::InvalidAssignment { index: 1, .. })
    ));

    arr.set(1, 9.0).unwrap();
    let elem = arr.get(1).unwrap();
    assert_eq!(elem.value(), 9.0);
    assert_eq!(elem.dimensions(), Dimensions::length());
}

#[test]
fn projectile_flight_time() {
    // v = g * t at apex, so t = v / g.
    let g: Quantity<f64> = Quantity::new(9.81, dims!(length: 1, time: -2));
    let v0: Quantity<f64> = Quantity::new(19.62, dims!(length: 1, time: -1));
    let t = v0 / g;
    assert_abs_diff_eq!(t.value(), 2.0, epsilon = 1e-12);
    assert_eq!(t.dimensions(), Dimensions::time());

    let height = v0 * t - 0.5 * g * t * t;
    assert_eq!(height.dimensions(), Dimensions::length());
    assert_abs_diff_eq!(height.value(), 19.62, epsilon = 1e-9);
}

#[test]
fn gravitational_binding_energy_dimensions() {
    // E ~ G m^2 / r has the dimensions of energy.
    let gravitational_constant: Quantity<f64> =
        Quantity::new(6.674e-11, dims!(length: 3, mass: -1, time: -2));
    let m: Quantity<f64> = Quantity::new(5.97e24, Dimensions::mass());
    let r: Quantity<f64> = Quantity::new(6.371e6, Dimensions::length());

    let e = gravitational_constant * m * m / r;
    assert_eq!(e.dimensions(), dims!(mass: 1, length: 2, time: -2));
    assert_relative_eq!(e.value(), 3.733e32, max_relative = 1e-3);
}

proptest! {
    #[test]
    fn mul_div_round_trips(a in 0.1f64..1e6, b in 0.1f64..1e6) {
        let q = meters(a);
        let t = seconds(b);
        let back = (q * t) / t;
        prop_assert_eq!(back.dimensions(), Dimensions::length());
        prop_assert!((back.value() - a).abs() <= 1e-9 * a.abs());
    }

    #[test]
    fn powi_dimension_is_linear_in_exponent(n in -6i32..=6, m in -6i32..=6) {
        let d: Dimensions = dims!(length: 1, time: -1);
        prop_assert_eq!(d.powi(n) * d.powi(m), d.powi(n + m));
    }

    #[test]
    fn scalar_multiplication_scales_value_only(x in -1e6f64..1e6, k in -1e3f64..1e3) {
        let q = meters(x) * k;
        prop_assert_eq!(q.dimensions(), Dimensions::length());
        prop_assert_eq!(q.value(), x * k);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn quantity_round_trips_through_json() {
        let q = meters(2.5) / seconds(0.5);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quantity<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn array_round_trips_through_json() {
        let arr: QuantityArray<f64> =
            QuantityArray::from_raw(vec![1.0, 2.0], dims!(mass: 1));
        let json = serde_json::to_string(&arr).unwrap();
        let back: QuantityArray<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, arr);
    }
}
