//! A small ballistics calculation showing dimensions flowing through a
//! multi-step computation, including a square root.

use dynquant::{dims, Dimensions, Quantity};

fn main() {
    let g: Quantity<f64> = Quantity::new(9.81, dims!(length: 1, time: -2));
    let height: Quantity<f64> = Quantity::new(45.0, Dimensions::length());

    // Fall time from rest: t = sqrt(2 h / g).
    let t = (2.0 * height / g)
        .try_sqrt()
        .expect("h/g has dimensions T^2, an exact square");
    assert_eq!(t.dimensions(), Dimensions::time());
    println!("fall time from {height}: {t}");

    // Impact speed: v = g t.
    let v = g * t;
    assert_eq!(v.dimensions(), dims!(length: 1, time: -1));
    println!("impact speed: {v}");

    // Kinetic energy per unit mass: v^2 / 2.
    let specific_energy = v * v / 2.0;
    assert_eq!(specific_energy.dimensions(), dims!(length: 2, time: -2));
    println!("specific kinetic energy: {specific_energy}");
}
