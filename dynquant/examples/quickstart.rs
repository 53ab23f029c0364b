//! Minimal end-to-end example: build quantities, combine them, catch a
//! dimensional mistake.

use dynquant::{dims, Dimensions, Quantity};

fn main() {
    let distance: Quantity<f64> = Quantity::new(100.0, Dimensions::length());
    let time: Quantity<f64> = Quantity::new(20.0, Dimensions::time());

    let speed = distance / time;
    println!("{distance} / {time} = {speed}");
    assert_eq!(speed.dimensions(), dims!(length: 1, time: -1));

    // Incompatible operations return errors instead of nonsense.
    match distance.try_add(time) {
        Ok(_) => unreachable!(),
        Err(err) => println!("rejected: {err}"),
    }
}
