//! Accumulates daily tallies with in-place matrix addition.
//!
//! Run with: cargo run --example tally

use densemat::Matrix;

fn main() {
    // Two stations, three item kinds.
    let monday = Matrix::from([[4, 0, 2], [1, 3, 0]]);
    let tuesday = Matrix::from([[2, 5, 1], [0, 2, 2]]);

    let mut totals = Matrix::<i64>::new(2, 3);
    totals += &monday;
    totals += &tuesday;

    println!("monday =\n{monday}");
    println!("tuesday =\n{tuesday}");
    println!("totals =\n{totals}");
    println!("tuesday - monday =\n{}", &tuesday - &monday);
}
