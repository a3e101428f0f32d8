//! Composes 2D homogeneous transforms and applies them to a point.
//!
//! Run with: cargo run --example transform

use std::f64::consts::FRAC_PI_2;

use densemat::Matrix;

/// Translation by `(dx, dy)` in homogeneous coordinates.
fn translation(dx: f64, dy: f64) -> Matrix<f64> {
    Matrix::from([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
}

/// Counterclockwise rotation by `theta` radians about the origin.
fn rotation(theta: f64) -> Matrix<f64> {
    let (sin, cos) = theta.sin_cos();
    Matrix::from([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
}

fn main() {
    // Rotate a quarter turn, then shift; the matrix on the left applies last.
    let pipeline = &translation(3.0, 1.0) * &rotation(FRAC_PI_2);
    let point = Matrix::from([[2.0], [0.0], [1.0]]);
    let moved = &pipeline * &point;

    println!("pipeline =\n{pipeline}");
    println!("point =\n{point}");
    println!("moved =\n{moved}");
}
