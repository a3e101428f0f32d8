//! Dense, fixed-dimension matrices with checked mutation and arithmetic.
//!
//! The core type is [`Matrix`], an owned row-major grid over any numeric
//! element type implementing [`Scalar`]. Dimensions are fixed at
//! construction; mutating operations and arithmetic validate their
//! preconditions first and return [`Error`] instead of leaving the receiver
//! half-written. The `+`, `-`, `*`, `+=`, and `-=` operators are sugar over
//! the checked methods and panic with the same messages, for call sites that
//! control both shapes.
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from([[1, 2], [3, 4]]);
//! let identity = Matrix::identity(2);
//! assert_eq!(a.try_mul(&identity)?, a);
//! assert_eq!((&a + &a).to_string(), "[2, 4]\n[6, 8]\n");
//! # Ok::<(), densemat::Error>(())
//! ```

mod error;
mod matrix;
mod scalar;

pub mod prelude;

pub use error::Error;
pub use matrix::Matrix;
pub use scalar::Scalar;
