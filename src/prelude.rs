//! Convenient prelude: import the crate's core types in one line.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use densemat::prelude::*;
//! ```
//!
//! Re-exports included: [`Matrix`], [`Scalar`], and [`Error`].

pub use crate::error::Error;
pub use crate::matrix::Matrix;
pub use crate::scalar::Scalar;
