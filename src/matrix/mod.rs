//! Dense matrix storage and its operations.

mod add;
mod base;
mod fmt;
mod index;
mod macros;
mod mul;
mod sub;

pub use base::Matrix;
