//! Element contract for matrix cells.

use std::fmt;

use num_traits::NumAssign;

/// Types usable as matrix elements.
///
/// Anything `Copy` with the usual arithmetic (including the assigning
/// operators), a zero, a one, and a `Display` rendering qualifies; the
/// blanket impl covers every primitive integer and float type. The trait
/// carries no methods of its own.
pub trait Scalar: Copy + NumAssign + fmt::Display {}

impl<T: Copy + NumAssign + fmt::Display> Scalar for T {}
