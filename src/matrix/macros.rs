//! Generators for the operator impls of [`Matrix`](super::base::Matrix).
//!
//! Each binary operator covers every owned/borrowed operand combination, and
//! every combination delegates to a single checked method; the macros stamp
//! those impls out so the operator files only state the arithmetic itself.

/// Implements a binary operator (`Add`, `Sub`, `Mul`) for all four
/// owned/borrowed operand combinations, delegating to `$checked` and
/// panicking with its error on a shape mismatch.
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $checked:ident, $label:literal) => {
        impl<T: $crate::Scalar> ::std::ops::$op<&$crate::Matrix<T>> for &$crate::Matrix<T> {
            type Output = $crate::Matrix<T>;

            fn $method(self, rhs: &$crate::Matrix<T>) -> $crate::Matrix<T> {
                match self.$checked(rhs) {
                    Ok(out) => out,
                    Err(err) => panic!("{}: {err}", $label),
                }
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$op<&$crate::Matrix<T>> for $crate::Matrix<T> {
            type Output = $crate::Matrix<T>;

            fn $method(self, rhs: &$crate::Matrix<T>) -> $crate::Matrix<T> {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$op<$crate::Matrix<T>> for &$crate::Matrix<T> {
            type Output = $crate::Matrix<T>;

            fn $method(self, rhs: $crate::Matrix<T>) -> $crate::Matrix<T> {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$op<$crate::Matrix<T>> for $crate::Matrix<T> {
            type Output = $crate::Matrix<T>;

            fn $method(self, rhs: $crate::Matrix<T>) -> $crate::Matrix<T> {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Implements an assigning operator (`AddAssign`, `SubAssign`) for owned and
/// borrowed right-hand sides, delegating to `$checked` and panicking with
/// its error on a shape mismatch.
macro_rules! impl_assign_op {
    ($op:ident, $method:ident, $checked:ident, $label:literal) => {
        impl<T: $crate::Scalar> ::std::ops::$op<&$crate::Matrix<T>> for $crate::Matrix<T> {
            fn $method(&mut self, rhs: &$crate::Matrix<T>) {
                if let Err(err) = self.$checked(rhs) {
                    panic!("{}: {err}", $label);
                }
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$op<$crate::Matrix<T>> for $crate::Matrix<T> {
            fn $method(&mut self, rhs: $crate::Matrix<T>) {
                ::std::ops::$op::$method(self, &rhs)
            }
        }
    };
}

pub(crate) use {impl_assign_op, impl_binary_op};
