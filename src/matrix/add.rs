//! Checked elementwise addition and the `+` / `+=` operators.

use crate::error::Error;
use crate::scalar::Scalar;

use super::base::Matrix;
use super::macros::{impl_assign_op, impl_binary_op};

impl<T: Scalar> Matrix<T> {
    /// Returns `self + addend` as a new matrix; neither operand changes.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless the shapes are equal.
    pub fn try_add(&self, addend: &Self) -> Result<Self, Error> {
        let mut sum = self.clone();
        sum.try_add_assign(addend)?;
        Ok(sum)
    }

    /// Adds `addend` into `self`, cell by cell.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless the shapes are equal;
    /// no cell changes on failure.
    pub fn try_add_assign(&mut self, addend: &Self) -> Result<(), Error> {
        self.check_same_dimensions(addend)?;
        for (cell, &value) in self.data.iter_mut().zip(&addend.data) {
            *cell += value;
        }
        Ok(())
    }
}

impl_binary_op!(Add, add, try_add, "matrix addition");
impl_assign_op!(AddAssign, add_assign, try_add_assign, "matrix addition");
