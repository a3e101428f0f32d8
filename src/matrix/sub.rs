//! Checked elementwise subtraction and the `-` / `-=` operators.

use crate::error::Error;
use crate::scalar::Scalar;

use super::base::Matrix;
use super::macros::{impl_assign_op, impl_binary_op};

impl<T: Scalar> Matrix<T> {
    /// Returns `self - subtrahend` as a new matrix; neither operand changes.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless the shapes are equal.
    pub fn try_sub(&self, subtrahend: &Self) -> Result<Self, Error> {
        let mut difference = self.clone();
        difference.try_sub_assign(subtrahend)?;
        Ok(difference)
    }

    /// Subtracts `subtrahend` from `self`, cell by cell.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless the shapes are equal;
    /// no cell changes on failure.
    pub fn try_sub_assign(&mut self, subtrahend: &Self) -> Result<(), Error> {
        self.check_same_dimensions(subtrahend)?;
        for (cell, &value) in self.data.iter_mut().zip(&subtrahend.data) {
            *cell -= value;
        }
        Ok(())
    }
}

impl_binary_op!(Sub, sub, try_sub, "matrix subtraction");
impl_assign_op!(SubAssign, sub_assign, try_sub_assign, "matrix subtraction");
