//! Checked matrix multiplication and the `*` operator.

use crate::error::Error;
use crate::scalar::Scalar;

use super::base::Matrix;
use super::macros::impl_binary_op;

impl<T: Scalar> Matrix<T> {
    /// Returns the matrix product `self * multiplicand` as a new
    /// `self.rows() x multiplicand.cols()` matrix; neither operand changes.
    ///
    /// Cell `(r, c)` of the product is the dot product of row `r` of `self`
    /// and column `c` of `multiplicand`. Fails with
    /// [`Error::DimensionMismatch`] unless `self.cols()` equals
    /// `multiplicand.rows()`.
    pub fn try_mul(&self, multiplicand: &Self) -> Result<Self, Error> {
        if self.cols != multiplicand.rows {
            return Err(Error::DimensionMismatch {
                expected_rows: self.cols,
                expected_cols: multiplicand.cols,
                received_rows: multiplicand.rows,
                received_cols: multiplicand.cols,
            });
        }
        let inner = self.cols;
        let cols = multiplicand.cols;
        let mut product = Matrix::new(self.rows, cols);
        for r in 0..self.rows {
            for c in 0..cols {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc += self.data[r * inner + k] * multiplicand.data[k * cols + c];
                }
                product.data[r * cols + c] = acc;
            }
        }
        Ok(product)
    }
}

impl_binary_op!(Mul, mul, try_mul, "matrix multiplication");
