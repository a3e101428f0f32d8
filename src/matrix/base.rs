//! Matrix storage, construction, and checked mutation.

use crate::error::Error;
use crate::scalar::Scalar;

/// A dense `rows x cols` grid of numeric cells, stored row-major.
///
/// Dimensions are fixed at construction; every operation that could breach
/// them validates first and reports an [`Error`] instead of touching the
/// receiver. `Clone` deep-copies the cells, and `==` compares dimensions
/// and contents.
///
/// ```
/// use densemat::Matrix;
///
/// let mut m = Matrix::<i64>::new(2, 3);
/// m.set_row(0, &[4, 5, 6])?;
/// assert_eq!(m[(0, 1)], 5);
/// assert_eq!(m.to_string(), "[4, 5, 6]\n[0, 0, 0]\n");
/// # Ok::<(), densemat::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a `rows x cols` matrix with every cell set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = match rows.checked_mul(cols) {
            Some(len) => len,
            None => panic!("matrix dimensions {rows} x {cols} overflow usize"),
        };
        Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        }
    }

    /// Creates an `order x order` identity matrix: ones on the main
    /// diagonal, zeros everywhere else.
    pub fn identity(order: usize) -> Self {
        let mut matrix = Self::new(order, order);
        for i in 0..order {
            matrix.data[i * order + i] = T::one();
        }
        matrix
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True iff the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True iff `other` has the same number of rows and columns.
    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// `Err(DimensionMismatch)` with `self` as the expected shape unless
    /// `other` matches it.
    pub(crate) fn check_same_dimensions(&self, other: &Self) -> Result<(), Error> {
        if self.same_dimensions(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                received_rows: other.rows,
                received_cols: other.cols,
            })
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns a reference to cell `(row, col)`, or `None` when either
    /// index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Writes `value` into cell `(row, col)`.
    ///
    /// Fails with [`Error::OutOfBounds`] when either index is at or past
    /// the matrix bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), Error> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_bounds(row, col));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Borrows row `row` as a slice of `cols` cells.
    ///
    /// The slice is a view into the matrix's storage; use
    /// [`row_mut`](Self::row_mut) to write a row in place and
    /// [`col`](Self::col) for an owned column.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row {row} is out of bounds for a {} x {} matrix",
            self.rows,
            self.cols
        );
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrows row `row`; writes through the slice land in the
    /// matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.rows,
            "row {row} is out of bounds for a {} x {} matrix",
            self.rows,
            self.cols
        );
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Returns column `col` as a freshly allocated vector of `rows` cells,
    /// independent of the matrix's storage.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    pub fn col(&self, col: usize) -> Vec<T> {
        assert!(
            col < self.cols,
            "column {col} is out of bounds for a {} x {} matrix",
            self.rows,
            self.cols
        );
        (0..self.rows).map(|r| self.data[r * self.cols + col]).collect()
    }

    /// Copies all of `values` into row `row`, starting at column 0. Cells
    /// past `values.len()` keep their previous contents.
    ///
    /// Fails with [`Error::InvalidArgument`] when `values` holds more cells
    /// than the matrix has columns, and with [`Error::OutOfBounds`] when
    /// `row` is past the last row.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<(), Error> {
        if values.len() > self.cols {
            return Err(Error::InvalidArgument {
                reason: "more values than the matrix has columns",
            });
        }
        self.set_row_from(row, values, 0, values.len())
    }

    /// Copies `len` cells of `values`, starting at `values[offset]`, into
    /// row `row` starting at column 0. Cells past `len` keep their previous
    /// contents.
    ///
    /// All checks run before any cell is written: the row index
    /// ([`Error::OutOfBounds`]), the copy length against the column count
    /// ([`Error::InvalidArgument`]), and the copy range against `values`
    /// ([`Error::InvalidArgument`], also raised when `offset + len`
    /// overflows).
    pub fn set_row_from(
        &mut self,
        row: usize,
        values: &[T],
        offset: usize,
        len: usize,
    ) -> Result<(), Error> {
        if row >= self.rows {
            return Err(self.out_of_bounds(row, 0));
        }
        if len > self.cols {
            return Err(Error::InvalidArgument {
                reason: "copy length exceeds the matrix's column count",
            });
        }
        let end = match offset.checked_add(len) {
            Some(end) if end <= values.len() => end,
            _ => {
                return Err(Error::InvalidArgument {
                    reason: "copy range extends past the end of the source slice",
                })
            }
        };
        self.row_mut(row)[..len].copy_from_slice(&values[offset..end]);
        Ok(())
    }

    /// Overwrites the matrix with the identity: ones on the main diagonal,
    /// zeros everywhere else. Loading twice gives the same result as once.
    ///
    /// Fails with [`Error::InvalidArgument`] on a non-square matrix,
    /// leaving it untouched.
    pub fn load_identity(&mut self) -> Result<(), Error> {
        if !self.is_square() {
            return Err(Error::InvalidArgument {
                reason: "an identity matrix must be square",
            });
        }
        self.data.fill(T::zero());
        for i in 0..self.rows {
            self.data[i * self.cols + i] = T::one();
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    /// Builds an `R x C` matrix from rows given as nested arrays.
    fn from(rows: [[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);
        for row in rows {
            data.extend_from_slice(&row);
        }
        Self {
            rows: R,
            cols: C,
            data,
        }
    }
}
