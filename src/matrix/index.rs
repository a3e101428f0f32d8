//! `(row, col)` tuple indexing.

use std::ops::{Index, IndexMut};

use super::base::Matrix;

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if either index is out of bounds. The column is checked on its
    /// own; a column index past the row's end never wraps into the next row.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) is out of bounds for a {} x {} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) is out of bounds for a {} x {} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
