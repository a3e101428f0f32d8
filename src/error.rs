//! Errors for checked matrix operations.

use thiserror::Error;

/// Failure raised by a checked matrix operation.
///
/// Every check runs before any cell is written, so a failed operation never
/// leaves its receiver partially mutated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A row or column index at or past the matrix bounds.
    #[error("index ({row}, {col}) is out of bounds for a {rows} x {cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// An argument the receiving matrix cannot honor: a value slice wider
    /// than its columns, a copy range past the end of its source, or an
    /// identity load on a non-square matrix.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// Operand shapes incompatible with the requested operation. Addition
    /// and subtraction need equal shapes; multiplication needs the left
    /// column count to equal the right row count.
    #[error("Expected {expected_rows} rows and {expected_cols} columns. Received {received_rows} rows and {received_cols} columns.")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        received_rows: usize,
        received_cols: usize,
    },
}
