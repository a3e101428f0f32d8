//! Canonical text rendering.

use std::fmt;

use crate::scalar::Scalar;

use super::base::Matrix;

/// Renders each row as a bracketed, comma-separated list on its own line, so
/// a 2 x 3 matrix prints as `"[a, b, c]\n[d, e, f]\n"`. Every row ends with
/// a newline, the last one included; a matrix with no rows renders as the
/// empty string.
impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            f.write_str("[")?;
            for (c, cell) in self.row(r).iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cell}")?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
