//! Cell positions and coordinate validation.
//!
//! Sheet operations take signed coordinates so that negative input can be
//! reported instead of being unrepresentable. A [`CellPosition`] is only ever
//! built from coordinates that passed validation, so stored keys are always
//! non-negative.
//!
//! # Examples
//!
//! ```
//! use macrosheet_engine::engine::CellPosition;
//!
//! let pos = CellPosition::try_new(2, 1).unwrap();
//! assert_eq!(pos.row, 2);
//! assert!(CellPosition::try_new(-1, 0).is_err());
//! ```

use std::fmt;

use crate::error::{Result, SheetError};

/// A position in the sheet by row and column indices (0-indexed).
///
/// Ordering is row-major: all columns of a row sort before the next row.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> CellPosition {
        CellPosition { row, col }
    }

    /// Validate signed coordinates.
    /// Fails with [`SheetError::InvalidCoordinate`] if either is negative.
    pub fn try_new(row: i64, col: i64) -> Result<CellPosition> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => Ok(CellPosition::new(r, c)),
            _ => Err(SheetError::InvalidCoordinate { row, col }),
        }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
