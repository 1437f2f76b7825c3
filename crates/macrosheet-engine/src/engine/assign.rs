//! Assignment macros: single cell, uniform fill and incremental fill.
//!
//! Range validation is deliberately not uniform across kinds:
//! [`UniformRangeAssign`] rejects inverted ranges, while
//! [`IncrementalRangeAssign`] only requires non-negative corners and treats
//! an inverted range as a no-op.

use super::command::{CellRange, require_non_negative};
use super::sheet::Sheet;
use crate::error::{Result, SheetError};

/// Set a single cell to a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellAssign {
    row: i64,
    col: i64,
    value: f64,
}

impl CellAssign {
    pub fn new(row: i64, col: i64, value: f64) -> Result<Self> {
        require_non_negative(&[("row", row), ("col", col)])?;
        Ok(CellAssign { row, col, value })
    }

    pub(crate) fn apply<S: Sheet + ?Sized>(&self, sheet: &mut S) -> Result<()> {
        sheet.set(self.row, self.col, self.value)
    }
}

/// Set every cell in a rectangle to the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformRangeAssign {
    range: CellRange,
    value: f64,
}

impl UniformRangeAssign {
    /// Requires non-negative `from` corner and `to >= from` on both axes.
    /// A single-cell range is valid.
    pub fn new(
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
        value: f64,
    ) -> Result<Self> {
        require_non_negative(&[("from-row", from_row), ("from-col", from_col)])?;
        if to_row < from_row {
            return Err(SheetError::InvalidRange(format!(
                "to-row {} precedes from-row {}",
                to_row, from_row
            )));
        }
        if to_col < from_col {
            return Err(SheetError::InvalidRange(format!(
                "to-col {} precedes from-col {}",
                to_col, from_col
            )));
        }
        Ok(UniformRangeAssign {
            range: CellRange::new(from_row, from_col, to_row, to_col),
            value,
        })
    }

    pub fn range(&self) -> CellRange {
        self.range
    }

    pub(crate) fn apply<S: Sheet + ?Sized>(&self, sheet: &mut S) -> Result<()> {
        for (row, col) in self.range.cells() {
            sheet.set(row, col, self.value)?;
        }
        Ok(())
    }
}

/// Fill a rectangle row-major with `start`, `start + increment`, ...
///
/// The value a cell receives depends on its visiting rank, not on its
/// coordinates: the k-th cell visited gets `start + k * increment`
/// (accumulated, so subject to floating-point summation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IncrementalRangeAssign {
    range: CellRange,
    start: f64,
    increment: f64,
}

impl IncrementalRangeAssign {
    /// Requires all four corners non-negative. No ordering is enforced.
    pub fn new(
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
        start: f64,
        increment: f64,
    ) -> Result<Self> {
        require_non_negative(&[
            ("from-row", from_row),
            ("from-col", from_col),
            ("to-row", to_row),
            ("to-col", to_col),
        ])?;
        Ok(IncrementalRangeAssign {
            range: CellRange::new(from_row, from_col, to_row, to_col),
            start,
            increment,
        })
    }

    pub fn range(&self) -> CellRange {
        self.range
    }

    pub(crate) fn apply<S: Sheet + ?Sized>(&self, sheet: &mut S) -> Result<()> {
        let mut current = self.start;
        for (row, col) in self.range.cells() {
            sheet.set(row, col, current)?;
            current += self.increment;
        }
        Ok(())
    }
}
