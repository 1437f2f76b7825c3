//! Range average macro.

use super::command::{CellRange, require_non_negative};
use super::sheet::Sheet;
use crate::error::Result;

/// Write the mean of a rectangle of cells to a destination cell.
///
/// Unwritten cells count as 0.0. An inverted range visits no cells and the
/// destination is set to 0.0. The destination may lie inside the range; the
/// sum is complete before the destination is written, so it contributes its
/// value from before this command ran.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeAverage {
    range: CellRange,
    dest_row: i64,
    dest_col: i64,
}

impl RangeAverage {
    /// Requires all six coordinates non-negative. No ordering is enforced.
    pub fn new(
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
        dest_row: i64,
        dest_col: i64,
    ) -> Result<Self> {
        require_non_negative(&[
            ("from-row", from_row),
            ("from-col", from_col),
            ("to-row", to_row),
            ("to-col", to_col),
            ("dest-row", dest_row),
            ("dest-col", dest_col),
        ])?;
        Ok(RangeAverage {
            range: CellRange::new(from_row, from_col, to_row, to_col),
            dest_row,
            dest_col,
        })
    }

    pub fn range(&self) -> CellRange {
        self.range
    }

    pub(crate) fn apply<S: Sheet + ?Sized>(&self, sheet: &mut S) -> Result<()> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for (row, col) in self.range.cells() {
            sum += sheet.get(row, col)?;
            count += 1;
        }
        let average = if count > 0 { sum / count as f64 } else { 0.0 };
        sheet.set(self.dest_row, self.dest_col, average)
    }
}
