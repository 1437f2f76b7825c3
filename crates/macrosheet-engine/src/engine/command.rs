//! Macro commands: validated units of work applied to a sheet.
//!
//! [`MacroCommand`] is a closed set of macro kinds. Each variant wraps a
//! struct whose only constructor validates its parameters, so a command that
//! exists can always be executed without a cell-level failure against a
//! [`SparseSheet`](super::SparseSheet).
//!
//! Commands hold no reference to a sheet. They are `Copy`, immutable after
//! construction, and can be replayed against any number of sheets.

use tracing::debug;

use super::assign::{CellAssign, IncrementalRangeAssign, UniformRangeAssign};
use super::average::RangeAverage;
use super::sheet::Sheet;
use crate::error::{Result, SheetError};

/// Reject the first negative parameter, naming it in the error.
pub(crate) fn require_non_negative(params: &[(&str, i64)]) -> Result<()> {
    match params.iter().find(|(_, value)| *value < 0) {
        Some((name, value)) => Err(SheetError::InvalidRange(format!(
            "{} must be non-negative, got {}",
            name, value
        ))),
        None => Ok(()),
    }
}

/// A rectangle of cells from `(from_row, from_col)` to `(to_row, to_col)`,
/// both corners inclusive.
///
/// Iteration is row-major. A range whose `to` corner precedes its `from`
/// corner on either axis contains no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub from_row: i64,
    pub from_col: i64,
    pub to_row: i64,
    pub to_col: i64,
}

impl CellRange {
    pub fn new(from_row: i64, from_col: i64, to_row: i64, to_col: i64) -> CellRange {
        CellRange {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// True if either axis is inverted, i.e. the range holds no cells.
    pub fn is_inverted(&self) -> bool {
        self.to_row < self.from_row || self.to_col < self.from_col
    }

    /// Number of cells visited by [`CellRange::cells`], saturating at `usize::MAX`.
    pub fn cell_count(&self) -> usize {
        if self.is_inverted() {
            return 0;
        }
        let rows = (self.to_row as i128 - self.from_row as i128 + 1) as u128;
        let cols = (self.to_col as i128 - self.from_col as i128 + 1) as u128;
        rows.checked_mul(cols)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX)
    }

    /// Cells in row-major order: every column of a row before the next row.
    pub fn cells(self) -> impl Iterator<Item = (i64, i64)> {
        let (from_col, to_col) = (self.from_col, self.to_col);
        (self.from_row..=self.to_row)
            .flat_map(move |row| (from_col..=to_col).map(move |col| (row, col)))
    }
}

/// A validated, immutable unit of work over a sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MacroCommand {
    /// Set one cell.
    CellAssign(CellAssign),
    /// Set every cell of a rectangle to the same value.
    UniformRangeAssign(UniformRangeAssign),
    /// Fill a rectangle row-major with an arithmetic sequence.
    IncrementalRangeAssign(IncrementalRangeAssign),
    /// Write the mean of a rectangle to a destination cell.
    RangeAverage(RangeAverage),
}

impl MacroCommand {
    pub fn cell_assign(row: i64, col: i64, value: f64) -> Result<MacroCommand> {
        Ok(CellAssign::new(row, col, value)?.into())
    }

    pub fn uniform_range_assign(
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
        value: f64,
    ) -> Result<MacroCommand> {
        Ok(UniformRangeAssign::new(from_row, from_col, to_row, to_col, value)?.into())
    }

    pub fn incremental_range_assign(
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
        start: f64,
        increment: f64,
    ) -> Result<MacroCommand> {
        let command =
            IncrementalRangeAssign::new(from_row, from_col, to_row, to_col, start, increment)?;
        Ok(command.into())
    }

    pub fn range_average(
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
        dest_row: i64,
        dest_col: i64,
    ) -> Result<MacroCommand> {
        Ok(RangeAverage::new(from_row, from_col, to_row, to_col, dest_row, dest_col)?.into())
    }

    /// Short name of the macro kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            MacroCommand::CellAssign(_) => "cell-assign",
            MacroCommand::UniformRangeAssign(_) => "uniform-range-assign",
            MacroCommand::IncrementalRangeAssign(_) => "incremental-range-assign",
            MacroCommand::RangeAverage(_) => "range-average",
        }
    }

    /// Number of cells this command visits when executed.
    /// `RangeAverage` counts the cells it reads, not the destination.
    pub fn cells_touched(&self) -> usize {
        match self {
            MacroCommand::CellAssign(_) => 1,
            MacroCommand::UniformRangeAssign(m) => m.range().cell_count(),
            MacroCommand::IncrementalRangeAssign(m) => m.range().cell_count(),
            MacroCommand::RangeAverage(m) => m.range().cell_count(),
        }
    }

    /// Apply this command to the sheet.
    pub fn execute<S: Sheet + ?Sized>(&self, sheet: &mut S) -> Result<()> {
        debug!(kind = self.kind(), cells = self.cells_touched(), "executing macro");
        match self {
            MacroCommand::CellAssign(m) => m.apply(sheet),
            MacroCommand::UniformRangeAssign(m) => m.apply(sheet),
            MacroCommand::IncrementalRangeAssign(m) => m.apply(sheet),
            MacroCommand::RangeAverage(m) => m.apply(sheet),
        }
    }
}

impl From<CellAssign> for MacroCommand {
    fn from(m: CellAssign) -> Self {
        MacroCommand::CellAssign(m)
    }
}

impl From<UniformRangeAssign> for MacroCommand {
    fn from(m: UniformRangeAssign) -> Self {
        MacroCommand::UniformRangeAssign(m)
    }
}

impl From<IncrementalRangeAssign> for MacroCommand {
    fn from(m: IncrementalRangeAssign) -> Self {
        MacroCommand::IncrementalRangeAssign(m)
    }
}

impl From<RangeAverage> for MacroCommand {
    fn from(m: RangeAverage) -> Self {
        MacroCommand::RangeAverage(m)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellRange, MacroCommand, require_non_negative};
    use crate::engine::{Sheet, SparseSheet};
    use crate::error::SheetError;

    #[test]
    fn test_require_non_negative_names_first_offender() {
        assert!(require_non_negative(&[("a", 0), ("b", 3)]).is_ok());
        let err = require_non_negative(&[("a", 0), ("b", -1), ("c", -2)]).unwrap_err();
        assert_eq!(
            err,
            SheetError::InvalidRange("b must be non-negative, got -1".to_string())
        );
    }

    #[test]
    fn test_range_cells_are_row_major() {
        let cells: Vec<_> = CellRange::new(0, 0, 1, 2).cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let rows_inverted = CellRange::new(3, 0, 1, 0);
        let cols_inverted = CellRange::new(0, 3, 0, 1);
        assert!(rows_inverted.is_inverted());
        assert_eq!(rows_inverted.cells().count(), 0);
        assert_eq!(rows_inverted.cell_count(), 0);
        assert_eq!(cols_inverted.cells().count(), 0);
        assert_eq!(cols_inverted.cell_count(), 0);
    }

    #[test]
    fn test_cell_count_saturates() {
        let huge = CellRange::new(0, 0, i64::MAX, i64::MAX);
        assert_eq!(huge.cell_count(), usize::MAX);
    }

    #[test]
    fn test_only_executed_commands_change_the_sheet() {
        let mut sheet = SparseSheet::new();
        sheet.set(0, 0, 2.0).unwrap();
        let fill = MacroCommand::uniform_range_assign(0, 0, 4, 4, 1.0).unwrap();
        let average = MacroCommand::range_average(0, 0, 1, 1, 5, 5).unwrap();

        average.execute(&mut sheet).unwrap();

        // The fill was built before the average ran but never executed.
        assert_eq!(sheet.get(0, 0).unwrap(), 2.0);
        assert!(sheet.is_empty(1, 1).unwrap());
        assert_eq!(sheet.get(5, 5).unwrap(), 0.5);
        assert_eq!(sheet.cell_count(), 2);
        assert_eq!((fill.kind(), fill.cells_touched()), ("uniform-range-assign", 25));
    }

    #[test]
    fn test_command_replays_identically_on_different_sheets() {
        let command = MacroCommand::incremental_range_assign(0, 0, 0, 2, 10.0, -2.5).unwrap();
        let mut first = SparseSheet::new();
        let mut second = SparseSheet::new();
        second.set(5, 5, 1.0).unwrap();

        command.execute(&mut first).unwrap();
        command.execute(&mut second).unwrap();

        for col in 0..3 {
            assert_eq!(first.get(0, col).unwrap(), second.get(0, col).unwrap());
        }
        assert_eq!(first.get(0, 2).unwrap(), 5.0);
    }

    #[test]
    fn test_execute_through_trait_object() {
        let command = MacroCommand::cell_assign(1, 1, 4.0).unwrap();
        let mut sheet = SparseSheet::new();
        let dyn_sheet: &mut dyn Sheet = &mut sheet;
        command.execute(dyn_sheet).unwrap();
        assert_eq!(sheet.get(1, 1).unwrap(), 4.0);
    }

    #[test]
    fn test_kind_and_cells_touched() {
        let fill = MacroCommand::uniform_range_assign(0, 0, 2, 1, 0.0).unwrap();
        assert_eq!(fill.kind(), "uniform-range-assign");
        assert_eq!(fill.cells_touched(), 6);

        let inverted = MacroCommand::range_average(4, 4, 0, 0, 9, 9).unwrap();
        assert_eq!(inverted.kind(), "range-average");
        assert_eq!(inverted.cells_touched(), 0);
    }
}
