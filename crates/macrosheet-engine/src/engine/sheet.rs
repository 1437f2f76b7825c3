//! Sparse sheet storage.
//!
//! - [`Sheet`] - Direct cell access (get/set/emptiness/bounds)
//! - [`SparseSheet`] - `HashMap`-backed store holding only written cells
//!
//! Bounds are high-water marks: `width`/`height` grow to cover every write
//! ever made and are never reduced.

use std::collections::HashMap;

use tracing::trace;

use super::position::CellPosition;
use crate::error::Result;

/// Cell-level access to a numeric sheet.
///
/// All coordinates are zero-indexed; every operation fails with
/// [`SheetError::InvalidCoordinate`](crate::SheetError::InvalidCoordinate)
/// when a row or column is negative.
pub trait Sheet {
    /// Value at the cell, or 0.0 if it was never written.
    fn get(&self, row: i64, col: i64) -> Result<f64>;

    /// Store a value, raising the sheet bounds to cover the cell.
    fn set(&mut self, row: i64, col: i64, value: f64) -> Result<()>;

    /// True if no write has ever targeted this cell.
    fn is_empty(&self, row: i64, col: i64) -> Result<bool>;

    /// One past the highest column ever written.
    fn width(&self) -> usize;

    /// One past the highest row ever written.
    fn height(&self) -> usize;
}

/// Sparse numeric sheet. Only explicitly written cells are stored.
#[derive(Clone, Debug, Default)]
pub struct SparseSheet {
    cells: HashMap<CellPosition, f64>,
    width: usize,
    height: usize,
}

impl SparseSheet {
    /// Create an empty sheet with zero bounds.
    pub fn new() -> Self {
        SparseSheet {
            cells: HashMap::new(),
            width: 0,
            height: 0,
        }
    }

    /// Number of cells that have been written at least once.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl Sheet for SparseSheet {
    fn get(&self, row: i64, col: i64) -> Result<f64> {
        let pos = CellPosition::try_new(row, col)?;
        Ok(self.cells.get(&pos).copied().unwrap_or(0.0))
    }

    fn set(&mut self, row: i64, col: i64, value: f64) -> Result<()> {
        let pos = CellPosition::try_new(row, col)?;
        trace!(%pos, value, "set cell");
        self.cells.insert(pos, value);
        self.height = self.height.max(pos.row.saturating_add(1));
        self.width = self.width.max(pos.col.saturating_add(1));
        Ok(())
    }

    fn is_empty(&self, row: i64, col: i64) -> Result<bool> {
        let pos = CellPosition::try_new(row, col)?;
        Ok(!self.cells.contains_key(&pos))
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}
