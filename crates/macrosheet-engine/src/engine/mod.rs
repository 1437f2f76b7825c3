//! Sheet engine API.
//!
//! This module provides the storage and macro layer of the spreadsheet:
//!
//! - [`CellPosition`] - Zero-indexed row/column key with coordinate validation
//! - [`Sheet`], [`SparseSheet`] - Cell access capability and its sparse store
//! - [`CellRange`] - Row-major rectangle iteration shared by range macros
//! - [`MacroCommand`] - Validated, immutable multi-cell units of work
//! - [`MacroSheet`] - A sheet that can run macro commands against itself

mod assign;
mod average;
mod command;
mod position;
mod runner;
mod sheet;

pub use assign::{CellAssign, IncrementalRangeAssign, UniformRangeAssign};
pub use average::RangeAverage;
pub use command::{CellRange, MacroCommand};
pub use position::CellPosition;
pub use runner::MacroSheet;
pub use sheet::{Sheet, SparseSheet};
