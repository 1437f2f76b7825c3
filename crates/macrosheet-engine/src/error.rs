//! Error types for the Macrosheet engine.

use thiserror::Error;

/// Errors raised by sheet access and macro construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// A row or column passed to a sheet operation was negative.
    #[error("Row or column cannot be negative: ({row}, {col})")]
    InvalidCoordinate { row: i64, col: i64 },

    /// Macro parameters violate the preconditions of that macro kind.
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
