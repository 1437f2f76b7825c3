//! Error types for Macrosheet core.

use macrosheet_engine::SheetError;
use thiserror::Error;

/// Errors that can occur while interpreting instructions
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Expected {expected}, got '{token}'")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },

    #[error("Missing argument for '{instruction}'")]
    MissingArgument { instruction: String },
}

pub type Result<T> = std::result::Result<T, ControllerError>;
