//! macrosheet_engine - Sparse numeric sheet + macro commands.

pub mod engine;
pub mod error;

pub use error::{Result, SheetError};
