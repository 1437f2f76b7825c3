//! Running macro commands against a sheet.

use super::command::MacroCommand;
use super::sheet::{Sheet, SparseSheet};
use crate::error::Result;

/// A sheet that can run [`MacroCommand`]s against itself.
///
/// Callers that only read and write cells should depend on [`Sheet`]; this
/// trait is the narrower capability handed to code that dispatches macros.
pub trait MacroSheet: Sheet {
    fn execute(&mut self, command: &MacroCommand) -> Result<()>;
}

impl MacroSheet for SparseSheet {
    fn execute(&mut self, command: &MacroCommand) -> Result<()> {
        command.execute(self)
    }
}
