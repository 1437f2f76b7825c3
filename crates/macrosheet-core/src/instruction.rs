//! Instruction parsing.
//!
//! Each instruction is a name followed by its arguments, all separated by
//! whitespace. Rows are letter labels, columns are 1-based numbers and are
//! converted to zero-indexed coordinates here. Macro instructions build a
//! validated [`MacroCommand`] as part of parsing.

use std::io::BufRead;

use macrosheet_engine::engine::MacroCommand;

use crate::error::{ControllerError, Result};
use crate::labels::row_index;
use crate::tokens::Tokens;

/// One parsed instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// `assign-value row col value`
    AssignValue { row: i64, col: i64, value: f64 },
    /// `print-value row col`
    PrintValue { row: i64, col: i64 },
    /// `bulk-assign-value`, `range-assign` or `average`
    Macro(MacroCommand),
    /// `menu`
    Menu,
    /// `q` or `quit`
    Quit,
    /// Any unrecognised instruction name.
    Unknown(String),
}

/// Pulls typed arguments for a single instruction.
struct Args<'a, R> {
    tokens: &'a mut Tokens<R>,
    instruction: &'a str,
}

impl<R: BufRead> Args<'_, R> {
    fn next(&mut self) -> Result<String> {
        self.tokens
            .next_token()?
            .ok_or_else(|| ControllerError::MissingArgument {
                instruction: self.instruction.to_string(),
            })
    }

    fn row(&mut self) -> Result<i64> {
        row_index(&self.next()?)
    }

    /// 1-based column number, returned zero-indexed.
    fn col(&mut self) -> Result<i64> {
        let token = self.next()?;
        token
            .parse::<i64>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or(ControllerError::InvalidNumber {
                token,
                expected: "column number",
            })
    }

    fn number(&mut self) -> Result<f64> {
        let token = self.next()?;
        token
            .parse::<f64>()
            .map_err(|_| ControllerError::InvalidNumber {
                token,
                expected: "number",
            })
    }

    fn cell(&mut self) -> Result<(i64, i64)> {
        let row = self.row()?;
        let col = self.col()?;
        Ok((row, col))
    }
}

/// Read the next instruction. Returns `None` at end of input.
///
/// All arguments are consumed before any macro is constructed, so a
/// validation failure leaves the stream positioned after the instruction.
pub fn read_instruction<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Option<Instruction>> {
    let Some(name) = tokens.next_token()? else {
        return Ok(None);
    };
    let mut args = Args {
        tokens,
        instruction: &name,
    };

    let instruction = match name.as_str() {
        "q" | "quit" => Instruction::Quit,
        "menu" => Instruction::Menu,
        "assign-value" => {
            let (row, col) = args.cell()?;
            let value = args.number()?;
            Instruction::AssignValue { row, col, value }
        }
        "print-value" => {
            let (row, col) = args.cell()?;
            Instruction::PrintValue { row, col }
        }
        "bulk-assign-value" => {
            let (from_row, from_col) = args.cell()?;
            let (to_row, to_col) = args.cell()?;
            let value = args.number()?;
            Instruction::Macro(MacroCommand::uniform_range_assign(
                from_row, from_col, to_row, to_col, value,
            )?)
        }
        "range-assign" => {
            let (from_row, from_col) = args.cell()?;
            let (to_row, to_col) = args.cell()?;
            let start = args.number()?;
            let increment = args.number()?;
            Instruction::Macro(MacroCommand::incremental_range_assign(
                from_row, from_col, to_row, to_col, start, increment,
            )?)
        }
        "average" => {
            let (from_row, from_col) = args.cell()?;
            let (to_row, to_col) = args.cell()?;
            let (dest_row, dest_col) = args.cell()?;
            Instruction::Macro(MacroCommand::range_average(
                from_row, from_col, to_row, to_col, dest_row, dest_col,
            )?)
        }
        _ => Instruction::Unknown(name.clone()),
    };
    Ok(Some(instruction))
}
