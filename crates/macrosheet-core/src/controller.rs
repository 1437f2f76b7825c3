//! Interactive session loop.
//!
//! The controller reads instructions from any `BufRead`, applies them to a
//! [`MacroSheet`], and writes prompts, values and error reports to any
//! `Write`. Errors from a single instruction are reported and the session
//! moves on to the next input line; only output failures end it early.

use std::io::{BufRead, Write};

use macrosheet_engine::engine::MacroSheet;
use tracing::{debug, warn};

use crate::error::{ControllerError, Result};
use crate::instruction::{Instruction, read_instruction};
use crate::labels::cell_name;
use crate::tokens::Tokens;

pub const DEFAULT_PROMPT: &str = "Type instruction: ";

const WELCOME: &str = "Welcome to the spreadsheet program!";
const FAREWELL: &str = "Thank you for using this program!";

const MENU: &[&str] = &[
    "Supported user instructions are:",
    "assign-value row-num col-num value (set a cell to a value)",
    "print-value row-num col-num (print the value at a given cell)",
    "bulk-assign-value from-row from-col to-row to-col value (set a range to one value)",
    "range-assign from-row from-col to-row to-col start-value increment (fill a range row by row)",
    "average from-row from-col to-row to-col dest-row dest-col (average a range into a cell)",
    "menu (print supported instruction list)",
    "q or quit (quit the program)",
];

/// Presentation settings for a session.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// Text written before each instruction is read.
    pub prompt: String,
    /// Print the welcome message and menu on start.
    pub banner: bool,
    /// Print the prompt before each instruction.
    pub prompts: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            prompts: true,
        }
    }
}

impl SessionOptions {
    /// Options with banner and prompts disabled, for scripted input.
    pub fn quiet() -> Self {
        SessionOptions {
            banner: false,
            prompts: false,
            ..SessionOptions::default()
        }
    }
}

/// Counts reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Instructions read, excluding the final quit.
    pub instructions: usize,
    /// Instructions that were reported as errors.
    pub errors: usize,
}

/// Format a cell value for display, always showing a fractional part
/// for finite values (`1.0`, `2.5`, `1.0e16`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{}.0e{}", mantissa, exponent)
        }
        _ => text,
    }
}

pub struct Controller<R, W> {
    tokens: Tokens<R>,
    out: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_options(input, output, SessionOptions::default())
    }

    pub fn with_options(input: R, output: W, options: SessionOptions) -> Self {
        Controller {
            tokens: Tokens::new(input),
            out: output,
            options,
        }
    }

    /// Run instructions against the sheet until `quit` or end of input.
    pub fn run<S: MacroSheet + ?Sized>(&mut self, sheet: &mut S) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        if self.options.banner {
            self.welcome()?;
        }

        while self.tokens.has_next()? {
            if self.options.prompts {
                write!(self.out, "{}", self.options.prompt)?;
                self.out.flush()?;
            }

            let outcome = match read_instruction(&mut self.tokens) {
                Ok(None) | Ok(Some(Instruction::Quit)) => break,
                Ok(Some(instruction)) => {
                    debug!(?instruction, "parsed instruction");
                    self.apply(instruction, sheet)
                }
                Err(e) => Err(e),
            };
            summary.instructions += 1;

            match outcome {
                Ok(()) => {}
                Err(e @ ControllerError::Io(_)) => return Err(e),
                Err(e @ ControllerError::MissingArgument { .. }) => {
                    summary.errors += 1;
                    self.report(&e)?;
                    break;
                }
                Err(e) => {
                    summary.errors += 1;
                    self.report(&e)?;
                    self.tokens.skip_line();
                }
            }
        }

        writeln!(self.out, "{}", FAREWELL)?;
        self.out.flush()?;
        Ok(summary)
    }

    fn apply<S: MacroSheet + ?Sized>(
        &mut self,
        instruction: Instruction,
        sheet: &mut S,
    ) -> Result<()> {
        match instruction {
            Instruction::AssignValue { row, col, value } => {
                sheet.set(row, col, value)?;
                debug!(cell = %cell_name(row, col), value, "assigned value");
            }
            Instruction::PrintValue { row, col } => {
                let value = sheet.get(row, col)?;
                writeln!(self.out, "Value: {}", format_value(value))?;
            }
            Instruction::Macro(command) => sheet.execute(&command)?,
            Instruction::Menu => self.welcome()?,
            Instruction::Unknown(name) => {
                writeln!(self.out, "Undefined instruction: {}", name)?;
            }
            Instruction::Quit => {}
        }
        Ok(())
    }

    fn report(&mut self, error: &ControllerError) -> Result<()> {
        warn!(%error, "instruction failed");
        writeln!(self.out, "Error: {}", error)?;
        Ok(())
    }

    fn welcome(&mut self) -> Result<()> {
        writeln!(self.out, "{}", WELCOME)?;
        for line in MENU {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Consume the controller, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
