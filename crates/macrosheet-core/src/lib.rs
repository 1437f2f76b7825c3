//! macrosheet-core - Line-oriented instruction interpreter over a macro sheet.

pub mod controller;
pub mod error;
pub mod instruction;
pub mod labels;
pub mod tokens;

pub use controller::{Controller, SessionOptions, SessionSummary};
pub use error::{ControllerError, Result};
pub use instruction::Instruction;

pub use macrosheet_engine::engine::{MacroSheet, Sheet, SparseSheet};
