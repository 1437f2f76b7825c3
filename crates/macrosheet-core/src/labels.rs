//! Row label parsing and formatting.
//!
//! Rows are named with letters in bijective base 26, case-insensitively:
//! `A` is row 0, `Z` is 25, `AA` is 26. Columns are written as 1-based
//! numbers, so the zero-indexed cell (1, 2) reads as `B3`.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ControllerError, Result};

fn row_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+$").unwrap())
}

/// Zero-indexed row for a letter label.
pub fn row_index(label: &str) -> Result<i64> {
    if !row_label_re().is_match(label) {
        return Err(ControllerError::InvalidRow(label.to_string()));
    }
    let mut acc = 0i64;
    for c in label.to_ascii_uppercase().bytes() {
        let digit = (c - b'A') as i64 + 1;
        acc = acc
            .checked_mul(26)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| ControllerError::InvalidRow(label.to_string()))?;
    }
    Ok(acc - 1)
}

/// Letter label for a zero-indexed row (0 -> A, 25 -> Z, 26 -> AA).
pub fn row_label(row: usize) -> String {
    let mut result = String::new();
    let mut n = row as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

/// Human-readable name for a zero-indexed cell, e.g. `B3` for (1, 2).
/// Negative coordinates fall back to `(row, col)`.
pub fn cell_name(row: i64, col: i64) -> String {
    match (usize::try_from(row), col.checked_add(1)) {
        (Ok(r), Some(c)) if c > 0 => format!("{}{}", row_label(r), c),
        _ => format!("({}, {})", row, col),
    }
}
