//! Whitespace tokenizer over buffered input.
//!
//! Lines are read lazily, one at a time, so an interactive session only
//! blocks when it actually needs another token. An instruction's arguments
//! may continue on following lines. Bytes that are not valid UTF-8 are
//! replaced with U+FFFD, so they surface as bad tokens rather than read errors.

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub struct Tokens<R> {
    reader: R,
    /// Remaining tokens of the most recently read line.
    pending: VecDeque<String>,
    exhausted: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Read lines until a token is available or input ends.
    fn fill(&mut self) -> io::Result<()> {
        let mut buf = Vec::new();
        while self.pending.is_empty() && !self.exhausted {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                self.exhausted = true;
            } else {
                let line = String::from_utf8_lossy(&buf);
                self.pending
                    .extend(line.split_whitespace().map(str::to_string));
            }
        }
        Ok(())
    }

    /// True if another token is available, reading input if needed.
    pub fn has_next(&mut self) -> io::Result<bool> {
        self.fill()?;
        Ok(!self.pending.is_empty())
    }

    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }

    /// Drop the unread remainder of the current line.
    pub fn skip_line(&mut self) {
        self.pending.clear();
    }
}
