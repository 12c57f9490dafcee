//! Line-oriented console used by every prompt and report.
//!
//! The explorer talks to the user through a [`Console`] generic over its
//! input and output streams, so tests can script a whole session with an
//! in-memory cursor and capture what was printed.

use std::io::{BufRead, Write};

use bikeshare_core::Result;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a trailing newline, flush, and read one
    /// line of input. Returns the trimmed answer, or `None` once the input
    /// stream reaches end-of-file.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print one line of output.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print an empty line.
    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Give back the underlying streams, letting tests inspect the output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
