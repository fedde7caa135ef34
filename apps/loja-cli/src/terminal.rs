//! Line-oriented terminal over any `BufRead` + `Write` pair.
//!
//! The binary wraps locked stdin/stdout; tests wrap a `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes one line.
    pub fn line(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `label` without a newline and reads the answer.
    ///
    /// Only the line ending is removed; numeric parsing trims on its own, so
    /// a padded product code stays padded. Returns [`CliError::InputClosed`]
    /// at end of input.
    pub fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(CliError::InputClosed);
        }
        let line = answer.strip_suffix('\n').unwrap_or(&answer);
        Ok(line.strip_suffix('\r').unwrap_or(line).to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_only_line_ending() {
        let mut term = Terminal::new(Cursor::new("  3 \r\n4"), Vec::new());

        assert_eq!(term.prompt("Quantos? ").unwrap(), "  3 ");
        assert_eq!(term.prompt("Quantos? ").unwrap(), "4");
        assert_eq!(
            String::from_utf8(term.into_output()).unwrap(),
            "Quantos? Quantos? "
        );
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(matches!(term.prompt("> "), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_blank_answer_is_not_end_of_input() {
        let mut term = Terminal::new(Cursor::new("\n"), Vec::new());
        assert_eq!(term.prompt("> ").unwrap(), "");
    }
}
