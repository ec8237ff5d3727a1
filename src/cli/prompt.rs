//! Line-oriented console I/O
//!
//! Wraps any reader/writer pair so the interactive loop can run against
//! stdin/stdout or in-memory buffers alike.

use std::io::{BufRead, Write};

use crate::error::{ExpenseError, ExpenseResult};

/// A prompting console over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line, without its line ending
    ///
    /// Returns `None` once the input is exhausted. A failed read is an
    /// [`ExpenseError::Input`]; a failed write stays an [`ExpenseError::Io`].
    pub fn prompt(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(|e| ExpenseError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| ExpenseError::Io(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ExpenseError::input(&e))?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Write text as-is
    pub fn print(&mut self, text: &str) -> ExpenseResult<()> {
        write!(self.output, "{}", text).map_err(|e| ExpenseError::Io(e.to_string()))
    }

    /// Write a line of text
    pub fn println(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text).map_err(|e| ExpenseError::Io(e.to_string()))
    }

    /// Give back the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_lines_until_eof() {
        let mut console = Console::new(Cursor::new("first\r\n second \n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(" second "));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = Console::new(Cursor::new("tail"), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("tail"));
    }

    #[test]
    fn test_undecodable_line_is_input_error_and_consumed() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"next\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let err = console.prompt("> ").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("next"));
    }
}
