//! Line-oriented console used by the interactive menus.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Prompts and messages over any reader/writer pair.
///
/// `prompt` returns `None` once the input is exhausted, which the menus
/// treat as a request to leave.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line, without its line ending.
    pub(crate) fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub(crate) fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub(crate) fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub(crate) fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", text.if_supports_color(Stdout, |t| t.bold()))
    }

    pub(crate) fn success(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text.if_supports_color(Stdout, |t| t.green()))
    }

    pub(crate) fn warn(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text.if_supports_color(Stdout, |t| t.yellow()))
    }

    pub(crate) fn error(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text.if_supports_color(Stdout, |t| t.red()))
    }

    #[cfg(test)]
    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }
}
