//! Line-oriented prompting.
//!
//! Every read consumes one whole line, so rejecting a value also discards
//! whatever else was typed on that line. Lines are decoded lossily; bytes that
//! are not UTF-8 never fail a read, they just fail to parse. End of input
//! surfaces as
//! [`RosterError::InputClosed`] so callers can unwind instead of spinning.

use super::render;
use roster::api::CmdMessage;
use roster::error::{Result, RosterError};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Typed at a cancelable prompt to abandon the current command.
pub const CANCEL_TOKEN: &str = "cancel";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` (no newline) and returns the reply without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks until the reply parses as a `T`.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        self.ask_number_where(prompt, |_| true)
    }

    /// Asks until the reply parses as a `T` that `accept` allows.
    pub fn ask_number_where<T: FromStr>(
        &mut self,
        prompt: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T> {
        loop {
            let reply = self.ask(prompt)?;
            match reply.trim().parse() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => render::write_message(
                    &mut self.output,
                    &CmdMessage::warning("Invalid input! Please enter a valid number."),
                )?,
            }
        }
    }

    /// Returns `None` when the reply is exactly [`CANCEL_TOKEN`].
    pub fn ask_cancelable(&mut self, prompt: &str) -> Result<Option<String>> {
        let reply = self.ask(prompt)?;
        if reply == CANCEL_TOKEN {
            render::write_message(
                &mut self.output,
                &CmdMessage::info("Operation canceled. Returning to main menu."),
            )?;
            return Ok(None);
        }
        Ok(Some(reply))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(RosterError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
