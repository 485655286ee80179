//! # Paced Output
//!
//! Presentation helpers for text games: printing a sentence one word at a
//! time, sleeping, and waiting for the player to press enter.
//!
//! The delay between words comes from
//! [`TerminalOptions::slow_print_delay`](crate::utils::TerminalOptions). Hints
//! for refused answers never go through here.
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::error::PromptError;
use crate::utils::terminal::{EofPolicy, Terminal};

/// Sleeps for `duration`. A zero duration returns immediately.
pub fn wait(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Writes `text` word by word, pausing after each word, then a newline.
    ///
    /// Words are separated by single spaces; runs of spaces are kept as typed.
    pub fn print_slowly(&mut self, text: &str) -> Result<(), PromptError> {
        let delay = self.options.slow_print_delay;
        let mut words = text.split(' ').peekable();
        while let Some(word) = words.next() {
            write!(self.writer, "{}", word)?;
            if words.peek().is_some() {
                write!(self.writer, " ")?;
            }
            self.writer.flush()?;
            wait(delay);
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Writes `(Press enter)` and waits for one line, which is discarded.
    pub fn pause(&mut self) -> Result<(), PromptError> {
        write!(self.writer, "(Press enter)")?;
        self.writer.flush()?;
        match self.read_raw()? {
            None if self.options.eof == EofPolicy::Fail => Err(PromptError::Closed),
            _ => Ok(()),
        }
    }
}
