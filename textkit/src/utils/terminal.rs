//! # Terminal Input Helper
//!
//! This module provides the [`Terminal`], which asks the user for input and
//! keeps asking until the answer satisfies a [`Validate`] rule.
//!
//! ## Features
//! - Writes a ` :` marker before every read and blocks for one line.
//! - Re-prompts on malformed answers after printing a hint. Bad input is never
//!   an error.
//! - Typed prompts for options, integers, decimals and yes/no, bounded or not.
//! - Re-askable question blocks via [`Terminal::ask`] / [`Terminal::ask_again`].
//!
//! ## Usage
//!
//! ### Example 1: Bounded integer
//! ```rust,no_run
//! use textkit::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let threads = terminal.input_int_between(1, 16)?;
//! println!("Threads: {}", threads);
//! # Ok::<(), textkit::PromptError>(())
//! ```
//!
//! ### Example 2: Asking again
//! ```rust
//! use std::io::Cursor;
//! use textkit::utils::Terminal;
//!
//! let mut terminal = Terminal::new(Cursor::new("2\n2\n1\n"), Vec::new());
//! let mut x = 0;
//! terminal.ask(|t| {
//!     x = t.input_int_range(1..=3)?;
//!     if x == 2 {
//!         t.ask_again();
//!     }
//!     Ok(())
//! })?;
//! assert_eq!(x, 1);
//! # Ok::<(), textkit::PromptError>(())
//! ```
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;
use std::time::Duration;

use log::{debug, warn};

use crate::error::PromptError;
use crate::retry::RetryStack;
use crate::utils::sanitize::{
    IntBetween, IsInt, IsReal, IsYesOrNo, OneOf, RealBetween, Rejection, Validate, YesOrNo,
};

/// Written before every read.
pub const PROMPT_MARKER: &str = " :";

/// What a read does when the input stream has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    /// Write the marker again and keep reading.
    #[default]
    Retry,
    /// Give up with [`PromptError::Closed`].
    Fail,
}

/// Settings of a [`Terminal`].
///
/// - `slow_print_delay`: pause after every word of
///   [`Terminal::print_slowly`] (100 ms by default)
/// - `eof`: behaviour on end of input ([`EofPolicy::Retry`] by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    pub slow_print_delay: Duration,
    pub eof: EofPolicy,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            slow_print_delay: Duration::from_millis(100),
            eof: EofPolicy::Retry,
        }
    }
}

impl TerminalOptions {
    pub fn with_slow_print_delay(mut self, delay: Duration) -> Self {
        self.slow_print_delay = delay;
        self
    }

    pub fn with_eof(mut self, eof: EofPolicy) -> Self {
        self.eof = eof;
        self
    }
}

/// One interactive conversation: an input stream, an output stream and the
/// conversation's own [`RetryStack`].
pub struct Terminal<R, W> {
    pub(crate) reader: R,
    pub(crate) writer: W,
    pub(crate) options: TerminalOptions,
    retry: RetryStack,
    rejections: usize,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            options: TerminalOptions::default(),
            retry: RetryStack::new(),
            rejections: 0,
        }
    }

    pub fn with_options(mut self, options: TerminalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TerminalOptions {
        &mut self.options
    }

    /// How many hints this terminal has printed for refused answers.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes the prompt marker and reads one line, without its line ending.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than refused, so a
    /// garbled answer reaches the validator and gets a hint like any other.
    pub fn read_line(&mut self) -> Result<String, PromptError> {
        let mut warned = false;
        loop {
            write!(self.writer, "{}", PROMPT_MARKER)?;
            self.writer.flush()?;

            match self.read_raw()? {
                Some(line) => return Ok(line),
                None => match self.options.eof {
                    EofPolicy::Retry => {
                        if !warned {
                            warn!("input stream ended, prompting again");
                            warned = true;
                        }
                    }
                    EofPolicy::Fail => return Err(PromptError::Closed),
                },
            }
        }
    }

    /// Reads one line without writing anything. `None` on end of input.
    pub(crate) fn read_raw(&mut self) -> Result<Option<String>, PromptError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Free text input, returned as typed.
    pub fn input(&mut self) -> Result<String, PromptError> {
        self.read_line()
    }

    /// Reads answers until one passes `rule`, printing the rule's hint after
    /// every refused answer. The line reaches `rule` exactly as typed.
    pub fn prompt_with<V: Validate>(&mut self, rule: &V) -> Result<V::Output, PromptError> {
        loop {
            let line = self.read_line()?;
            match rule.validate(&line) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.reject(&line, &rejection)?,
            }
        }
    }

    fn reject(&mut self, line: &str, rejection: &Rejection) -> Result<(), PromptError> {
        debug!("refused answer {:?}: {}", line, rejection);
        self.rejections += 1;
        writeln!(self.writer, "{}", rejection)?;
        Ok(())
    }

    /// The answer must be one of `options`. See also [`input_options!`](crate::input_options).
    pub fn input_options<S: AsRef<str>>(&mut self, options: &[S]) -> Result<String, PromptError> {
        self.prompt_with(&OneOf::new(options.iter().map(|option| option.as_ref())))
    }

    pub fn input_int(&mut self) -> Result<i64, PromptError> {
        self.prompt_with(&IsInt)
    }

    /// An integer in `[lo, hi]`.
    pub fn input_int_between(&mut self, lo: i64, hi: i64) -> Result<i64, PromptError> {
        self.prompt_with(&IntBetween::new(lo, hi))
    }

    pub fn input_int_range(&mut self, range: RangeInclusive<i64>) -> Result<i64, PromptError> {
        self.prompt_with(&IntBetween::from(range))
    }

    pub fn input_double(&mut self) -> Result<f64, PromptError> {
        self.prompt_with(&IsReal)
    }

    /// A decimal number in `[lo, hi]`.
    pub fn input_double_between(&mut self, lo: f64, hi: f64) -> Result<f64, PromptError> {
        self.prompt_with(&RealBetween::new(lo, hi))
    }

    pub fn input_double_range(&mut self, range: RangeInclusive<f64>) -> Result<f64, PromptError> {
        self.prompt_with(&RealBetween::from(range))
    }

    pub fn input_yes_no(&mut self) -> Result<YesOrNo, PromptError> {
        self.prompt_with(&IsYesOrNo)
    }

    /// Runs `block` as a question that can be asked again.
    ///
    /// If the block calls [`ask_again`](Terminal::ask_again) during a pass, it
    /// runs once more after that pass returns. An error ends the block (and
    /// removes its flag) immediately.
    pub fn ask<F>(&mut self, mut block: F) -> Result<(), PromptError>
    where
        F: FnMut(&mut Self) -> Result<(), PromptError>,
    {
        self.retry.enter();
        let outcome = loop {
            if let Err(e) = block(self) {
                break Err(e);
            }
            if !self.retry.take_flag() {
                break Ok(());
            }
        };
        self.retry.leave();
        outcome
    }

    /// Asks the innermost running [`ask`](Terminal::ask) block again once it
    /// returns. Does nothing outside of a block.
    pub fn ask_again(&mut self) {
        self.retry.ask_again();
    }

    /// Number of `ask` blocks currently running on this terminal.
    pub fn ask_depth(&self) -> usize {
        self.retry.depth()
    }
}

/// Asks for one of an inline list of options.
///
/// ```rust
/// use std::io::Cursor;
/// use textkit::{input_options, utils::Terminal};
///
/// let mut terminal = Terminal::new(Cursor::new("d\nb\n"), Vec::new());
/// let answer = input_options!(terminal, "a", "b", "c")?;
/// assert_eq!(answer, "b");
/// # Ok::<(), textkit::PromptError>(())
/// ```
#[macro_export]
macro_rules! input_options {
    ($terminal:expr, $($option:expr),+ $(,)?) => {
        $terminal.input_options(&[$($option),+])
    };
}
