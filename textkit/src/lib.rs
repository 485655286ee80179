//! # textkit
//!
//! A small Rust library for building text-based console games: it reads
//! validated answers from a player, paces output for readability and lets a
//! question block be asked again when an answer is not satisfying.
//!
//! ## Features
//!
//! - **Validated input** - options, integers, decimals and yes/no, with or
//!   without inclusive bounds. Refused answers print a hint and are asked
//!   again; bad input is never an error.
//! - **Re-askable questions** - `ask` / `ask_again` blocks, nested freely,
//!   each terminal with its own retry stack.
//! - **Paced output** - word-by-word printing, waits and "press enter" pauses.
//! - **Sample games** - twenty questions, both ways round.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textkit::utils::{Terminal, YesOrNo};
//!
//! let mut terminal = Terminal::stdio();
//! terminal.print_slowly("Welcome, traveller.")?;
//! terminal.ask(|t| {
//!     t.print_slowly("How many coins do you carry? (0-99)")?;
//!     let coins = t.input_int_between(0, 99)?;
//!     t.print_slowly(&format!("{} coins. Is that right?", coins))?;
//!     if t.input_yes_no()? == YesOrNo::No {
//!         t.ask_again();
//!     }
//!     Ok(())
//! })?;
//! # Ok::<(), textkit::PromptError>(())
//! ```
//!
//! ### Custom rules
//!
//! Any [`utils::Validate`] implementation can drive the prompt loop:
//!
//! ```rust
//! use std::io::Cursor;
//! use textkit::utils::{Rejection, Terminal, Validate};
//!
//! struct Even;
//!
//! impl Validate for Even {
//!     type Output = i64;
//!
//!     fn validate(&self, input: &str) -> Result<i64, Rejection> {
//!         match input.parse::<i64>() {
//!             Ok(n) if n % 2 == 0 => Ok(n),
//!             _ => Err(Rejection::NotAnInt),
//!         }
//!     }
//! }
//!
//! let mut terminal = Terminal::new(Cursor::new("3\n4\n"), Vec::new());
//! assert_eq!(terminal.prompt_with(&Even)?, 4);
//! assert_eq!(terminal.rejections(), 1);
//! # Ok::<(), textkit::PromptError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`utils`** - answer rules, the terminal, paced output and plurals
//! - **`retry`** - the stack of "ask again" flags behind `ask`
//! - **`games`** - sample games built on the above
//!
//! ## Error Handling
//!
//! Prompts return `Result<T, PromptError>`. The only errors are failures of
//! the streams themselves, or a closed input when the terminal uses
//! [`utils::EofPolicy::Fail`].

pub mod error;
pub use error::PromptError;

pub mod games;

pub mod retry;

pub mod utils;
