//! Command-line arguments of the `textkit` binary.

use clap::{Parser, Subcommand};
use std::time::Duration;
use textkit::games::{GameRules, RulesError};
use textkit::utils::{EofPolicy, TerminalOptions};

/// textkit - number games for the console
#[derive(Parser, Debug)]
#[command(name = "textkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Milliseconds to wait between printed words
    #[arg(short, long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Quit when standard input closes instead of prompting again
    #[arg(long)]
    pub exit_on_eof: bool,

    /// Seed for the computer's secret number
    #[arg(long)]
    pub seed: Option<u64>,

    /// Highest number in play
    #[arg(long, default_value_t = 1000)]
    pub highest: i64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Game to play (defaults to guess)
    #[command(subcommand)]
    pub game: Option<Game>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    /// Think of a number and let the computer find it
    Guess,
    /// Find the number the computer picked
    Reverse,
}

impl Cli {
    pub fn terminal_options(&self) -> TerminalOptions {
        let eof = if self.exit_on_eof {
            EofPolicy::Fail
        } else {
            EofPolicy::Retry
        };
        TerminalOptions::default()
            .with_slow_print_delay(Duration::from_millis(self.delay_ms))
            .with_eof(eof)
    }

    pub fn rules(&self) -> Result<GameRules, RulesError> {
        let defaults = GameRules::default();
        GameRules::new(defaults.lowest, self.highest, defaults.max_guesses)
    }

    pub fn game(&self) -> Game {
        self.game.unwrap_or(Game::Guess)
    }
}
