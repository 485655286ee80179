//! # Sample Games
//!
//! Two number games built only on the public [`Terminal`] API:
//!
//! - [`twenty_questions`]: the player thinks of a number and the computer
//!   finds it by halving the range.
//! - [`twenty_questions_reverse`]: the computer picks a number and the player
//!   hunts for it with larger/smaller clues.
//!
//! Both play rounds until the player declines a replay.
use std::io::{BufRead, Write};

use log::info;
use thiserror::Error;

use crate::error::PromptError;
use crate::utils::Terminal;

pub mod reverse;
pub use reverse::twenty_questions_reverse;

pub mod twenty_questions;
pub use twenty_questions::twenty_questions;

/// Why a [`GameRules`] cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("no number lies between {lowest} and {highest}")]
    EmptyRange { lowest: i64, highest: i64 },
    #[error("a game needs at least one guess")]
    NoGuesses,
}

/// Ways a game can stop before the player quits.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("invalid game rules: {0}")]
    Rules(#[from] RulesError),
}

/// Number range and guess allowance of a game.
///
/// Fields are public; games call [`GameRules::check`] before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub lowest: i64,
    pub highest: i64,
    pub max_guesses: u32,
}

impl GameRules {
    pub fn new(lowest: i64, highest: i64, max_guesses: u32) -> Result<Self, RulesError> {
        let rules = Self {
            lowest,
            highest,
            max_guesses,
        };
        rules.check()?;
        Ok(rules)
    }

    /// The range must hold at least one number and at least one guess is allowed.
    pub fn check(&self) -> Result<(), RulesError> {
        if self.lowest > self.highest {
            return Err(RulesError::EmptyRange {
                lowest: self.lowest,
                highest: self.highest,
            });
        }
        if self.max_guesses == 0 {
            return Err(RulesError::NoGuesses);
        }
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            lowest: 1,
            highest: 1000,
            max_guesses: 20,
        }
    }
}

/// Ends a round. Returns whether the player wants another one.
fn play_again<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>) -> Result<bool, PromptError> {
    terminal.print_slowly("Good Game!")?;
    terminal.print_slowly("Play Again? Yes or No?")?;
    let again = terminal.input_yes_no()?.is_yes();
    info!("player chose to play again: {}", again);
    Ok(again)
}

fn farewell<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>) -> Result<(), PromptError> {
    terminal.print_slowly("Thanks for playing!")?;
    terminal.print_slowly("(Press enter to quit)")?;
    terminal.input()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_new_validates() {
        assert_eq!(GameRules::new(1, 1000, 20), Ok(GameRules::default()));
        assert_eq!(GameRules::new(5, 5, 1).map(|r| r.highest), Ok(5));
        assert_eq!(
            GameRules::new(10, 1, 20),
            Err(RulesError::EmptyRange {
                lowest: 10,
                highest: 1
            })
        );
        assert_eq!(GameRules::new(1, 10, 0), Err(RulesError::NoGuesses));
    }

    #[test]
    fn test_rules_error_display() {
        let err = GameError::from(RulesError::EmptyRange {
            lowest: 10,
            highest: 1,
        });
        assert_eq!(
            err.to_string(),
            "invalid game rules: no number lies between 10 and 1"
        );
        assert_eq!(
            GameError::from(PromptError::Closed).to_string(),
            "input stream closed"
        );
    }
}
