use std::io::{BufRead, Write};

use log::debug;

use super::{GameError, GameRules, farewell, play_again};
use crate::error::PromptError;
use crate::input_options;
use crate::utils::Terminal;

/// The player picks a number and answers whether each guess is too low, too
/// high or correct.
pub fn twenty_questions<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    rules: GameRules,
) -> Result<(), GameError> {
    rules.check()?;
    loop {
        play_round(terminal, rules)?;
        if !play_again(terminal)? {
            break;
        }
    }
    Ok(farewell(terminal)?)
}

fn play_round<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    rules: GameRules,
) -> Result<(), PromptError> {
    terminal.print_slowly("Welcome to 20 Questions!")?;
    terminal.print_slowly(&format!(
        "Pick a number between {} and {}.",
        rules.lowest, rules.highest
    ))?;
    terminal.print_slowly("Are you ready?")?;
    terminal.input()?;
    terminal.print_slowly("Well... Here we go!")?;

    // i128 so that `guessed ± 1` and the midpoint hold for any i64 bounds.
    let mut min = i128::from(rules.lowest);
    let mut max = i128::from(rules.highest);
    for guess in 1..=rules.max_guesses {
        // Only reachable when the answers contradict each other.
        if min > max {
            terminal.print_slowly("Hmm... Those answers don't add up.")?;
            terminal.print_slowly("Did you change your number?")?;
            return Ok(());
        }

        let guessed = min + (max - min) / 2;
        debug!("guess {} of {}: {} in [{}, {}]", guess, rules.max_guesses, guessed, min, max);
        terminal.print_slowly(&format!("Guess {}. Is it {}?", guess, guessed))?;

        if guess < rules.max_guesses {
            terminal.print_slowly(" a. My number is higher.")?;
            terminal.print_slowly(" b. My number is lower.")?;
            terminal.print_slowly(" c. Correct!")?;
            match input_options!(terminal, "a", "b", "c")?.as_str() {
                "a" => min = guessed + 1,
                "b" => max = guessed - 1,
                _ => {
                    terminal.print_slowly("Hooray!")?;
                    return Ok(());
                }
            }
        } else {
            terminal.print_slowly(" a. Correct!")?;
            input_options!(terminal, "a")?;
            terminal.print_slowly("Hooray!")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::RulesError;
    use crate::utils::terminal::tests::{output, terminal};

    #[test]
    fn test_finds_highest_number() {
        let script = format!("\n{}c\nno\n\n", "a\n".repeat(9));
        let mut t = terminal(script);
        twenty_questions(&mut t, GameRules::default()).unwrap();

        let out = output(&t);
        assert!(out.contains("Guess 1. Is it 500?"));
        assert!(out.contains("Guess 10. Is it 1000?"));
        assert!(out.contains("Hooray!"));
        assert!(out.contains("Thanks for playing!"));
        assert_eq!(t.rejections(), 0);
    }

    #[test]
    fn test_contradictory_answers_end_round() {
        let script = format!("\n{}no\n\n", "b\n".repeat(9));
        let mut t = terminal(script);
        twenty_questions(&mut t, GameRules::default()).unwrap();

        let out = output(&t);
        assert!(out.contains("Guess 9. Is it 1?"));
        assert!(out.contains("Did you change your number?"));
        assert!(!out.contains("Hooray!"));
    }

    #[test]
    fn test_last_guess_only_offers_correct() {
        let rules = GameRules {
            lowest: 1,
            highest: 100,
            max_guesses: 2,
        };
        let mut t = terminal("\na\nb\na\nno\n\n");
        twenty_questions(&mut t, rules).unwrap();

        let out = output(&t);
        assert!(out.contains("Guess 2. Is it 75?"));
        assert!(out.contains(" a. Correct!"));
        assert!(out.contains("You must choose one of the following: a\n"));
        assert_eq!(t.rejections(), 1);
    }

    #[test]
    fn test_full_i64_range_does_not_overflow() {
        let rules = GameRules::new(i64::MIN, i64::MAX, 20).unwrap();
        let mut t = terminal("\nb\nc\nno\n\n");
        twenty_questions(&mut t, rules).unwrap();

        let out = output(&t);
        assert!(out.contains("Guess 1. Is it -1?"));
        assert!(out.contains("Guess 2. Is it -4611686018427387905?"));
    }

    #[test]
    fn test_climbing_past_i64_max_ends_round() {
        let rules = GameRules::new(i64::MAX - 1, i64::MAX, 20).unwrap();
        let mut t = terminal("\na\na\nno\n\n");
        twenty_questions(&mut t, rules).unwrap();

        let out = output(&t);
        assert!(out.contains("Guess 2. Is it 9223372036854775807?"));
        assert!(out.contains("Did you change your number?"));
    }

    #[test]
    fn test_invalid_rules_are_refused_before_play() {
        let rules = GameRules {
            lowest: 1,
            highest: 10,
            max_guesses: 0,
        };
        let mut t = terminal("");
        let res = twenty_questions(&mut t, rules);
        assert!(matches!(res, Err(GameError::Rules(RulesError::NoGuesses))));
        assert!(output(&t).is_empty());
    }

    #[test]
    fn test_replay_restarts_round() {
        let mut t = terminal("\nc\nYes\n\nc\nno\n\n");
        twenty_questions(&mut t, GameRules::default()).unwrap();
        assert_eq!(output(&t).matches("Welcome to 20 Questions!").count(), 2);
    }

    #[test]
    fn test_invalid_choice_is_asked_again() {
        let mut t = terminal("\nd\nc\nno\n\n");
        twenty_questions(&mut t, GameRules::default()).unwrap();
        assert!(output(&t).contains("You must choose one of the following: a, b, c\n"));
    }
}
