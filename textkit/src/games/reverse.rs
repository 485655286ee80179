use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;

use super::{GameError, GameRules, farewell, play_again};
use crate::error::PromptError;
use crate::utils::{Plural, Terminal};

/// The computer picks a number from `rng` and the player guesses it, told
/// after every miss whether the number is larger or smaller.
///
/// Rules that fail [`GameRules::check`] are refused before anything is printed.
pub fn twenty_questions_reverse<R, W, G>(
    terminal: &mut Terminal<R, W>,
    rules: GameRules,
    rng: &mut G,
) -> Result<(), GameError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    rules.check()?;
    loop {
        let answer = rng.random_range(rules.lowest..=rules.highest);
        play_round(terminal, rules, answer)?;
        if !play_again(terminal)? {
            break;
        }
    }
    Ok(farewell(terminal)?)
}

fn play_round<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    rules: GameRules,
    answer: i64,
) -> Result<(), PromptError> {
    debug!("picked {}", answer);
    terminal.print_slowly("Welcome to 20 Questions!")?;
    terminal.print_slowly(&format!(
        "I picked a number between {} and {}.",
        rules.lowest, rules.highest
    ))?;
    terminal.print_slowly(&format!(
        "Can you guess it in {} Questions?",
        rules.max_guesses
    ))?;
    terminal.print_slowly("Are you ready?")?;
    terminal.input()?;
    terminal.print_slowly("Well... Here we go!")?;

    let mut guesses: Vec<i64> = Vec::new();
    for guess in 1..=rules.max_guesses {
        terminal.print_slowly(&format!("This is your Guess number {}.", guess))?;
        let number = terminal.input_int_between(rules.lowest, rules.highest)?;
        if number == answer {
            terminal.print_slowly(&format!(
                "You won after {} question{}!",
                guess,
                guess.s()
            ))?;
            terminal.print_slowly("Not half bad!")?;
            return Ok(());
        }

        if guesses.contains(&number) {
            terminal.print_slowly("You... Already guessed this before?")?;
            terminal.print_slowly("Interesting... strategy?")?;
        }
        if guess < rules.max_guesses {
            if answer < number {
                terminal.print_slowly("The number I am thinking of is smaller!")?;
            } else {
                terminal.print_slowly("The number I am thinking of is larger!")?;
            }
        } else {
            terminal.print_slowly("Oh... Wrong answer!")?;
            terminal.print_slowly("Oops! Game Over!")?;
            terminal.print_slowly(&format!("My number was {}.", answer))?;
        }
        guesses.push(number);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::RulesError;
    use crate::utils::terminal::tests::{output, terminal};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn single_number(n: i64) -> GameRules {
        GameRules {
            lowest: n,
            highest: n,
            max_guesses: 20,
        }
    }

    #[test]
    fn test_win_on_first_guess() {
        let mut t = terminal("\n7\nno\n\n");
        let mut rng = SmallRng::seed_from_u64(1);
        twenty_questions_reverse(&mut t, single_number(7), &mut rng).unwrap();

        let out = output(&t);
        assert!(out.contains("I picked a number between 7 and 7."));
        assert!(out.contains("You won after 1 question!"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn test_out_of_range_guess_gets_hint() {
        let mut t = terminal("\n8\n7\nno\n\n");
        let mut rng = SmallRng::seed_from_u64(1);
        twenty_questions_reverse(&mut t, single_number(7), &mut rng).unwrap();

        assert!(output(&t).contains("(Please input a number between 7 and 7)\n"));
        assert_eq!(t.rejections(), 1);
    }

    #[test]
    fn test_loss_reveals_number() {
        let rules = GameRules {
            lowest: 1,
            highest: 1000,
            max_guesses: 3,
        };
        let answer = SmallRng::seed_from_u64(42).random_range(rules.lowest..=rules.highest);
        let wrong = if answer == 1 { 2 } else { 1 };

        let mut t = terminal(format!("\n{0}\n{0}\n{0}\nno\n\n", wrong));
        let mut rng = SmallRng::seed_from_u64(42);
        twenty_questions_reverse(&mut t, rules, &mut rng).unwrap();

        let out = output(&t);
        let clue = if answer < wrong {
            "The number I am thinking of is smaller!"
        } else {
            "The number I am thinking of is larger!"
        };
        assert_eq!(out.matches(clue).count(), 2);
        assert_eq!(out.matches("You... Already guessed this before?").count(), 2);
        assert!(out.contains("Oops! Game Over!"));
        assert!(out.contains(&format!("My number was {}.", answer)));
    }

    #[test]
    fn test_inverted_range_is_refused() {
        let rules = GameRules {
            lowest: 10,
            highest: 1,
            max_guesses: 20,
        };
        let mut t = terminal("");
        let mut rng = SmallRng::seed_from_u64(1);
        let res = twenty_questions_reverse(&mut t, rules, &mut rng);
        assert!(matches!(
            res,
            Err(GameError::Rules(RulesError::EmptyRange { lowest: 10, highest: 1 }))
        ));
        assert!(output(&t).is_empty());
    }

    #[test]
    fn test_replay_plays_reverse_again() {
        let mut t = terminal("\n7\nyes\n\n7\nno\n\n");
        let mut rng = SmallRng::seed_from_u64(1);
        twenty_questions_reverse(&mut t, single_number(7), &mut rng).unwrap();

        let out = output(&t);
        assert_eq!(out.matches("I picked a number").count(), 2);
        assert_eq!(out.matches("You won after 1 question!").count(), 2);
    }
}
