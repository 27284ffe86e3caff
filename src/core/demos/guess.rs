//! Number guessing game.

use rand::Rng;

use crate::config::guess::{MAX, MIN};
use crate::models::OutputLine;

/// Result of feeding one line to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Non-numeric or out of range; still counts as a guess
    Invalid,
    TooLow,
    TooHigh,
    Won,
    Quit,
}

impl GuessOutcome {
    /// Whether the game is over after this outcome.
    pub fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::Quit)
    }
}

/// Hidden target plus the number of guesses taken so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessGame {
    target: u32,
    count: u32,
}

impl GuessGame {
    pub fn new(target: u32) -> Self {
        Self { target, count: 0 }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(MIN..=MAX))
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn intro() -> Vec<OutputLine> {
        vec![
            OutputLine::info(format!("Guessing Game started! ({}-{})", MIN, MAX)),
            OutputLine::text("Type your guess and hit Enter."),
            OutputLine::text("Type 'quit' or press Escape to exit."),
        ]
    }

    /// Judge one trimmed input line.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if input.eq_ignore_ascii_case("quit") {
            return GuessOutcome::Quit;
        }

        self.count += 1;
        match input.parse::<u32>() {
            Ok(n) if (MIN..=MAX).contains(&n) => match n.cmp(&self.target) {
                std::cmp::Ordering::Less => GuessOutcome::TooLow,
                std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
                std::cmp::Ordering::Equal => GuessOutcome::Won,
            },
            _ => GuessOutcome::Invalid,
        }
    }

    pub fn message(&self, outcome: GuessOutcome) -> OutputLine {
        match outcome {
            GuessOutcome::Invalid => OutputLine::error(format!(
                "Invalid input. Please enter a number between {} and {}.",
                MIN, MAX
            )),
            GuessOutcome::TooLow => {
                OutputLine::text(format!("Too low! Try again. (Guess #{})", self.count))
            }
            GuessOutcome::TooHigh => {
                OutputLine::text(format!("Too high! Try again. (Guess #{})", self.count))
            }
            GuessOutcome::Won => OutputLine::success(format!(
                "CONGRATULATIONS! You guessed the number {} in {} attempts.",
                self.target, self.count
            )),
            GuessOutcome::Quit => OutputLine::text(format!(
                "Game aborted after {} guesses. The number was {}.",
                self.count, self.target
            )),
        }
    }

    pub fn cancelled_message(&self) -> OutputLine {
        OutputLine::info(format!(
            "Guessing Game cancelled. The number was {}.",
            self.target
        ))
    }
}
