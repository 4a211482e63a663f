//! Guesses as first-class actions.

use crate::Letter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's guess: one letter.
///
/// Guesses are values that can be validated against a round before they
/// are applied, logged, and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Guess {
    /// The guessed letter.
    pub letter: Letter,
}

impl Guess {
    /// Returns the guessed letter.
    pub fn letter(&self) -> Letter {
        self.letter
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Guess::new)
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guess '{}'", self.letter)
    }
}

/// Error that can occur when validating or applying a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The character is not an ASCII letter.
    #[display("{_0:?} is not a letter")]
    NotALetter(char),

    /// The input was not exactly one character.
    #[display("Expected a single letter, got {_0:?}")]
    NotSingleLetter(String),

    /// No round is being played (no word yet, loading, or round over).
    #[display("No round is being played")]
    NotPlayable,

    /// A postcondition failed after applying the guess.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess() {
        let guess: Guess = "E".parse().expect("single letter");
        assert_eq!(guess.letter().as_char(), 'e');
        assert_eq!(guess.to_string(), "guess 'e'");
    }
}
