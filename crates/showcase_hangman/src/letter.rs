//! Case-normalized guess letters.

use crate::GuessError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single ASCII letter, always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Creates a letter, lowercasing ASCII uppercase input.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NotALetter`] for anything but `a-z` / `A-Z`.
    pub fn new(c: char) -> Result<Self, GuessError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase()))
        } else {
            Err(GuessError::NotALetter(c))
        }
    }

    /// Wraps a character already known to be a lowercase ASCII letter.
    pub(crate) fn from_normalized(c: char) -> Self {
        debug_assert!(c.is_ascii_lowercase());
        Self(c)
    }

    /// Returns the letter as a `char`.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl FromStr for Letter {
    type Err = GuessError;

    /// Parses exactly one letter, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(GuessError::NotSingleLetter(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_is_normalized() {
        assert_eq!(Letter::new('Q').map(Letter::as_char), Ok('q'));
    }

    #[test]
    fn test_non_letters_rejected() {
        assert_eq!(Letter::new('7'), Err(GuessError::NotALetter('7')));
        assert_eq!(Letter::new('é'), Err(GuessError::NotALetter('é')));
    }

    #[test]
    fn test_parse_single_letter() {
        assert_eq!(" B\n".parse::<Letter>().map(Letter::as_char), Ok('b'));
        assert!(matches!("ab".parse::<Letter>(), Err(GuessError::NotSingleLetter(_))));
        assert!(matches!("".parse::<Letter>(), Err(GuessError::NotSingleLetter(_))));
    }
}
