//! Secret words.

use crate::Letter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Error produced when a candidate secret word is unusable.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordError {
    /// The word was empty (after trimming).
    #[display("Secret word is empty")]
    Empty,

    /// The word contained something other than ASCII letters.
    #[display("Secret word {_0:?} must contain only ASCII letters")]
    NotAlphabetic(String),
}

impl std::error::Error for WordError {}

/// The word a player must guess: non-empty, lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord(String);

impl SecretWord {
    /// Validates and lowercases a word. Surrounding whitespace is ignored.
    pub fn new(word: impl AsRef<str>) -> Result<Self, WordError> {
        let word = word.as_ref().trim();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NotAlphabetic(word.to_string()));
        }
        Ok(Self(word.to_ascii_lowercase()))
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the letter occurs anywhere in the word.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(letter.as_char())
    }

    /// Iterates over the word's letters in order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.chars().map(Letter::from_normalized)
    }

    /// Returns the distinct letters of the word.
    pub fn unique_letters(&self) -> BTreeSet<Letter> {
        self.letters().collect()
    }
}

impl TryFrom<String> for SecretWord {
    type Error = WordError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        Self::new(word)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.0
    }
}

impl FromStr for SecretWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
