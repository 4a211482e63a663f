//! Guessed-letter bookkeeping shared by every round phase.

use crate::{BodyPart, Letter, SecretWord, MAX_WRONG_GUESSES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Letters guessed so far in a round.
///
/// `correct` and `wrong` are disjoint sets; `history` lists each distinct
/// guess once, in the order it was made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guesses {
    correct: BTreeSet<Letter>,
    wrong: BTreeSet<Letter>,
    history: Vec<Letter>,
}

impl Guesses {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters guessed that occur in the word.
    pub fn correct(&self) -> &BTreeSet<Letter> {
        &self.correct
    }

    /// Letters guessed that do not occur in the word.
    pub fn wrong(&self) -> &BTreeSet<Letter> {
        &self.wrong
    }

    /// Distinct guesses in the order they were made.
    pub fn history(&self) -> &[Letter] {
        &self.history
    }

    /// Returns true if the letter was already guessed.
    pub fn contains(&self, letter: Letter) -> bool {
        self.correct.contains(&letter) || self.wrong.contains(&letter)
    }

    /// Number of misses so far.
    pub fn wrong_count(&self) -> usize {
        self.wrong.len()
    }

    /// Misses left before the round is lost.
    pub fn remaining_attempts(&self) -> usize {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong.len())
    }

    /// Body parts drawn so far.
    pub fn revealed_body_parts(&self) -> impl Iterator<Item = BodyPart> {
        BodyPart::revealed(self.wrong.len())
    }

    /// Renders the word with unguessed letters as `_`, space separated.
    pub fn masked(&self, word: &SecretWord) -> String {
        word.letters()
            .map(|letter| {
                if self.correct.contains(&letter) {
                    letter.as_char()
                } else {
                    '_'
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Records a guess. Returns false (and changes nothing) for a repeat.
    pub(crate) fn record(&mut self, letter: Letter, hit: bool) -> bool {
        if self.contains(letter) {
            return false;
        }
        if hit {
            self.correct.insert(letter);
        } else {
            self.wrong.insert(letter);
        }
        self.history.push(letter);
        true
    }

    #[cfg(test)]
    pub(crate) fn corrupt_wrong(&mut self, letter: Letter) {
        self.wrong.insert(letter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).expect("valid letter")
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut guesses = Guesses::new();
        assert!(guesses.record(letter('z'), false));
        assert!(!guesses.record(letter('z'), false));
        assert_eq!(guesses.wrong_count(), 1);
        assert_eq!(guesses.history(), &[letter('z')]);
    }

    #[test]
    fn test_masked_word() {
        let word = SecretWord::new("cat").expect("alphabetic word");
        let mut guesses = Guesses::new();
        guesses.record(letter('a'), true);
        assert_eq!(guesses.masked(&word), "_ a _");
    }

    #[test]
    fn test_remaining_attempts() {
        let mut guesses = Guesses::new();
        for c in ['q', 'x', 'z'] {
            guesses.record(letter(c), false);
        }
        assert_eq!(guesses.remaining_attempts(), 3);
        assert_eq!(guesses.revealed_body_parts().last(), Some(BodyPart::LeftArm));
    }
}
