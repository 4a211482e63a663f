//! Win and loss rules.

use crate::{Guesses, SecretWord, MAX_WRONG_GUESSES};
use tracing::instrument;

/// Returns true when every distinct letter of the word has been guessed.
#[instrument(skip_all)]
pub fn is_solved(word: &SecretWord, guesses: &Guesses) -> bool {
    word.letters().all(|letter| guesses.correct().contains(&letter))
}

/// Returns true when the gallows is complete.
///
/// Independent of progress toward solving the word.
#[instrument(skip_all)]
pub fn is_hanged(guesses: &Guesses) -> bool {
    guesses.wrong_count() >= MAX_WRONG_GUESSES
}
