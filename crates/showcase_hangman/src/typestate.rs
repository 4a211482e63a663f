//! Phase-specific typestate structs for a hangman round.
//!
//! A round is either in progress (accepts guesses) or finished (always has
//! an outcome). Guessing consumes the in-progress round and returns the
//! next phase.

use crate::contracts::{Contract, GuessContract};
use crate::{rules, BodyPart, Guess, GuessError, Guesses, Letter, Outcome, SecretWord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// A round being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInProgress {
    pub(crate) word: SecretWord,
    pub(crate) guesses: Guesses,
}

impl RoundInProgress {
    /// Starts a round with no guesses.
    #[instrument(skip_all, fields(word_len = word.len()))]
    pub fn new(word: SecretWord) -> Self {
        Self {
            word,
            guesses: Guesses::new(),
        }
    }

    /// Applies a guess, consuming the round.
    ///
    /// Repeating a letter is a no-op: the same round comes back unchanged.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(letter = %guess.letter))]
    pub fn guess(self, guess: Guess) -> Result<RoundResult, GuessError> {
        GuessContract::pre(&self, &guess)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        let hit = round.word.contains(guess.letter);
        if !round.guesses.record(guess.letter, hit) {
            debug!("Letter already guessed");
            return Ok(RoundResult::InProgress(round));
        }
        debug!(hit, remaining = round.guesses.remaining_attempts(), "Guess recorded");

        #[cfg(debug_assertions)]
        GuessContract::post(&before, &round)?;

        if rules::is_solved(&round.word, &round.guesses) {
            info!(word = %round.word, "Round won");
            return Ok(RoundResult::Finished(round.finish(Outcome::Won)));
        }

        if rules::is_hanged(&round.guesses) {
            info!(word = %round.word, "Round lost");
            return Ok(RoundResult::Finished(round.finish(Outcome::Lost)));
        }

        Ok(RoundResult::InProgress(round))
    }

    fn finish(self, outcome: Outcome) -> RoundFinished {
        RoundFinished {
            word: self.word,
            guesses: self.guesses,
            outcome,
        }
    }

    /// Rebuilds a round by replaying guesses in order.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NotPlayable`] if guesses remain after the round
    /// has finished.
    #[instrument(skip(word, letters), fields(guesses = letters.len()))]
    pub fn replay(word: SecretWord, letters: &[Letter]) -> Result<RoundResult, GuessError> {
        let mut result = RoundResult::InProgress(Self::new(word));
        for &letter in letters {
            result = match result {
                RoundResult::InProgress(round) => round.guess(Guess::new(letter))?,
                RoundResult::Finished(_) => return Err(GuessError::NotPlayable),
            };
        }
        Ok(result)
    }

    /// Returns the secret word.
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Returns the guesses so far.
    pub fn guesses(&self) -> &Guesses {
        &self.guesses
    }

    /// Letters guessed that occur in the word.
    pub fn correct_letters(&self) -> &BTreeSet<Letter> {
        self.guesses.correct()
    }

    /// Letters guessed that do not occur in the word.
    pub fn wrong_letters(&self) -> &BTreeSet<Letter> {
        self.guesses.wrong()
    }

    /// The word with unguessed letters hidden, e.g. `c _ t`.
    pub fn masked_word(&self) -> String {
        self.guesses.masked(&self.word)
    }

    /// Misses left before the round is lost.
    pub fn remaining_attempts(&self) -> usize {
        self.guesses.remaining_attempts()
    }

    /// Body parts drawn so far.
    pub fn revealed_body_parts(&self) -> impl Iterator<Item = BodyPart> {
        self.guesses.revealed_body_parts()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// A round that has ended. Always carries an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFinished {
    word: SecretWord,
    guesses: Guesses,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns how the round ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the secret word.
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Returns the guesses made during the round.
    pub fn guesses(&self) -> &Guesses {
        &self.guesses
    }

    /// Letters guessed that occur in the word.
    pub fn correct_letters(&self) -> &BTreeSet<Letter> {
        self.guesses.correct()
    }

    /// Letters guessed that do not occur in the word.
    pub fn wrong_letters(&self) -> &BTreeSet<Letter> {
        self.guesses.wrong()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition result
// ─────────────────────────────────────────────────────────────

/// Phase reached after a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The round continues.
    InProgress(RoundInProgress),
    /// The round ended.
    Finished(RoundFinished),
}

impl RoundResult {
    /// Returns the secret word.
    pub fn word(&self) -> &SecretWord {
        match self {
            RoundResult::InProgress(round) => round.word(),
            RoundResult::Finished(round) => round.word(),
        }
    }

    /// Returns the guesses made so far.
    pub fn guesses(&self) -> &Guesses {
        match self {
            RoundResult::InProgress(round) => round.guesses(),
            RoundResult::Finished(round) => round.guesses(),
        }
    }

    /// Returns the outcome if the round has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundResult::InProgress(_) => None,
            RoundResult::Finished(round) => Some(round.outcome()),
        }
    }

    /// Returns true if the round has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundResult::Finished(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::new(c).expect("valid letter")).collect()
    }

    fn word(s: &str) -> SecretWord {
        SecretWord::new(s).expect("alphabetic word")
    }

    #[test]
    fn test_repeat_guess_is_noop() {
        let result = RoundInProgress::replay(word("cat"), &letters("zz")).expect("valid replay");
        assert_eq!(result.guesses().wrong_count(), 1);
        assert_eq!(result.guesses().history().len(), 1);
    }

    #[test]
    fn test_uppercase_guess_counts() {
        let round = RoundInProgress::new(word("cat"));
        let guess = Guess::new(Letter::new('C').expect("valid letter"));
        let Ok(RoundResult::InProgress(round)) = round.guess(guess) else {
            panic!("Expected in-progress round");
        };
        assert_eq!(round.masked_word(), "c _ _");
    }

    #[test]
    fn test_replay_rejects_guess_after_finish() {
        let result = RoundInProgress::replay(word("at"), &letters("atx"));
        assert_eq!(result, Err(GuessError::NotPlayable));
    }

    #[test]
    fn test_lost_round_outcome() {
        let result = RoundInProgress::replay(word("cat"), &letters("bdefgh")).expect("valid replay");
        assert_eq!(result.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn test_round_result_word_accessor() {
        let result = RoundInProgress::replay(word("ox"), &letters("o")).expect("valid replay");
        assert_eq!(result.word().as_str(), "ox");
        assert!(!result.is_finished());
    }
}
