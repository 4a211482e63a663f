//! Reducer store for a hangman game view.
//!
//! Combines the current round with the lifecycle of the word fetch. The
//! fetch itself happens elsewhere; the store only records that one was
//! started ([`Hangman::begin_fetch`]) and how it resolved
//! ([`Hangman::finish_fetch`]).
//!
//! Concurrent fetches follow cancel-and-replace: each `begin_fetch` issues a
//! new [`FetchToken`] and only the most recent token is accepted when
//! results arrive. `restart` invalidates every outstanding token.

use crate::{Guess, GuessError, Outcome, RoundInProgress, RoundResult, SecretWord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Identifies one word request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[display("fetch#{_0}")]
pub struct FetchToken(u64);

/// Whether a fetch result was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchResolution {
    /// The result belonged to the latest request and was applied.
    Applied,
    /// A newer request or a restart superseded this one; the result was dropped.
    Stale,
}

/// Lifecycle status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No word yet and nothing in flight.
    Idle,
    /// A word request is in flight.
    Loading,
    /// A round is being played.
    Playing,
    /// The last round was won.
    Won,
    /// The last round was lost.
    Lost,
    /// The last word request failed.
    Error,
}

/// Hangman state container for one consuming view.
#[derive(Debug, Clone, Default)]
pub struct Hangman {
    round: Option<RoundResult>,
    pending: Option<FetchToken>,
    last_error: Option<String>,
    issued: u64,
}

impl Hangman {
    /// Creates an idle game with no word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game already playing `word`.
    #[instrument(skip_all)]
    pub fn with_word(word: SecretWord) -> Self {
        Self {
            round: Some(RoundResult::InProgress(RoundInProgress::new(word))),
            ..Self::default()
        }
    }

    /// Marks a word request as in flight and returns its token.
    ///
    /// Any earlier outstanding token becomes stale.
    #[instrument(skip(self))]
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.issued += 1;
        let token = FetchToken(self.issued);
        if let Some(previous) = self.pending.replace(token) {
            debug!(%previous, %token, "Superseding in-flight word request");
        }
        self.last_error = None;
        token
    }

    /// Records the result of a word request.
    ///
    /// Success starts a fresh round with empty letter sets; failure sets the
    /// error flag. Results for stale tokens are ignored.
    #[instrument(skip(self, result), fields(ok = result.is_ok()))]
    pub fn finish_fetch<E>(&mut self, token: FetchToken, result: Result<SecretWord, E>) -> FetchResolution
    where
        E: std::fmt::Display,
    {
        if self.pending != Some(token) {
            debug!(%token, pending = ?self.pending, "Dropping stale word result");
            return FetchResolution::Stale;
        }
        self.pending = None;

        match result {
            Ok(word) => {
                info!(word_len = word.len(), "New round started");
                self.round = Some(RoundResult::InProgress(RoundInProgress::new(word)));
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "Word request failed");
                self.last_error = Some(e.to_string());
            }
        }
        FetchResolution::Applied
    }

    /// Applies a guess to the current round.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NotPlayable`] unless the status is [`Status::Playing`].
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, guess: Guess) -> Result<(), GuessError> {
        if self.status() != Status::Playing {
            return Err(GuessError::NotPlayable);
        }
        let Some(RoundResult::InProgress(round)) = self.round.take() else {
            return Err(GuessError::NotPlayable);
        };

        let fallback = round.clone();
        match round.guess(guess) {
            Ok(next) => {
                self.round = Some(next);
                Ok(())
            }
            Err(e) => {
                self.round = Some(RoundResult::InProgress(fallback));
                Err(e)
            }
        }
    }

    /// Clears the word, both letter sets and the error flag.
    ///
    /// Outstanding word requests become stale. Does not start a new fetch.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(%pending, "Abandoning in-flight word request");
        }
        self.round = None;
        self.last_error = None;
        info!("Game restarted");
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> Status {
        if self.pending.is_some() {
            return Status::Loading;
        }
        if self.last_error.is_some() {
            return Status::Error;
        }
        match &self.round {
            None => Status::Idle,
            Some(RoundResult::InProgress(_)) => Status::Playing,
            Some(RoundResult::Finished(round)) => match round.outcome() {
                Outcome::Won => Status::Won,
                Outcome::Lost => Status::Lost,
            },
        }
    }

    /// False once the current round has been won or lost.
    pub fn playable(&self) -> bool {
        !matches!(self.round, Some(RoundResult::Finished(_)))
    }

    /// Returns true while a word request is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true if the last word request failed.
    pub fn is_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Returns the last word request failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns the current round, if a word has been set.
    pub fn round(&self) -> Option<&RoundResult> {
        self.round.as_ref()
    }

    /// Returns the token of the in-flight request, if any.
    pub fn pending(&self) -> Option<FetchToken> {
        self.pending
    }

    /// Returns an owned snapshot for rendering.
    pub fn view(&self) -> HangmanView {
        let (word, correct_letters, wrong_letters, masked_word, remaining_attempts) = match &self.round {
            Some(round) => {
                let guesses = round.guesses();
                (
                    Some(round.word().to_string()),
                    guesses.correct().iter().map(|l| l.as_char()).collect(),
                    guesses.wrong().iter().map(|l| l.as_char()).collect(),
                    Some(guesses.masked(round.word())),
                    guesses.remaining_attempts(),
                )
            }
            None => (None, Vec::new(), Vec::new(), None, crate::MAX_WRONG_GUESSES),
        };

        HangmanView {
            word,
            correct_letters,
            wrong_letters,
            playable: self.playable(),
            is_loading: self.is_loading(),
            is_error: self.is_error(),
            status: self.status(),
            masked_word,
            remaining_attempts,
        }
    }
}

/// Owned game state shaped for a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HangmanView {
    /// The secret word, if one has been fetched.
    pub word: Option<String>,
    /// Correct guesses, alphabetical.
    pub correct_letters: Vec<char>,
    /// Wrong guesses, alphabetical.
    pub wrong_letters: Vec<char>,
    /// False once the round has been won or lost.
    pub playable: bool,
    /// True while a word request is in flight.
    pub is_loading: bool,
    /// True if the last word request failed.
    pub is_error: bool,
    /// Lifecycle status.
    pub status: Status,
    /// Word with unguessed letters hidden.
    pub masked_word: Option<String>,
    /// Misses left before the round is lost.
    pub remaining_attempts: usize,
}
