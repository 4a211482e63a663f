//! Hangman game session shared by the views of one game.
//!
//! The session owns its state container and word source; callers construct
//! it and pass it to whatever needs it. There is no process-wide game.

use crate::word_source::{WordFetchError, WordFetchErrorKind, WordSource};
use showcase_hangman::{FetchResolution, Guess, GuessError, Hangman, HangmanView};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default upper bound on one word request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

/// A hangman game bound to a word source.
///
/// Cloning yields another handle to the same game.
#[derive(Debug, Clone)]
pub struct HangmanSession {
    game: Arc<Mutex<Hangman>>,
    source: Arc<dyn WordSource>,
    fetch_timeout: Duration,
}

impl HangmanSession {
    /// Creates an idle session. Call [`fetch_word`](Self::fetch_word) to start a round.
    #[instrument(skip(source))]
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            game: Arc::new(Mutex::new(Hangman::new())),
            source,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Sets the upper bound on one word request.
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    fn game(&self) -> MutexGuard<'_, Hangman> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Requests a new secret word.
    ///
    /// Concurrent calls are allowed: the most recent request wins and older
    /// results are dropped as [`FetchResolution::Stale`]. Failures set the
    /// error flag and are not retried.
    #[instrument(skip(self))]
    pub async fn fetch_word(&self) -> FetchResolution {
        let token = self.game().begin_fetch();
        debug!(%token, "Word request started");

        let result = match tokio::time::timeout(self.fetch_timeout, self.source.fetch_word()).await {
            Ok(result) => result,
            Err(_) => Err(WordFetchError::new(
                WordFetchErrorKind::Timeout,
                format!("No word within {:?}", self.fetch_timeout),
            )),
        };
        if let Err(e) = &result {
            warn!(error = %e, "Word request failed");
        }

        let resolution = self.game().finish_fetch(token, result);
        debug!(%token, ?resolution, "Word request finished");
        resolution
    }

    /// Clears the round and immediately requests a new word.
    #[instrument(skip(self))]
    pub async fn new_round(&self) -> FetchResolution {
        self.restart();
        self.fetch_word().await
    }

    /// Applies a guess and returns the updated view.
    #[instrument(skip(self))]
    pub fn guess_letter(&self, guess: Guess) -> Result<HangmanView, GuessError> {
        let mut game = self.game();
        game.guess_letter(guess)?;
        Ok(game.view())
    }

    /// Clears the word, letters and error flag without fetching.
    #[instrument(skip(self))]
    pub fn restart(&self) {
        self.game().restart();
        info!("Session restarted");
    }

    /// Returns a snapshot of the game.
    pub fn view(&self) -> HangmanView {
        self.game().view()
    }

    /// Returns the last word request failure, if any.
    pub fn last_error(&self) -> Option<String> {
        self.game().last_error().map(str::to_string)
    }
}
