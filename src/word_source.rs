//! Sources of secret words.

use async_trait::async_trait;
use derive_more::{Display, Error};
use rand::seq::SliceRandom;
use serde::Deserialize;
use showcase_hangman::SecretWord;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Category of a word fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WordFetchErrorKind {
    /// The request could not be sent or the connection failed.
    #[display("request")]
    Request,
    /// The request did not complete within the timeout.
    #[display("timeout")]
    Timeout,
    /// The server answered with a non-success status.
    #[display("status")]
    Status,
    /// The body was not a JSON array of strings.
    #[display("parse")]
    Parse,
    /// The source had no word to offer.
    #[display("empty")]
    Empty,
    /// The word was not a usable secret word.
    #[display("invalid word")]
    InvalidWord,
}

/// Word fetch error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Word fetch error ({}): {} at {}:{}", kind, message, file, line)]
pub struct WordFetchError {
    /// Failure category.
    pub kind: WordFetchErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordFetchError {
    /// Creates a new word fetch error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: WordFetchErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for WordFetchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            WordFetchErrorKind::Timeout
        } else if err.is_decode() {
            WordFetchErrorKind::Parse
        } else if err.is_status() {
            WordFetchErrorKind::Status
        } else {
            WordFetchErrorKind::Request
        };
        Self::new(kind, format!("HTTP error: {}", err))
    }
}

/// Something that can hand out secret words.
#[async_trait]
pub trait WordSource: Send + Sync + std::fmt::Debug {
    /// Fetches one secret word.
    async fn fetch_word(&self) -> Result<SecretWord, WordFetchError>;
}

/// Fetches words from a random-word HTTP endpoint.
///
/// The endpoint answers `GET` with a JSON array whose first element is the
/// word, e.g. `["lantern"]`.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    url: String,
    client: reqwest::Client,
}

impl HttpWordSource {
    /// Creates a source for `url` whose requests give up after `timeout`.
    #[instrument(skip(url), fields(url = %url.as_ref()))]
    pub fn new(url: impl AsRef<str>, timeout: Duration) -> Result<Self, WordFetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                WordFetchError::new(
                    WordFetchErrorKind::Request,
                    format!("Failed to build HTTP client: {}", e),
                )
            })?;
        Ok(Self {
            url: url.as_ref().to_string(),
            client,
        })
    }

    /// Returns the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Body returned by the word endpoint.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct WordList(Vec<String>);

#[async_trait]
impl WordSource for HttpWordSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_word(&self) -> Result<SecretWord, WordFetchError> {
        debug!("Requesting word");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WordFetchError::new(
                WordFetchErrorKind::Status,
                format!("Word endpoint returned {}", status),
            ));
        }

        let WordList(words) = response.json::<WordList>().await?;
        let first = words.into_iter().next().ok_or_else(|| {
            WordFetchError::new(WordFetchErrorKind::Empty, "Word endpoint returned an empty list")
        })?;

        let word = SecretWord::new(&first).map_err(|e| {
            WordFetchError::new(WordFetchErrorKind::InvalidWord, e.to_string())
        })?;
        info!(word_len = word.len(), "Fetched word");
        Ok(word)
    }
}

/// Picks words at random from a fixed list. Used for offline play.
#[derive(Debug, Clone)]
pub struct StaticWordSource {
    words: Vec<SecretWord>,
}

impl StaticWordSource {
    /// Creates a source from a list of words.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty or any entry is not a usable word.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Result<Self, WordFetchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                SecretWord::new(w.as_ref()).map_err(|e| {
                    WordFetchError::new(WordFetchErrorKind::InvalidWord, e.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(WordFetchError::new(
                WordFetchErrorKind::Empty,
                "Word list is empty",
            ));
        }
        Ok(Self { words })
    }

    /// Returns the candidate words.
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    #[instrument(skip(self), fields(candidates = self.words.len()))]
    async fn fetch_word(&self) -> Result<SecretWord, WordFetchError> {
        let picked = self.words.choose(&mut rand::thread_rng()).cloned();
        picked.ok_or_else(|| WordFetchError::new(WordFetchErrorKind::Empty, "Word list is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_rejects_empty_list() {
        let err = StaticWordSource::new(Vec::<String>::new()).expect_err("empty list");
        assert_eq!(err.kind, WordFetchErrorKind::Empty);
    }

    #[test]
    fn test_static_source_rejects_bad_word() {
        let err = StaticWordSource::new(["fine", "not fine"]).expect_err("bad word");
        assert_eq!(err.kind, WordFetchErrorKind::InvalidWord);
    }

    #[tokio::test]
    async fn test_static_source_picks_from_list() {
        let source = StaticWordSource::new(["Apple", "pear"]).expect("valid words");
        let word = source.fetch_word().await.expect("non-empty list");
        assert!(["apple", "pear"].contains(&word.as_str()));
    }

    #[test]
    fn test_error_tracks_location() {
        let err = WordFetchError::new(WordFetchErrorKind::Parse, "bad body");
        assert!(err.file.ends_with("word_source.rs"));
        assert!(err.to_string().contains("(parse): bad body"));
    }
}
