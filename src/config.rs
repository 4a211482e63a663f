//! Showcase configuration.
//!
//! Values come from an optional TOML file, then environment variables
//! (`.env` is loaded by the binary) override individual fields.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable overriding [`ShowcaseConfig::word_url`].
pub const ENV_WORD_URL: &str = "SHOWCASE_WORD_URL";
/// Environment variable overriding [`ShowcaseConfig::fetch_timeout_ms`].
pub const ENV_FETCH_TIMEOUT_MS: &str = "SHOWCASE_FETCH_TIMEOUT_MS";
/// Environment variable overriding [`ShowcaseConfig::page_size`].
pub const ENV_PAGE_SIZE: &str = "SHOWCASE_PAGE_SIZE";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Random-word endpoint answering with a JSON array of words.
    #[serde(default = "default_word_url")]
    word_url: String,

    /// Timeout for one word request, in milliseconds.
    #[serde(default = "default_fetch_timeout_ms")]
    fetch_timeout_ms: u64,

    /// Items per page for `paginate`.
    #[serde(default = "default_page_size")]
    page_size: usize,

    /// Words used when playing offline.
    #[serde(default = "default_offline_words")]
    offline_words: Vec<String>,
}

fn default_word_url() -> String {
    "https://random-word-api.herokuapp.com/word".to_string()
}

fn default_fetch_timeout_ms() -> u64 {
    5000
}

fn default_page_size() -> usize {
    10
}

fn default_offline_words() -> Vec<String> {
    ["ferris", "borrow", "lifetime", "trait", "crate", "closure", "iterator", "pattern"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            word_url: default_word_url(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            page_size: default_page_size(),
            offline_words: default_offline_words(),
        }
    }
}

impl ShowcaseConfig {
    /// Loads the file (if given), applies environment overrides and validates.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(word_url = %config.word_url, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides fields from `lookup`, keyed by the `SHOWCASE_*` variable names.
    #[instrument(skip_all)]
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_WORD_URL) {
            debug!(%url, "Word URL overridden");
            self.word_url = url;
        }
        if let Some(raw) = lookup(ENV_FETCH_TIMEOUT_MS) {
            self.fetch_timeout_ms = raw.trim().parse().map_err(|e| {
                ConfigError::new(format!("Invalid {}={:?}: {}", ENV_FETCH_TIMEOUT_MS, raw, e))
            })?;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw.trim().parse().map_err(|e| {
                ConfigError::new(format!("Invalid {}={:?}: {}", ENV_PAGE_SIZE, raw, e))
            })?;
        }
        Ok(self)
    }

    /// Rejects values the engines cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_url.trim().is_empty() {
            return Err(ConfigError::new("word_url must not be empty".to_string()));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::new("fetch_timeout_ms must be positive".to_string()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::new("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Word request timeout as a duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Replaces the word endpoint.
    pub fn set_word_url(&mut self, url: impl Into<String>) {
        self.word_url = url.into();
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.fetch_timeout(), Duration::from_millis(5000));
        assert_eq!(*config.page_size(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ShowcaseConfig::from_toml_str("page_size = 3").expect("valid toml");
        assert_eq!(*config.page_size(), 3);
        assert_eq!(*config.fetch_timeout_ms(), 5000);
    }

    #[test]
    fn test_overrides_apply() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_WORD_URL, "http://localhost:9/word"),
            (ENV_PAGE_SIZE, " 25 "),
        ]);
        let config = ShowcaseConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .expect("valid overrides");
        assert_eq!(config.word_url(), "http://localhost:9/word");
        assert_eq!(*config.page_size(), 25);
    }

    #[test]
    fn test_bad_override_rejected() {
        let result = ShowcaseConfig::default().with_overrides(|key| {
            (key == ENV_FETCH_TIMEOUT_MS).then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_page_size_invalid() {
        let config = ShowcaseConfig::from_toml_str("page_size = 0").expect("valid toml");
        assert!(config.validate().is_err());
    }
}
