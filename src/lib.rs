//! Showcase library - pagination and hangman, wired to real word sources.
//!
//! The pure engines live in their own crates and are re-exported here:
//!
//! - [`showcase_pagination`]: bounds-safe pagination over slices
//! - [`showcase_hangman`]: hangman rounds, contracts and the reducer store
//!
//! This crate adds what needs I/O or configuration:
//!
//! - **Word sources**: [`HttpWordSource`] (random-word endpoint with a
//!   timeout) and [`StaticWordSource`] (offline list)
//! - **Session**: [`HangmanSession`], a context-passed handle over one game
//! - **Config**: [`ShowcaseConfig`] from TOML plus `SHOWCASE_*` overrides
//!
//! # Example
//!
//! ```no_run
//! use showcase::{HangmanSession, HttpWordSource, ShowcaseConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ShowcaseConfig::load(None)?;
//! let source = HttpWordSource::new(config.word_url(), config.fetch_timeout())?;
//! let session = HangmanSession::new(Arc::new(source));
//! session.fetch_word().await;
//! println!("{:?}", session.view().masked_word);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod listing;
mod play;
mod session;
mod word_source;

pub use config::{ConfigError, ShowcaseConfig, ENV_FETCH_TIMEOUT_MS, ENV_PAGE_SIZE, ENV_WORD_URL};
pub use listing::render_page;
pub use play::{play, render, Command};
pub use session::{HangmanSession, DEFAULT_FETCH_TIMEOUT};
pub use word_source::{HttpWordSource, StaticWordSource, WordFetchError, WordFetchErrorKind, WordSource};

pub use showcase_hangman;
pub use showcase_pagination;
