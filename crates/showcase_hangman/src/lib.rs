//! Pure hangman game logic.
//!
//! - [`RoundInProgress`] / [`RoundFinished`]: typestate rounds. A finished
//!   round always carries an [`Outcome`]; only an in-progress round accepts
//!   guesses.
//! - [`GuessContract`]: preconditions and postconditions around a guess,
//!   backed by composable [`invariants`].
//! - [`Hangman`]: reducer store combining a round with the lifecycle of the
//!   word fetch (loading, error, restart). Holds no I/O of its own.
//!
//! # Example
//!
//! ```
//! use showcase_hangman::{Guess, Letter, Outcome, RoundInProgress, RoundResult, SecretWord};
//!
//! let word = SecretWord::new("cat")?;
//! let mut round = RoundInProgress::new(word);
//! for c in ['c', 'a'] {
//!     round = match round.guess(Guess::new(Letter::new(c)?))? {
//!         RoundResult::InProgress(next) => next,
//!         RoundResult::Finished(_) => unreachable!(),
//!     };
//! }
//! match round.guess(Guess::new(Letter::new('t')?))? {
//!     RoundResult::Finished(done) => assert_eq!(done.outcome(), Outcome::Won),
//!     RoundResult::InProgress(_) => unreachable!(),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod action;
mod body;
mod contracts;
pub mod invariants;
mod letter;
mod phases;
mod rules;
mod store;
mod types;
mod typestate;
mod word;

pub use action::{Guess, GuessError};
pub use body::{BodyPart, MAX_WRONG_GUESSES};
pub use contracts::{AttemptsRemain, Contract, GuessContract, LettersMonotonic};
pub use letter::Letter;
pub use phases::Outcome;
pub use rules::{is_hanged, is_solved};
pub use store::{FetchResolution, FetchToken, Hangman, HangmanView, Status};
pub use types::Guesses;
pub use typestate::{RoundFinished, RoundInProgress, RoundResult};
pub use word::{SecretWord, WordError};
