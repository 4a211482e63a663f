//! Round outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every letter of the word was guessed.
    Won,
    /// The gallows was completed.
    Lost,
}

impl Outcome {
    /// Returns true if the player won.
    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "You won"),
            Outcome::Lost => write!(f, "You lost"),
        }
    }
}
