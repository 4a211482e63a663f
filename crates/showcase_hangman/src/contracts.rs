//! Contract-based validation for guesses.
//!
//! Contracts formalize Hoare-style reasoning: {P} guess {Q}.

use crate::invariants::{HangmanInvariants, InvariantSet};
use crate::{Guess, GuessError, RoundInProgress, MAX_WRONG_GUESSES};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

/// Precondition: the gallows is not yet complete.
pub struct AttemptsRemain;

impl AttemptsRemain {
    /// Fails with [`GuessError::NotPlayable`] once six misses are recorded.
    #[instrument(skip(round))]
    pub fn check(round: &RoundInProgress) -> Result<(), GuessError> {
        if round.guesses().wrong_count() >= MAX_WRONG_GUESSES {
            warn!("Guess attempted on a completed gallows");
            Err(GuessError::NotPlayable)
        } else {
            Ok(())
        }
    }
}

/// Postcondition: guessed letters only ever accumulate.
pub struct LettersMonotonic;

impl LettersMonotonic {
    /// Returns true if `after` still contains every letter of `before`.
    #[instrument(skip_all)]
    pub fn holds(before: &RoundInProgress, after: &RoundInProgress) -> bool {
        let (was, now) = (before.guesses(), after.guesses());
        let valid = was.correct().is_subset(now.correct())
            && was.wrong().is_subset(now.wrong())
            && now.history().starts_with(was.history());
        if !valid {
            warn!("Guessed letters shrank");
        }
        valid
    }
}

/// Contract for guesses.
///
/// Preconditions:
/// - Fewer than six misses recorded
///
/// Postconditions:
/// - Letters only accumulate
/// - Round invariants hold
pub struct GuessContract;

impl Contract<RoundInProgress, Guess> for GuessContract {
    fn pre(round: &RoundInProgress, _guess: &Guess) -> Result<(), GuessError> {
        AttemptsRemain::check(round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), GuessError> {
        if !LettersMonotonic::holds(before, after) {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: guessed letters shrank".to_string(),
            ));
        }
        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
