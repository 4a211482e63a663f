//! History records each guess exactly once.

use super::Invariant;
use crate::RoundInProgress;
use std::collections::BTreeSet;

/// Invariant: the guess history has no repeats and covers exactly the
/// correct and wrong letters.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let guesses = round.guesses();
        let history: BTreeSet<_> = guesses.history().iter().copied().collect();
        let recorded: BTreeSet<_> = guesses.correct().union(guesses.wrong()).copied().collect();

        history.len() == guesses.history().len()
            && history == recorded
            && guesses.history().len() == guesses.correct().len() + guesses.wrong().len()
    }

    fn description() -> &'static str {
        "History lists each guessed letter exactly once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, SecretWord};

    #[test]
    fn test_holds_after_record() {
        let word = SecretWord::new("ab").expect("alphabetic word");
        let mut round = RoundInProgress::new(word);
        round.guesses.record(Letter::new('a').expect("valid letter"), true);
        round.guesses.record(Letter::new('q').expect("valid letter"), false);
        assert!(HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_detects_unrecorded_letter() {
        let word = SecretWord::new("ab").expect("alphabetic word");
        let mut round = RoundInProgress::new(word);
        round.guesses.corrupt_wrong(Letter::new('q').expect("valid letter"));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
