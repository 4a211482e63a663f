//! Correct and wrong letters never overlap.

use super::Invariant;
use crate::RoundInProgress;

/// Invariant: no letter is both correct and wrong.
pub struct DisjointLettersInvariant;

impl Invariant<RoundInProgress> for DisjointLettersInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let guesses = round.guesses();
        guesses.correct().is_disjoint(guesses.wrong())
    }

    fn description() -> &'static str {
        "Correct and wrong letters are disjoint"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, SecretWord};

    #[test]
    fn test_detects_overlap() {
        let word = SecretWord::new("ab").expect("alphabetic word");
        let a = Letter::new('a').expect("valid letter");
        let mut round = RoundInProgress::new(word);
        round.guesses.record(a, true);
        assert!(DisjointLettersInvariant::holds(&round));

        round.guesses.corrupt_wrong(a);
        assert!(!DisjointLettersInvariant::holds(&round));
    }
}
