//! Guesses are classified against the secret word.

use super::Invariant;
use crate::RoundInProgress;

/// Invariant: every correct letter occurs in the word and no wrong letter does.
pub struct PartitionMatchesWordInvariant;

impl Invariant<RoundInProgress> for PartitionMatchesWordInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let word = round.word();
        let guesses = round.guesses();
        guesses.correct().iter().all(|&letter| word.contains(letter))
            && guesses.wrong().iter().all(|&letter| !word.contains(letter))
    }

    fn description() -> &'static str {
        "Correct letters occur in the word; wrong letters do not"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, SecretWord};

    #[test]
    fn test_detects_misclassified_letter() {
        let word = SecretWord::new("ab").expect("alphabetic word");
        let mut round = RoundInProgress::new(word);
        round.guesses.record(Letter::new('z').expect("valid letter"), true);
        assert!(!PartitionMatchesWordInvariant::holds(&round));
    }
}
