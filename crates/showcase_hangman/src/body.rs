//! Gallows body parts, one per wrong guess.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Body parts drawn on the gallows, in drawing order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum BodyPart {
    /// First wrong guess.
    Head,
    /// Second wrong guess.
    Body,
    /// Third wrong guess.
    LeftArm,
    /// Fourth wrong guess.
    RightArm,
    /// Fifth wrong guess.
    LeftLeg,
    /// Sixth wrong guess; the round is lost.
    RightLeg,
}

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG_GUESSES: usize = BodyPart::COUNT;

impl BodyPart {
    /// Returns the parts drawn after `wrong_guesses` misses.
    pub fn revealed(wrong_guesses: usize) -> impl Iterator<Item = BodyPart> {
        BodyPart::iter().take(wrong_guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_parts() {
        assert_eq!(MAX_WRONG_GUESSES, 6);
    }

    #[test]
    fn test_revealed_in_order() {
        let parts: Vec<_> = BodyPart::revealed(3).collect();
        assert_eq!(parts, vec![BodyPart::Head, BodyPart::Body, BodyPart::LeftArm]);
        assert_eq!(BodyPart::revealed(99).count(), 6);
        assert_eq!(BodyPart::LeftLeg.to_string(), "left_leg");
    }
}
