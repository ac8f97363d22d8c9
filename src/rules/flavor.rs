//! Flavor text for the result screen.

use crate::core::RandomSource;

const SUCCESS_LINES: [&str; 3] = [
    "Stas is proud of you!",
    "The team is impressed!",
    "The clients are thrilled!",
];

const FAILURE_LINES: [&str; 3] = [
    "Stas flopped at the review...",
    "Guess we're showing the Jira board instead...",
    "Everyone left for a coffee break.",
];

/// Picks a closing line for a finished session.
///
/// ```
/// use slide_rush::core::ScriptedRandom;
/// use slide_rush::rules::FlavorText;
///
/// let line = FlavorText::pick(true, &mut ScriptedRandom::new(vec![0.0]));
/// assert_eq!(line, "Stas is proud of you!");
/// ```
pub struct FlavorText;

impl FlavorText {
    /// All candidate lines for an outcome.
    #[must_use]
    pub fn lines(success: bool) -> &'static [&'static str] {
        if success {
            &SUCCESS_LINES
        } else {
            &FAILURE_LINES
        }
    }

    /// One line, chosen by `rng`.
    pub fn pick(success: bool, rng: &mut impl RandomSource) -> &'static str {
        let lines = Self::lines(success);
        lines[rng.next_index(lines.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRandom};

    #[test]
    fn test_pick_stays_in_outcome_pool() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert!(SUCCESS_LINES.contains(&FlavorText::pick(true, &mut rng)));
            assert!(FAILURE_LINES.contains(&FlavorText::pick(false, &mut rng)));
        }
    }

    #[test]
    fn test_scripted_pick() {
        let mut rng = ScriptedRandom::new(vec![0.99]);
        assert_eq!(
            FlavorText::pick(false, &mut rng),
            "Everyone left for a coffee break."
        );
    }
}
