//! Guess feedback simulation
//!
//! Derives the constraint a player would learn by guessing a word when a
//! given candidate is the answer.

use crate::constraint::Constraint;
use crate::core::{Pattern, Word};
use std::fmt;
use std::str::FromStr;

/// How feedback is derived from a guess and a hypothetical answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    /// Each guess letter is classified on its own by a presence test
    #[default]
    Presence,
    /// Wordle's count-aware rules: repeated letters only score while unmatched
    /// copies remain in the answer
    Exact,
}

impl FeedbackMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for FeedbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeedbackMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "presence" | "naive" => Ok(Self::Presence),
            other => Err(format!(
                "Unknown feedback mode '{other}' (expected 'exact' or 'presence')"
            )),
        }
    }
}

/// The constraint learned by guessing `guess` when `solution` is the answer
///
/// The answer always satisfies the constraint derived from its own feedback,
/// in either mode.
///
/// # Examples
/// ```
/// use wordle_ranker::core::Word;
/// use wordle_ranker::feedback::{FeedbackMode, derive};
/// use wordle_ranker::filter::matches;
///
/// let solution = Word::new("abide").unwrap();
/// let guess = Word::new("speed").unwrap();
///
/// for mode in [FeedbackMode::Exact, FeedbackMode::Presence] {
///     let constraint = derive(mode, &solution, &guess);
///     assert!(matches(&constraint, &solution));
/// }
///
/// // Only exact feedback knows ABIDE has a single E
/// let exact = derive(FeedbackMode::Exact, &solution, &guess);
/// assert_eq!(exact.count_bounds(b'e'), Some((1, 1)));
/// ```
#[must_use]
pub fn derive(mode: FeedbackMode, solution: &Word, guess: &Word) -> Constraint {
    match mode {
        FeedbackMode::Exact => Constraint::from_pattern(guess, Pattern::calculate(guess, solution)),
        FeedbackMode::Presence => Constraint::derive_from_guess(solution, guess),
    }
}
