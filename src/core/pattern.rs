//! Wordle feedback pattern calculation and representation
//!
//! A pattern records, for each position of a guess, whether the letter is
//! correct (green), misplaced (yellow) or absent (gray).

use super::letters::{ALPHABET_SIZE, letter_index};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Gray: no unmatched occurrence of the letter is left in the answer
    Absent,
    /// Yellow: the letter occurs elsewhere in the answer
    Misplaced,
    /// Green: the letter is in the correct position
    Correct,
}

impl Mark {
    const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Misplaced => 'Y',
            Self::Correct => 'G',
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Misplaced => '🟨',
            Self::Correct => '🟩',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Mark; WORD_LENGTH]);

impl Pattern {
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{Pattern, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let answer = Word::new("floor").unwrap();
    ///
    /// // The second O is green, so the first one only gets the other O
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "YY-G-");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Mark::Absent; WORD_LENGTH];
        let mut answer_available = [0u8; ALPHABET_SIZE];

        // First pass: Mark greens, counting the answer letters they don't use
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Mark::Correct;
            } else {
                answer_available[letter_index(a)] += 1;
            }
        }

        // Second pass: Mark yellows while unmatched occurrences remain
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Mark::Correct {
                continue;
            }
            let available = &mut answer_available[letter_index(g)];
            if *available > 0 {
                result[i] = Mark::Misplaced;
                *available -= 1;
            }
        }

        Self(result)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut marks {
            *slot = Mark::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
