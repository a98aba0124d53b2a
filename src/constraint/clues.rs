//! Clue parsing
//!
//! Turns the compact clue notation used on the command line into constraint
//! parts:
//! - correct letters: `"__a_t"` (`_`, `.`, `?` or space for unknown)
//! - misplaced letters: `"e,,,tl,es"` (one comma-separated field per position)
//! - wrong letters: `"roncbyr"`
//! - played guesses: `"crane=--G-G"` (see [`Pattern::parse`])

use super::Constraint;
use crate::core::{LetterSet, Pattern, WORD_LENGTH, Word, WordError};
use log::debug;
use std::fmt;

/// Error type for malformed clue strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    /// A positional clue does not have one slot per letter
    WrongSlotCount { expected: usize, found: usize },
    /// A character that is neither a letter nor an allowed placeholder
    InvalidCharacter(char),
    /// An observation is not of the form `WORD=PATTERN`
    MalformedObservation(String),
    InvalidWord(WordError),
    InvalidPattern(String),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSlotCount { expected, found } => {
                write!(f, "Expected {expected} positions, got {found}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Invalid character '{ch}' in clue"),
            Self::MalformedObservation(text) => {
                write!(f, "Expected WORD=PATTERN (e.g. crane=--G-Y), got '{text}'")
            }
            Self::InvalidWord(err) => write!(f, "Invalid guess: {err}"),
            Self::InvalidPattern(text) => write!(f, "Invalid pattern string: {text}"),
        }
    }
}

impl std::error::Error for ClueError {}

fn letter(ch: char) -> Result<u8, ClueError> {
    let lower = ch.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok(lower as u8)
    } else {
        Err(ClueError::InvalidCharacter(ch))
    }
}

fn letters(text: &str) -> Result<LetterSet, ClueError> {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(letter)
        .collect::<Result<Vec<_>, _>>()
        .map(LetterSet::from_iter)
}

/// Parse the known-position clue, one character per position
///
/// # Errors
/// Returns `ClueError` if the clue has the wrong length or contains a
/// character that is neither a letter nor a placeholder.
///
/// # Examples
/// ```
/// use wordle_ranker::constraint::clues::parse_correct;
///
/// let slots = parse_correct("__a_t").unwrap();
/// assert_eq!(slots, [None, None, Some(b'a'), None, Some(b't')]);
/// ```
pub fn parse_correct(text: &str) -> Result<[Option<u8>; WORD_LENGTH], ClueError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != WORD_LENGTH {
        return Err(ClueError::WrongSlotCount {
            expected: WORD_LENGTH,
            found: chars.len(),
        });
    }

    let mut slots = [None; WORD_LENGTH];
    for (slot, ch) in slots.iter_mut().zip(chars) {
        *slot = match ch {
            '_' | '.' | '?' | ' ' => None,
            other => Some(letter(other)?),
        };
    }
    Ok(slots)
}

/// Parse the misplaced-letter clue, one comma-separated field per position
///
/// An empty string means nothing is known.
///
/// # Errors
/// Returns `ClueError` if the clue does not have one field per position or
/// contains a non-letter.
pub fn parse_misplaced(text: &str) -> Result<[LetterSet; WORD_LENGTH], ClueError> {
    let mut sets = [LetterSet::EMPTY; WORD_LENGTH];
    if text.trim().is_empty() {
        return Ok(sets);
    }

    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != WORD_LENGTH {
        return Err(ClueError::WrongSlotCount {
            expected: WORD_LENGTH,
            found: fields.len(),
        });
    }

    for (set, field) in sets.iter_mut().zip(fields) {
        *set = letters(field)?;
    }
    Ok(sets)
}

/// Parse the wrong-letter clue; repeated letters are allowed
///
/// # Errors
/// Returns `ClueError::InvalidCharacter` on a non-letter.
pub fn parse_wrong(text: &str) -> Result<LetterSet, ClueError> {
    letters(text)
}

/// Parse a played guess and its feedback, written `WORD=PATTERN`
///
/// # Errors
/// Returns `ClueError` if either half is malformed.
///
/// # Examples
/// ```
/// use wordle_ranker::constraint::clues::parse_observation;
///
/// let (guess, pattern) = parse_observation("crane=--G-G").unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert_eq!(pattern.to_string(), "--G-G");
/// ```
pub fn parse_observation(text: &str) -> Result<(Word, Pattern), ClueError> {
    let (word, pattern) = text
        .split_once(['=', ':'])
        .ok_or_else(|| ClueError::MalformedObservation(text.to_string()))?;

    let word = Word::new(word.trim()).map_err(ClueError::InvalidWord)?;
    let pattern = Pattern::parse(pattern.trim())
        .ok_or_else(|| ClueError::InvalidPattern(pattern.trim().to_string()))?;

    Ok((word, pattern))
}

/// The raw clue strings for one run
#[derive(Debug, Clone, Default)]
pub struct Clues {
    pub correct: Option<String>,
    pub misplaced: Option<String>,
    pub wrong: Option<String>,
    pub observations: Vec<String>,
}

/// Why a set of clues could not be turned into a constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CluesError {
    Parse(ClueError),
    Conflict(super::ConflictError),
}

impl fmt::Display for CluesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Conflict(err) => write!(f, "Contradictory clues: {err}"),
        }
    }
}

impl std::error::Error for CluesError {}

impl From<ClueError> for CluesError {
    fn from(err: ClueError) -> Self {
        Self::Parse(err)
    }
}

impl From<super::ConflictError> for CluesError {
    fn from(err: super::ConflictError) -> Self {
        Self::Conflict(err)
    }
}

impl Clues {
    /// Build the initial constraint from the clue strings
    ///
    /// The explicit clues form one constraint; each observation is converted
    /// with [`Constraint::from_pattern`] and merged in.
    ///
    /// # Errors
    /// Returns `CluesError::Parse` for malformed clue text and
    /// `CluesError::Conflict` if the clues contradict each other.
    pub fn to_constraint(&self) -> Result<Constraint, CluesError> {
        let positional = self
            .correct
            .as_deref()
            .map(parse_correct)
            .transpose()?
            .unwrap_or([None; WORD_LENGTH]);
        let excluded_at = self
            .misplaced
            .as_deref()
            .map(parse_misplaced)
            .transpose()?
            .unwrap_or_default();
        let absent = self
            .wrong
            .as_deref()
            .map(parse_wrong)
            .transpose()?
            .unwrap_or_default();

        let explicit = Constraint::new(positional, excluded_at, absent)?;

        let observed = self
            .observations
            .iter()
            .map(|text| -> Result<Constraint, ClueError> {
                let (guess, pattern) = parse_observation(text)?;
                debug!("Observed {guess} {}", pattern.to_emoji());
                Ok(Constraint::from_pattern(&guess, pattern))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Constraint::merge_all(std::iter::once(&explicit).chain(&observed))?)
    }
}
