//! Constraint model for the hidden word
//!
//! A `Constraint` holds everything known about the answer: letters fixed at a
//! position, letters known to be present but not at a given position, letters
//! absent from the word, and optional bounds on how often a letter occurs.
//! Constraints are values: merging or deriving always builds a new one.

pub mod clues;

use crate::core::{ALPHABET_SIZE, LetterSet, Mark, Pattern, WORD_LENGTH, Word, letter_index};
use std::fmt;

const MAX_COUNT: u8 = WORD_LENGTH as u8;

/// Knowledge about a single hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    positional: [Option<u8>; WORD_LENGTH],
    excluded_at: [LetterSet; WORD_LENGTH],
    absent: LetterSet,
    min_counts: [u8; ALPHABET_SIZE],
    max_counts: [u8; ALPHABET_SIZE],
    bounded: LetterSet,
}

/// Two pieces of knowledge about the hidden word contradict each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    /// Two different letters are required at the same position
    Positional {
        position: usize,
        first: char,
        second: char,
    },
    /// A letter is required at a position where it is also excluded
    RequiredAndExcluded { position: usize, letter: char },
    /// A letter is known to be in the word and also known to be absent
    PresentAndAbsent { letter: char },
    /// The occurrence bounds for a letter cannot both hold
    ContradictoryCount { letter: char, min: u8, max: u8 },
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional {
                position,
                first,
                second,
            } => write!(
                f,
                "Conflicting correct letters at position {}: '{first}' and '{second}'",
                position + 1
            ),
            Self::RequiredAndExcluded { position, letter } => write!(
                f,
                "Letter '{letter}' is both correct and misplaced at position {}",
                position + 1
            ),
            Self::PresentAndAbsent { letter } => {
                write!(f, "Letter '{letter}' is both in the word and absent from it")
            }
            Self::ContradictoryCount { letter, min, max } => write!(
                f,
                "Letter '{letter}' must occur at least {min} and at most {max} times"
            ),
        }
    }
}

impl std::error::Error for ConflictError {}

impl Default for Constraint {
    fn default() -> Self {
        Self::none()
    }
}

impl Constraint {
    /// A constraint that every word satisfies
    #[must_use]
    pub const fn none() -> Self {
        Self {
            positional: [None; WORD_LENGTH],
            excluded_at: [LetterSet::EMPTY; WORD_LENGTH],
            absent: LetterSet::EMPTY,
            min_counts: [0; ALPHABET_SIZE],
            max_counts: [MAX_COUNT; ALPHABET_SIZE],
            bounded: LetterSet::EMPTY,
        }
    }

    /// Build a constraint from user-supplied clues
    ///
    /// - `positional`: the letter known to be at each position, if any
    /// - `excluded_at`: letters known to be in the word but not at that position
    /// - `absent`: letters known not to be in the word at all
    ///
    /// # Errors
    /// Returns `ConflictError` if the clues contradict each other.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::constraint::Constraint;
    /// use wordle_ranker::core::LetterSet;
    ///
    /// let mut positional = [None; 5];
    /// positional[2] = Some(b'a');
    ///
    /// let constraint = Constraint::new(positional, Default::default(), LetterSet::from_bytes(b"ron"))
    ///     .unwrap();
    /// assert_eq!(constraint.positional(2), Some(b'a'));
    ///
    /// // 'a' cannot be both at position 2 and absent
    /// assert!(Constraint::new(positional, Default::default(), LetterSet::from_bytes(b"a")).is_err());
    /// ```
    pub fn new(
        positional: [Option<u8>; WORD_LENGTH],
        excluded_at: [LetterSet; WORD_LENGTH],
        absent: LetterSet,
    ) -> Result<Self, ConflictError> {
        let constraint = Self {
            positional,
            excluded_at,
            absent,
            ..Self::none()
        };
        constraint.validate()?;
        Ok(constraint)
    }

    /// Add occurrence bounds for a letter to a copy of this constraint
    ///
    /// Bounds combine with any existing ones by intersection.
    ///
    /// # Errors
    /// Returns `ConflictError` if the combined bounds are unsatisfiable.
    pub fn with_count_bounds(&self, letter: u8, min: u8, max: u8) -> Result<Self, ConflictError> {
        let mut constraint = self.clone();
        constraint.bound_count(letter, min, max);
        constraint.validate()?;
        Ok(constraint)
    }

    /// The feedback constraint for guessing `guess` when the answer is `solution`
    ///
    /// Classifies each guess position on its own:
    /// - same letter as the solution: the letter is fixed there
    /// - letter occurs anywhere in the solution: present, but not there
    /// - otherwise: absent
    ///
    /// Repeated letters are not counted, so a guess with two E's against an
    /// answer with one E records both as present.
    #[must_use]
    pub fn derive_from_guess(solution: &Word, guess: &Word) -> Self {
        let mut constraint = Self::none();

        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                constraint.positional[i] = Some(g);
            } else if solution.has_letter(g) {
                constraint.excluded_at[i].insert(g);
            } else {
                constraint.absent.insert(g);
            }
        }

        constraint
    }

    /// The constraint implied by seeing `pattern` after guessing `guess`
    ///
    /// Greens fix a letter, yellows mark it present elsewhere. A gray letter is
    /// absent only if no other copy of it scored green or yellow; otherwise it
    /// is excluded at that position and the letter's count is capped at the
    /// number of copies that did score.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::constraint::Constraint;
    /// use wordle_ranker::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let pattern = Pattern::parse("--Y-Y").unwrap();
    /// let constraint = Constraint::from_pattern(&guess, pattern);
    ///
    /// // Exactly one E, and it is neither third nor fourth
    /// assert_eq!(constraint.count_bounds(b'e'), Some((1, 1)));
    /// assert!(constraint.excluded_at(3).contains(b'e'));
    /// assert!(!constraint.absent().contains(b'e'));
    /// ```
    #[must_use]
    pub fn from_pattern(guess: &Word, pattern: Pattern) -> Self {
        let mut constraint = Self::none();
        let mut hits = [0u8; ALPHABET_SIZE];
        let mut grayed = LetterSet::EMPTY;

        for (&letter, &mark) in guess.chars().iter().zip(pattern.marks()) {
            if mark == Mark::Absent {
                grayed.insert(letter);
            } else {
                hits[letter_index(letter)] += 1;
            }
        }

        for (i, (&letter, &mark)) in guess.chars().iter().zip(pattern.marks()).enumerate() {
            let scored = hits[letter_index(letter)];
            match mark {
                Mark::Correct => constraint.positional[i] = Some(letter),
                Mark::Misplaced => constraint.excluded_at[i].insert(letter),
                Mark::Absent if scored == 0 => constraint.absent.insert(letter),
                Mark::Absent => constraint.excluded_at[i].insert(letter),
            }
        }

        for letter in guess.letters().iter() {
            let scored = hits[letter_index(letter)];
            if scored == 0 {
                continue;
            }
            if grayed.contains(letter) {
                constraint.bound_count(letter, scored, scored);
            } else if scored > 1 {
                constraint.bound_count(letter, scored, MAX_COUNT);
            }
        }

        constraint
    }

    /// Combine two constraints into one that holds exactly when both do
    ///
    /// # Errors
    /// Returns `ConflictError::Positional` if both fix different letters at
    /// the same position, or another `ConflictError` if the union is
    /// otherwise contradictory.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::constraint::{ConflictError, Constraint};
    /// use wordle_ranker::constraint::clues::parse_correct;
    /// use wordle_ranker::core::LetterSet;
    ///
    /// let a = Constraint::new(parse_correct("__a__").unwrap(), Default::default(), LetterSet::EMPTY).unwrap();
    /// let b = Constraint::new(parse_correct("____t").unwrap(), Default::default(), LetterSet::EMPTY).unwrap();
    /// let c = Constraint::new(parse_correct("__o__").unwrap(), Default::default(), LetterSet::EMPTY).unwrap();
    ///
    /// let merged = a.merge(&b).unwrap();
    /// assert_eq!(merged.positional(2), Some(b'a'));
    /// assert_eq!(merged.positional(4), Some(b't'));
    ///
    /// assert!(matches!(a.merge(&c), Err(ConflictError::Positional { position: 2, .. })));
    /// ```
    pub fn merge(&self, other: &Self) -> Result<Self, ConflictError> {
        let mut merged = Self::none();

        for i in 0..WORD_LENGTH {
            merged.positional[i] = match (self.positional[i], other.positional[i]) {
                (Some(a), Some(b)) if a != b => {
                    return Err(ConflictError::Positional {
                        position: i,
                        first: a as char,
                        second: b as char,
                    });
                }
                (a, b) => a.or(b),
            };
            merged.excluded_at[i] = self.excluded_at[i].union(other.excluded_at[i]);
        }

        merged.absent = self.absent.union(other.absent);

        for letter in self.bounded.union(other.bounded).iter() {
            let idx = letter_index(letter);
            merged.bound_count(
                letter,
                self.min_counts[idx].max(other.min_counts[idx]),
                self.max_counts[idx].min(other.max_counts[idx]),
            );
        }

        merged.validate()?;
        Ok(merged)
    }

    /// Merge a sequence of constraints, starting from [`Constraint::none`]
    ///
    /// # Errors
    /// Returns the first `ConflictError` encountered.
    pub fn merge_all<'a, I>(constraints: I) -> Result<Self, ConflictError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        constraints
            .into_iter()
            .try_fold(Self::none(), |acc, next| acc.merge(next))
    }

    /// Check that no two pieces of knowledge contradict each other
    ///
    /// # Errors
    /// Returns the first contradiction found.
    pub fn validate(&self) -> Result<(), ConflictError> {
        let mut present = LetterSet::EMPTY;
        let mut required = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if let Some(letter) = self.positional[i] {
                if self.excluded_at[i].contains(letter) {
                    return Err(ConflictError::RequiredAndExcluded {
                        position: i,
                        letter: letter as char,
                    });
                }
                present.insert(letter);
                required[letter_index(letter)] += 1;
            }
            present = present.union(self.excluded_at[i]);
        }

        if let Some(letter) = present.intersection(self.absent).iter().next() {
            return Err(ConflictError::PresentAndAbsent {
                letter: letter as char,
            });
        }

        for letter in self.bounded.iter() {
            let idx = letter_index(letter);
            let max = self.max_counts[idx];
            let min = self.min_counts[idx]
                .max(required[idx])
                .max(u8::from(present.contains(letter)));

            if min > max {
                return Err(ConflictError::ContradictoryCount {
                    letter: letter as char,
                    min,
                    max,
                });
            }
            if min > 0 && self.absent.contains(letter) {
                return Err(ConflictError::PresentAndAbsent {
                    letter: letter as char,
                });
            }
        }

        Ok(())
    }

    /// The letter fixed at `position`, if known
    #[inline]
    #[must_use]
    pub const fn positional(&self, position: usize) -> Option<u8> {
        self.positional[position]
    }

    /// Letters present in the word but not at `position`
    #[inline]
    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_at[position]
    }

    /// Letters absent from the word
    #[inline]
    #[must_use]
    pub const fn absent(&self) -> LetterSet {
        self.absent
    }

    /// Letters that carry occurrence bounds
    #[inline]
    #[must_use]
    pub const fn bounded_letters(&self) -> LetterSet {
        self.bounded
    }

    /// The `(min, max)` occurrence bounds for a letter, if any were recorded
    #[must_use]
    pub const fn count_bounds(&self, letter: u8) -> Option<(u8, u8)> {
        if self.bounded.contains(letter) {
            let idx = letter_index(letter);
            Some((self.min_counts[idx], self.max_counts[idx]))
        } else {
            None
        }
    }

    /// True if no knowledge has been recorded
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::none()
    }

    fn bound_count(&mut self, letter: u8, min: u8, max: u8) {
        let idx = letter_index(letter);
        self.min_counts[idx] = self.min_counts[idx].max(min);
        self.max_counts[idx] = self.max_counts[idx].min(max);
        self.bounded.insert(letter);
    }
}

impl fmt::Display for Constraint {
    /// Renders in the same notation the clue parsers accept, e.g.
    /// `correct=__a_t misplaced=e,,,lt,es wrong=bcnory`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let correct: String = self
            .positional
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect();
        let misplaced: Vec<String> = self.excluded_at.iter().map(ToString::to_string).collect();

        write!(
            f,
            "correct={correct} misplaced={} wrong={}",
            misplaced.join(","),
            self.absent
        )?;

        for letter in self.bounded.iter() {
            let idx = letter_index(letter);
            write!(
                f,
                " {}={}..{}",
                letter as char, self.min_counts[idx], self.max_counts[idx]
            )?;
        }

        Ok(())
    }
}
