//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use pattern::{Mark, Pattern};
pub use word::{WORD_LENGTH, Word, WordError};
