//! Word lists for Wordle solving
//!
//! Loads the guess vocabulary and the candidate answers from JSON arrays or
//! line-delimited text files.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_word_list, words_from_slice};
