//! Word list loading utilities
//!
//! Two encodings are accepted:
//! - a JSON array of strings, e.g. `["slate", "shalt", "crate"]`
//! - plain text with one word per line; blank lines and lines starting with
//!   `#` are ignored
//!
//! Every entry must be a valid 5-letter word. Order and duplicates are kept.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    /// Entry `line` (1-based line number, or array index + 1 for JSON) is not
    /// a valid word
    InvalidWord {
        line: usize,
        text: String,
        error: WordError,
    },
    /// The list contains no words
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Json(err) => write!(f, "Invalid JSON word list: {err}"),
            Self::InvalidWord { line, text, error } => {
                write!(f, "Invalid word '{text}' at entry {line}: {error}")
            }
            Self::Empty => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidWord { error, .. } => Some(error),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read, is not valid JSON when
/// it looks like JSON, contains an invalid word, or contains no words.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::load_from_file;
///
/// let words = load_from_file("ValidWords.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse a word list from its text, detecting the encoding
///
/// # Errors
///
/// See [`load_from_file`].
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::parse_word_list;
///
/// let json = parse_word_list(r#"["slate", "shalt"]"#).unwrap();
/// let text = parse_word_list("slate\n\n# comment\nshalt\n").unwrap();
/// assert_eq!(json, text);
/// ```
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    let words = if content.trim_start().starts_with('[') {
        let entries: Vec<String> = serde_json::from_str(content)?;
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, text)| to_word(idx + 1, text.trim()))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        content
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(line, text)| to_word(line, text))
            .collect::<Result<Vec<_>, _>>()?
    };

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Convert a string slice to a Word vector
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first invalid entry. An empty
/// slice gives an empty vector.
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, LoadError> {
    slice
        .iter()
        .enumerate()
        .map(|(idx, &text)| to_word(idx + 1, text))
        .collect()
}

fn to_word(line: usize, text: &str) -> Result<Word, LoadError> {
    Word::new(text).map_err(|error| LoadError::InvalidWord {
        line,
        text: text.to_string(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn json_array() {
        let words = parse_word_list(r#"["slate", "SHALT", "crate"]"#).unwrap();
        assert_eq!(texts(&words), vec!["slate", "shalt", "crate"]);
    }

    #[test]
    fn line_delimited_keeps_order_and_duplicates() {
        let words = parse_word_list("crate\n  slate \n\n# skip me\ncrate\n").unwrap();
        assert_eq!(texts(&words), vec!["crate", "slate", "crate"]);
    }

    #[test]
    fn invalid_word_reports_line() {
        let err = parse_word_list("crate\nslates\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord {
                line: 2,
                error: WordError::InvalidLength(6),
                ..
            }
        ));
        assert!(err.to_string().contains("slates"));
    }

    #[test]
    fn invalid_json_entry_reports_index() {
        let err = parse_word_list(r#"["crate", "cr4te"]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidWord { line: 2, .. }));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_word_list(r#"["crate", "#),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(parse_word_list("[1, 2]"), Err(LoadError::Json(_))));
    }

    #[test]
    fn empty_lists_rejected() {
        assert!(matches!(parse_word_list(""), Err(LoadError::Empty)));
        assert!(matches!(parse_word_list("[]"), Err(LoadError::Empty)));
        assert!(matches!(parse_word_list("# only\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn missing_file() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]).unwrap();
        assert_eq!(texts(&words), vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        let result = words_from_slice(&["crane", "toolong"]);
        assert!(matches!(result, Err(LoadError::InvalidWord { line: 2, .. })));
        assert!(words_from_slice(&[]).unwrap().is_empty());
    }
}
