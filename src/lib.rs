//! Wordle Ranker
//!
//! Filters possible Wordle answers against known clues and ranks every guess
//! in a vocabulary by how many candidates it is expected to leave.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::constraint::clues::Clues;
//! use wordle_ranker::ranker::{RankConfig, Ranker};
//! use wordle_ranker::wordlists::words_from_slice;
//!
//! let vocabulary = words_from_slice(&["least", "feast", "beast", "blest"]).unwrap();
//! let answers = words_from_slice(&["least", "feast", "beast"]).unwrap();
//!
//! let clues = Clues {
//!     correct: Some("_east".to_string()),
//!     ..Clues::default()
//! };
//! let constraint = clues.to_constraint().unwrap();
//!
//! let config = RankConfig { show_progress: false, ..RankConfig::default() };
//! let report = Ranker::new(config, &vocabulary, &answers).run(&constraint).unwrap();
//!
//! for entry in report.top(3) {
//!     println!("{}\t{}", entry.word, entry.expected_remaining);
//! }
//! ```

// Core domain types
pub mod core;

// Knowledge about the hidden word
pub mod constraint;

// Filtering, feedback and scoring
pub mod evaluator;
pub mod feedback;
pub mod filter;

// Orchestration
pub mod ranker;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

pub mod logging;
