//! Terminal output formatting
//!
//! Result lines go to a caller-supplied writer (stdout in the CLI); the
//! colored summary goes to stderr.

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_ranking, print_summary};
