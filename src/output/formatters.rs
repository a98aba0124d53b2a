//! Formatting utilities for terminal output

use crate::evaluator::ScoreEntry;

/// Format a ranking entry as `word<TAB>score`
#[must_use]
pub fn ranking_line(entry: &ScoreEntry<'_>) -> String {
    format!("{}\t{}", entry.word, entry.expected_remaining)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the candidate pool a guess is expected to leave
#[must_use]
pub fn remaining_bar(expected_remaining: f64, pool_size: usize, width: usize) -> String {
    create_progress_bar(expected_remaining, pool_size as f64, width)
}
