//! Display functions for ranking results

use super::formatters::{ranking_line, remaining_bar};
use crate::core::Word;
use crate::evaluator::ScoreEntry;
use crate::ranker::RankReport;
use colored::Colorize;
use std::io::{self, Write};

/// Write the candidate pool, one word per line, followed by its size, a blank
/// line and the vocabulary size
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_candidates<W: Write>(
    out: &mut W,
    candidates: &[&Word],
    vocabulary_size: usize,
) -> io::Result<()> {
    for word in candidates {
        writeln!(out, "{word}")?;
    }
    writeln!(out, "{}", candidates.len())?;
    writeln!(out)?;
    writeln!(out, "{vocabulary_size}")
}

/// Write ranking entries as `word<TAB>score` lines
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_ranking<W: Write>(out: &mut W, entries: &[ScoreEntry<'_>]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", ranking_line(entry))?;
    }
    Ok(())
}

/// Print a colored overview of a ranking run to stderr
pub fn print_summary(report: &RankReport<'_>, shown: usize) {
    let pool_size = report.candidates.len();

    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", "GUESS RANKING".bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());

    eprintln!(
        "\n📊 {} of {} guesses ranked against {} candidates",
        shown.min(report.ranking.len()),
        report.ranking.len(),
        format!("{pool_size}").bright_yellow().bold()
    );

    for (rank, entry) in report.ranking.iter().take(3).enumerate() {
        eprintln!(
            "   {}. {} [{}] {}",
            rank + 1,
            entry.word.text().to_uppercase().bright_yellow().bold(),
            remaining_bar(entry.expected_remaining, pool_size, 20).green(),
            format!("{:.2} left", entry.expected_remaining).bright_black()
        );
    }

    eprintln!("   Time taken: {:.2}s", report.duration.as_secs_f64());
}
