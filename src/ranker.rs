//! Guess ranking
//!
//! Ties the pieces together: filters the candidate list with the initial
//! constraint, scores every vocabulary word against the survivors and sorts
//! the results.

use crate::constraint::Constraint;
use crate::core::Word;
use crate::evaluator::{ScoreEntry, score_vocabulary};
use crate::feedback::FeedbackMode;
use crate::filter::filter;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Configuration for a ranking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankConfig {
    /// Number of ranked guesses to report
    pub top: usize,
    pub feedback: FeedbackMode,
    /// Draw a progress bar while scoring
    pub show_progress: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top: 100,
            feedback: FeedbackMode::default(),
            show_progress: true,
        }
    }
}

/// Error type for ranking runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// No candidate survives the initial constraint, so there is nothing to
    /// average over
    EmptyCandidatePool,
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidatePool => {
                write!(f, "No candidates match the clues; check them for mistakes")
            }
        }
    }
}

impl std::error::Error for RankError {}

/// Result of a full ranking run
pub struct RankReport<'a> {
    /// Candidates consistent with the initial constraint, in input order
    pub candidates: Vec<&'a Word>,
    /// Every distinct vocabulary word, best guess first
    pub ranking: Vec<ScoreEntry<'a>>,
    pub vocabulary_size: usize,
    pub duration: Duration,
}

impl<'a> RankReport<'a> {
    /// The best `n` guesses
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoreEntry<'a>] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// The best guess, if any word was ranked
    #[must_use]
    pub fn best(&self) -> Option<&ScoreEntry<'a>> {
        self.ranking.first()
    }
}

/// Ranks guesses from a vocabulary against a list of possible answers
pub struct Ranker<'a> {
    config: RankConfig,
    vocabulary: &'a [Word],
    candidates: &'a [Word],
}

impl<'a> Ranker<'a> {
    /// Create a new ranker
    ///
    /// # Parameters
    /// - `config`: Reporting and feedback options
    /// - `vocabulary`: Words that may be played as the next guess
    /// - `candidates`: Words that may be the answer
    pub const fn new(config: RankConfig, vocabulary: &'a [Word], candidates: &'a [Word]) -> Self {
        Self {
            config,
            vocabulary,
            candidates,
        }
    }

    /// Candidates consistent with `constraint`, in input order
    #[must_use]
    pub fn filter_candidates(&self, constraint: &Constraint) -> Vec<&'a Word> {
        let pool = filter(constraint, self.candidates);
        debug!("Constraint: {constraint}");
        info!(
            "{} of {} candidates match the clues",
            pool.len(),
            self.candidates.len()
        );
        pool
    }

    /// Score every distinct vocabulary word against `pool`, best first
    ///
    /// Lower expected remaining counts rank higher; ties are broken
    /// alphabetically so the order is deterministic.
    ///
    /// # Errors
    /// Returns `RankError::EmptyCandidatePool` if `pool` is empty.
    pub fn rank(&self, pool: &[&'a Word]) -> Result<Vec<ScoreEntry<'a>>, RankError> {
        if pool.is_empty() {
            return Err(RankError::EmptyCandidatePool);
        }

        let guesses = self.distinct_vocabulary();
        info!(
            "Scoring {} guesses against {} candidates on {} threads ({} feedback)",
            guesses.len(),
            pool.len(),
            rayon::current_num_threads(),
            self.config.feedback
        );

        let progress = self.progress_bar(guesses.len());
        let mut ranking = score_vocabulary(&guesses, pool, self.config.feedback, &progress);
        progress.finish_and_clear();

        sort_ranking(&mut ranking);
        Ok(ranking)
    }

    /// Filter the candidates with `constraint` and rank the vocabulary
    /// against the survivors
    ///
    /// # Errors
    /// Returns `RankError::EmptyCandidatePool` if no candidate matches.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::constraint::Constraint;
    /// use wordle_ranker::core::Word;
    /// use wordle_ranker::ranker::{RankConfig, Ranker};
    ///
    /// let vocabulary: Vec<Word> = ["zzzzz", "slate", "crate"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let candidates = vocabulary[1..].to_vec();
    ///
    /// let config = RankConfig { show_progress: false, ..RankConfig::default() };
    /// let report = Ranker::new(config, &vocabulary, &candidates)
    ///     .run(&Constraint::none())
    ///     .unwrap();
    ///
    /// assert_eq!(report.candidates.len(), 2);
    /// // Either candidate splits the pair; ZZZZZ learns nothing
    /// assert_eq!(report.best().unwrap().word.text(), "crate");
    /// assert_eq!(report.ranking.last().unwrap().word.text(), "zzzzz");
    /// ```
    pub fn run(&self, constraint: &Constraint) -> Result<RankReport<'a>, RankError> {
        let start = Instant::now();

        let candidates = self.filter_candidates(constraint);
        let ranking = self.rank(&candidates)?;
        let duration = start.elapsed();

        if let Some(best) = ranking.first() {
            info!(
                "Best guess: {} ({:.3} expected remaining) in {:.2}s",
                best.word,
                best.expected_remaining,
                duration.as_secs_f64()
            );
        }

        Ok(RankReport {
            candidates,
            ranking,
            vocabulary_size: self.vocabulary.len(),
            duration,
        })
    }

    /// Vocabulary words in input order, first occurrence only
    fn distinct_vocabulary(&self) -> Vec<&'a Word> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let distinct: Vec<&'a Word> = self
            .vocabulary
            .iter()
            .filter(|&word| seen.insert(word.text()))
            .collect();

        if distinct.len() < self.vocabulary.len() {
            debug!(
                "Ignoring {} duplicate vocabulary words",
                self.vocabulary.len() - distinct.len()
            );
        }
        distinct
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | ETA {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }
}

/// Sort ascending by expected remaining count, then alphabetically
pub fn sort_ranking(ranking: &mut [ScoreEntry<'_>]) {
    ranking.sort_by(|a, b| {
        a.expected_remaining
            .total_cmp(&b.expected_remaining)
            .then_with(|| a.word.text().cmp(b.word.text()))
    });
}
