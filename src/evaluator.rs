//! Guess evaluation
//!
//! Scores a guess by the number of candidates expected to remain after
//! playing it, treating every candidate as an equally likely answer.

use crate::constraint::Constraint;
use crate::core::Word;
use crate::feedback::{FeedbackMode, derive};
use crate::filter::count_matching;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A guess and its expected number of remaining candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEntry<'a> {
    pub word: &'a Word,
    pub expected_remaining: f64,
}

/// Average number of candidates left after guessing `guess`
///
/// For every candidate taken as the answer, derives the feedback `guess`
/// would receive and counts the candidates consistent with it. Returns the
/// mean of those counts, or `None` if `candidates` is empty.
///
/// Answers that produce the same feedback constraint leave the same
/// candidates, so each distinct constraint is filtered once.
///
/// # Examples
/// ```
/// use wordle_ranker::core::Word;
/// use wordle_ranker::evaluator::expected_remaining;
/// use wordle_ranker::feedback::FeedbackMode;
///
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("zzzzz").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // SLATE tells the two candidates apart, so exactly one remains either way
/// let guess = Word::new("slate").unwrap();
/// let score = expected_remaining(&guess, &candidate_refs, FeedbackMode::Exact).unwrap();
/// assert!((score - 1.0).abs() < f64::EPSILON);
///
/// assert!(expected_remaining(&guess, &[], FeedbackMode::Exact).is_none());
/// ```
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[&Word], mode: FeedbackMode) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }

    let mut remaining: FxHashMap<Constraint, usize> = FxHashMap::default();
    let mut sum = 0usize;

    for &solution in candidates {
        let constraint = derive(mode, solution, guess);
        let count = *remaining
            .entry(constraint)
            .or_insert_with_key(|constraint| count_matching(constraint, candidates));
        sum += count;
    }

    Some(sum as f64 / candidates.len() as f64)
}

/// Score every word of `vocabulary` against `candidates` in parallel
///
/// Each guess is an independent unit of work on the rayon pool; results are
/// returned in vocabulary order. `progress` is advanced once per scored word.
/// Returns an empty list if `candidates` is empty.
#[must_use]
pub fn score_vocabulary<'a>(
    vocabulary: &[&'a Word],
    candidates: &[&Word],
    mode: FeedbackMode,
    progress: &ProgressBar,
) -> Vec<ScoreEntry<'a>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    vocabulary
        .par_iter()
        .filter_map(|&word| {
            let score = expected_remaining(word, candidates, mode).map(|expected_remaining| {
                ScoreEntry {
                    word,
                    expected_remaining,
                }
            });
            progress.inc(1);
            score
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::filter::filter_refs;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    const POOL: [&str; 8] = [
        "least", "slate", "crate", "trace", "irate", "grate", "abide", "elide",
    ];

    /// The unmemoized definition: filter once per candidate answer
    fn brute_force(guess: &Word, candidates: &[&Word], mode: FeedbackMode) -> f64 {
        let total: usize = candidates
            .iter()
            .map(|&solution| filter_refs(&derive(mode, solution, guess), candidates).len())
            .sum();
        total as f64 / candidates.len() as f64
    }

    #[test]
    fn matches_definition() {
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();

        for mode in [FeedbackMode::Exact, FeedbackMode::Presence] {
            for guess in &pool {
                let score = expected_remaining(guess, &refs, mode).unwrap();
                assert!((score - brute_force(guess, &refs, mode)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn exact_mode_equals_pattern_partition() {
        // With exact feedback, the survivors are exactly the candidates that
        // produce the same colour pattern, so the score is sum(n^2) / N
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();

        for guess in &pool {
            let mut groups: FxHashMap<Pattern, usize> = FxHashMap::default();
            for &candidate in &refs {
                *groups.entry(Pattern::calculate(guess, candidate)).or_insert(0) += 1;
            }
            let partition: f64 = groups.values().map(|&n| (n * n) as f64).sum::<f64>()
                / refs.len() as f64;

            let score = expected_remaining(guess, &refs, FeedbackMode::Exact).unwrap();
            assert!((score - partition).abs() < 1e-9, "{guess}: {score} vs {partition}");
        }
    }

    #[test]
    fn bounds_hold() {
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();
        let outside = words(&["zzzzz", "qajaq", "fjord"]);

        for mode in [FeedbackMode::Exact, FeedbackMode::Presence] {
            for guess in pool.iter().chain(&outside) {
                let score = expected_remaining(guess, &refs, mode).unwrap();
                assert!(score >= 1.0, "answer always survives its own feedback");
                assert!(score <= refs.len() as f64);
            }
        }
    }

    #[test]
    fn uninformative_guess_keeps_everyone() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        let score = expected_remaining(&guess, &refs, FeedbackMode::Exact).unwrap();
        assert!((score - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_scores_one() {
        let pool = words(&["crate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("slate").unwrap();

        let score = expected_remaining(&guess, &refs, FeedbackMode::Presence).unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_candidates_is_none() {
        let guess = Word::new("crane").unwrap();
        assert!(expected_remaining(&guess, &[], FeedbackMode::Exact).is_none());
        assert!(score_vocabulary(&[&guess], &[], FeedbackMode::Exact, &ProgressBar::hidden()).is_empty());
    }

    #[test]
    fn score_vocabulary_preserves_order() {
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();
        let vocabulary = words(&["zzzzz", "crate", "least", "fjord"]);
        let vocab_refs: Vec<&Word> = vocabulary.iter().collect();

        let progress = ProgressBar::hidden();
        let scores = score_vocabulary(&vocab_refs, &refs, FeedbackMode::Exact, &progress);

        assert_eq!(scores.len(), vocabulary.len());
        for (entry, word) in scores.iter().zip(&vocabulary) {
            assert_eq!(entry.word, word);
            let expected = expected_remaining(word, &refs, FeedbackMode::Exact).unwrap();
            assert!((entry.expected_remaining - expected).abs() < f64::EPSILON);
        }
        assert_eq!(progress.position(), vocabulary.len() as u64);
    }
}
