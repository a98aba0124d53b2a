//! Word filtering
//!
//! Applies a [`Constraint`] to a word list, keeping the words that could
//! still be the answer.

use crate::constraint::Constraint;
use crate::core::{LetterSet, WORD_LENGTH, Word};

/// Check whether `word` is consistent with everything `constraint` knows
///
/// A word matches when:
/// 1. every fixed letter is in its position
/// 2. every misplaced letter is somewhere in the word, but not at the
///    position it was excluded from
/// 3. no absent letter appears anywhere
/// 4. every letter with occurrence bounds occurs within them
#[must_use]
pub fn matches(constraint: &Constraint, word: &Word) -> bool {
    let letters = word.letters();

    if letters.intersects(constraint.absent()) {
        return false;
    }

    let mut present = LetterSet::EMPTY;
    for i in 0..WORD_LENGTH {
        let ch = word.char_at(i);

        if let Some(required) = constraint.positional(i)
            && required != ch
        {
            return false;
        }

        let excluded = constraint.excluded_at(i);
        if excluded.contains(ch) {
            return false;
        }
        present = present.union(excluded);
    }

    if !present.is_subset(letters) {
        return false;
    }

    constraint.bounded_letters().iter().all(|letter| {
        constraint
            .count_bounds(letter)
            .is_none_or(|(min, max)| (min..=max).contains(&word.count_of(letter)))
    })
}

/// Keep the words of `words` that satisfy `constraint`, in their original order
///
/// # Examples
/// ```
/// use wordle_ranker::constraint::clues::Clues;
/// use wordle_ranker::core::Word;
/// use wordle_ranker::filter::filter;
///
/// let clues = Clues {
///     correct: Some("__a_t".to_string()),
///     misplaced: Some("e,,,tl,es".to_string()),
///     wrong: Some("roncbyr".to_string()),
///     ..Clues::default()
/// };
/// let constraint = clues.to_constraint().unwrap();
///
/// let words: Vec<Word> = ["slate", "shalt", "crate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // SLATE ends in E, SHALT has no E, CRATE contains C and R
/// let kept = filter(&constraint, &words);
/// assert!(kept.is_empty());
/// ```
#[must_use]
pub fn filter<'a>(constraint: &Constraint, words: &'a [Word]) -> Vec<&'a Word> {
    words.iter().filter(|word| matches(constraint, word)).collect()
}

/// Like [`filter`] over a list of references
#[must_use]
pub fn filter_refs<'a>(constraint: &Constraint, words: &[&'a Word]) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|word| matches(constraint, word))
        .collect()
}

/// Number of words in `words` that satisfy `constraint`
#[must_use]
pub fn count_matching(constraint: &Constraint, words: &[&Word]) -> usize {
    words.iter().filter(|word| matches(constraint, word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::clues::Clues;
    use crate::core::Pattern;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    fn reference_constraint() -> Constraint {
        Clues {
            correct: Some("__a_t".to_string()),
            misplaced: Some("e,,,tl,es".to_string()),
            wrong: Some("roncbyr".to_string()),
            observations: Vec::new(),
        }
        .to_constraint()
        .unwrap()
    }

    const POOL: [&str; 12] = [
        "slate", "shalt", "crate", "least", "leapt", "beast", "sweat", "plait", "exalt", "wheat",
        "sleet", "fleat",
    ];

    #[test]
    fn reference_scenario() {
        let pool = words(&POOL);
        let kept = filter(&reference_constraint(), &pool);

        // LEAPT has no S, SHALT and PLAIT have no E, EXALT has E first
        assert_eq!(texts(&kept), vec!["least"]);

        for word in &kept {
            assert_eq!(word.char_at(2), b'a');
            assert_eq!(word.char_at(4), b't');
            assert!(!word.letters().intersects(LetterSet::from_bytes(b"roncby")));
        }
    }

    #[test]
    fn positional_letter_required() {
        let constraint = Clues {
            correct: Some("s____".to_string()),
            ..Clues::default()
        }
        .to_constraint()
        .unwrap();

        let pool = words(&["slate", "shalt", "crate"]);
        assert_eq!(texts(&filter(&constraint, &pool)), vec!["slate", "shalt"]);
    }

    #[test]
    fn misplaced_letter_must_be_present_elsewhere() {
        let constraint = Clues {
            misplaced: Some(",,,,e".to_string()),
            ..Clues::default()
        }
        .to_constraint()
        .unwrap();

        // SLATE has E at the excluded position, SHALT has no E at all
        let pool = words(&["slate", "shalt", "eland"]);
        assert_eq!(texts(&filter(&constraint, &pool)), vec!["eland"]);
    }

    #[test]
    fn absent_letters_rejected_anywhere() {
        let constraint = Clues {
            wrong: Some("z".to_string()),
            ..Clues::default()
        }
        .to_constraint()
        .unwrap();

        let pool = words(&["pizza", "crate", "zesty"]);
        assert_eq!(texts(&filter(&constraint, &pool)), vec!["crate"]);
    }

    #[test]
    fn count_bounds_enforced() {
        let guess = Word::new("speed").unwrap();
        let constraint = Constraint::from_pattern(&guess, Pattern::parse("--Y-Y").unwrap());

        let pool = words(&["abide", "elide", "dense"]);
        assert_eq!(texts(&filter(&constraint, &pool)), vec!["abide"]);
    }

    #[test]
    fn unconstrained_keeps_everything() {
        let pool = words(&POOL);
        assert_eq!(filter(&Constraint::none(), &pool).len(), POOL.len());
    }

    #[test]
    fn order_preserved_and_duplicates_kept() {
        let pool = words(&["toast", "least", "toast", "beast"]);
        let constraint = Clues {
            correct: Some("____t".to_string()),
            ..Clues::default()
        }
        .to_constraint()
        .unwrap();

        assert_eq!(
            texts(&filter(&constraint, &pool)),
            vec!["toast", "least", "toast", "beast"]
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let pool = words(&POOL);
        let constraint = reference_constraint();

        let once = filter(&constraint, &pool);
        let twice = filter_refs(&constraint, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn filtered_words_revalidate() {
        let pool = words(&POOL);
        let constraint = reference_constraint();

        for word in filter(&constraint, &pool) {
            for i in 0..WORD_LENGTH {
                if let Some(ch) = constraint.positional(i) {
                    assert_eq!(word.char_at(i), ch);
                }
                for letter in constraint.excluded_at(i).iter() {
                    assert_ne!(word.char_at(i), letter);
                    assert!(word.has_letter(letter));
                }
            }
            for letter in constraint.absent().iter() {
                assert!(!word.has_letter(letter));
            }
        }
    }

    #[test]
    fn count_matches_filter_length() {
        let pool = words(&POOL);
        let refs: Vec<&Word> = pool.iter().collect();
        let constraint = reference_constraint();

        assert_eq!(
            count_matching(&constraint, &refs),
            filter(&constraint, &pool).len()
        );
    }
}
