//! Compact letter sets
//!
//! A `LetterSet` stores a subset of `a`-`z` as a 26-bit mask, which keeps
//! presence checks and unions to a single integer operation.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index (0-25) of a lowercase ASCII letter
///
/// # Panics
/// Panics in debug mode if `letter` is not in `a..=z`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from the lowercase letters of a byte slice
    ///
    /// Bytes outside `a..=z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::LetterSet;
    ///
    /// let set = LetterSet::from_bytes(b"roncbyr");
    /// assert_eq!(set.len(), 6);
    /// assert!(set.contains(b'y'));
    /// assert!(!set.contains(b'a'));
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .filter(|b| b.is_ascii_lowercase())
            .fold(Self::EMPTY, |set, &b| set.with(b))
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | (1 << letter_index(letter)))
    }

    /// Add a letter in place
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = LetterSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(b'a'));
    }

    #[test]
    fn from_bytes_deduplicates() {
        let set = LetterSet::from_bytes(b"roncbyr");
        assert_eq!(set.len(), 6);
        assert_eq!(set.to_string(), "bcnory");
    }

    #[test]
    fn from_bytes_ignores_non_letters() {
        let set = LetterSet::from_bytes(b"a_b 1Z");
        assert_eq!(set.to_string(), "ab");
    }

    #[test]
    fn union_and_intersection() {
        let a = LetterSet::from_bytes(b"abc");
        let b = LetterSet::from_bytes(b"cde");

        assert_eq!(a.union(b).to_string(), "abcde");
        assert_eq!(a.intersection(b).to_string(), "c");
        assert!(a.intersects(b));
        assert!(!a.intersects(LetterSet::from_bytes(b"xyz")));
    }

    #[test]
    fn subset() {
        let small = LetterSet::from_bytes(b"ae");
        let large = LetterSet::from_bytes(b"crane");
        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
    }

    #[test]
    fn boundary_letters() {
        let set: LetterSet = [b'a', b'z'].into_iter().collect();
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'a', b'z']);
    }
}
