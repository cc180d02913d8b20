// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LetterSet type for representing sets of letters as bitsets.
//!
//! A LetterSet is a compact representation of a set of letters using a bitset,
//! where bit i represents the presence of letter `'a' + i`.
//!
//! # Examples
//!
//! ```
//! use alphabet_cover::letters::LetterSet;
//!
//! let set = LetterSet::from_name("Cloud9");
//! assert_eq!(set.len(), 5);
//! assert_eq!(format!("{}", set), "cdlou");
//!
//! let other = LetterSet::from_name("DRX");
//! assert_eq!(set.union(other).len(), 7);
//! ```

use crate::letters::{Letter, NLETTERS};
use serde::{Serialize, Serializer};
use std::fmt;

/// A set of letters represented as a bitset.
///
/// Bit i (counting from LSB) is set if letter i is in the set.
/// This provides O(1) insert, union and cardinality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty letter set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a letter set containing the whole alphabet.
    pub const fn full() -> Self {
        Self((1 << NLETTERS) - 1)
    }

    /// Derive the letter-set of an identifier.
    ///
    /// The name is lowercased and everything outside `a..=z` is dropped.
    /// Names with no letters give the empty set.
    pub fn from_name(name: &str) -> Self {
        name.chars()
            .flat_map(char::to_lowercase)
            .filter_map(Letter::from_char)
            .collect()
    }

    /// Create a letter set from a raw bit value, ignoring bits beyond the alphabet.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::full().0)
    }

    /// Check if the set contains a specific letter.
    pub fn contains(self, letter: Letter) -> bool {
        (self.0 >> letter.value()) & 1 != 0
    }

    /// Insert a letter into the set.
    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1 << letter.value();
    }

    /// Get the number of letters in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` that are not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters of the alphabet not in this set.
    #[must_use]
    pub fn missing(self) -> Self {
        Self::full().difference(self)
    }

    /// Iterate over all letters in the set, in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        LetterSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over letters in a LetterSet.
struct LetterSetIter {
    bits: u32,
    index: u8,
}

impl Iterator for LetterSetIter {
    type Item = Letter;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NLETTERS as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Letter::new(idx));
            }
        }
        None
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    /// Format a letter set as its letters in alphabetical order, e.g. "acf".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for LetterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = LetterSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
    }

    #[test]
    fn test_full() {
        let set = LetterSet::full();
        assert_eq!(set.len(), NLETTERS);
        assert!(set.missing().is_empty());
        for i in 0..NLETTERS as u8 {
            assert!(set.contains(Letter::new(i)));
        }
    }

    #[test]
    fn test_from_name_normalizes() {
        let set = LetterSet::from_name("Fnatic");
        assert_eq!(format!("{}", set), "acfint");
        assert_eq!(set.len(), 6);

        // Digits, punctuation and duplicates contribute nothing extra
        assert_eq!(LetterSet::from_name("G2"), LetterSet::from_name("g"));
        assert_eq!(
            LetterSet::from_name("Kog'Maw"),
            LetterSet::from_name("kogmaw")
        );
        assert_eq!(LetterSet::from_name("aaaa").len(), 1);
    }

    #[test]
    fn test_from_name_degenerate() {
        assert!(LetterSet::from_name("").is_empty());
        assert!(LetterSet::from_name("1234 !?").is_empty());
    }

    #[test]
    fn test_union_and_difference() {
        let a = LetterSet::from_name("abc");
        let b = LetterSet::from_name("cde");
        assert_eq!(a.union(b), LetterSet::from_name("abcde"));
        assert_eq!(a.difference(b), LetterSet::from_name("ab"));
        assert_eq!(a.union(b).len(), 5);
    }

    #[test]
    fn test_missing() {
        let set = LetterSet::from_name("the quick brown fox jumps over the lazy dog");
        assert!(set.missing().is_empty());

        let set = LetterSet::from_name("abcdefghijklmnopqrstuvwx");
        assert_eq!(format!("{}", set.missing()), "yz");
    }

    #[test]
    fn test_from_bits_masks_alphabet() {
        let set = LetterSet::from_bits(u32::MAX);
        assert_eq!(set, LetterSet::full());
    }

    #[test]
    fn test_iter() {
        let letters: Vec<char> = LetterSet::from_name("zebra")
            .iter()
            .map(|l| l.to_char())
            .collect();
        assert_eq!(letters, vec!['a', 'b', 'e', 'r', 'z']);
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&LetterSet::from_name("cab")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
