// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter type for the 26-letter alphabet.

use crate::letters::NLETTERS;

/// A lowercase ASCII letter, stored as its offset from `'a'` (0..NLETTERS).
///
/// This is a newtype wrapper so that letter offsets are not mixed up with
/// pool indices or scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a new letter from its offset, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NLETTERS`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < NLETTERS, "Letter out of range: {value}");
        Self(value)
    }

    /// Try to create a new letter, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NLETTERS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Map a character to a letter.
    ///
    /// Only `a..=z` map; callers lowercase first.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Get the underlying offset.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the letter as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The lowercase character for this letter.
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_new() {
        assert_eq!(Letter::new(0).to_char(), 'a');
        assert_eq!(Letter::new(25).to_char(), 'z');
    }

    #[test]
    #[should_panic(expected = "Letter out of range")]
    fn test_letter_out_of_range() {
        Letter::new(26);
    }

    #[test]
    fn test_letter_try_new() {
        assert!(Letter::try_new(25).is_some());
        assert!(Letter::try_new(26).is_none());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Letter::from_char('c'), Some(Letter::new(2)));
        assert_eq!(Letter::from_char('C'), None);
        assert_eq!(Letter::from_char('9'), None);
        assert_eq!(Letter::from_char('é'), None);
    }
}
