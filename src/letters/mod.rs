// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter types.
//!
//! - Letter: one letter of the alphabet (0..NLETTERS)
//! - LetterSet: bitset of letters, the letter-set of a name

pub mod letter;
pub mod letter_set;

pub use letter::Letter;
pub use letter_set::LetterSet;

/// Number of letters in the alphabet. Only the 26-letter alphabet is supported.
pub const NLETTERS: usize = 26;
