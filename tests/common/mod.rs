// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use alphabet_cover::LetterSet;
use itertools::Itertools;

/// The pool used as a worked example throughout the tests.
pub const ESPORTS: &[&str] = &["Fnatic", "G2", "TSM", "Cloud9", "DRX"];

/// Letters covered by the given members of `letters`.
pub fn union_of(letters: &[LetterSet], indices: &[usize]) -> LetterSet {
    indices
        .iter()
        .fold(LetterSet::empty(), |acc, &i| acc.union(letters[i]))
}

/// Exhaustive oracle: best score and every optimal team, in lexicographic order.
pub fn brute_force(letters: &[LetterSet], team_size: usize) -> (usize, Vec<Vec<usize>>) {
    let mut best = 0;
    let mut teams = Vec::new();
    for team in (0..letters.len()).combinations(team_size) {
        let score = union_of(letters, &team).len();
        if score > best || teams.is_empty() {
            best = score;
            teams.clear();
        }
        if score == best {
            teams.push(team);
        }
    }
    (best, teams)
}

/// Deterministic pseudo-random names for property tests.
///
/// Names are short strings over a skewed alphabet so that ties, overlaps
/// and empty names all occur.
pub fn random_names(seed: u64, count: usize) -> Vec<String> {
    let mut state = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|i| {
            let len = next() % 7;
            let body: String = (0..len)
                .map(|_| {
                    // Squaring skews towards the start of the alphabet
                    let r = next() % 26;
                    (b'a' + ((r * r) / 26) as u8) as char
                })
                .collect();
            // Keep identifiers distinct even when the letters repeat
            format!("{}{}", body, i)
        })
        .collect()
}

pub fn letter_sets<S: AsRef<str>>(names: &[S]) -> Vec<LetterSet> {
    names
        .iter()
        .map(|n| LetterSet::from_name(n.as_ref()))
        .collect()
}
