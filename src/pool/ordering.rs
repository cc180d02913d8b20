// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pool orderings used to make pruning effective.
//!
//! The search result score never depends on the ordering; only how early good
//! teams are found, and so how much of the search space the bound can cut.
//! All orderings are stable: candidates that compare equal keep their input order.

use crate::letters::NLETTERS;
use crate::pool::Candidate;
use std::cmp::Reverse;

/// How to order the pool before searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Ordering {
    /// Keep the input order.
    AsGiven,
    /// Largest letter-sets first.
    Cardinality,
    /// Candidates carrying rarely shared letters first.
    #[default]
    Rarity,
}

/// Count, for each letter, how many candidates contain it.
pub fn letter_frequencies(candidates: &[Candidate]) -> [usize; NLETTERS] {
    let mut freq = [0; NLETTERS];
    for candidate in candidates {
        for letter in candidate.letters().iter() {
            freq[letter.as_usize()] += 1;
        }
    }
    freq
}

/// Weight of one letter held by `freq` candidates.
///
/// The steep power makes a rarer letter dominate the sum; terms far below the
/// largest one are absorbed by floating point rounding.
fn letter_weight(freq: usize) -> f64 {
    (freq as f64).powi(100).recip()
}

/// Rarity score of one candidate: the sum of its letter weights, summed in
/// alphabetical order. Higher scores are searched first.
pub fn rarity_score(candidate: &Candidate, freq: &[usize; NLETTERS]) -> f64 {
    candidate
        .letters()
        .iter()
        .map(|letter| letter_weight(freq[letter.as_usize()]))
        .sum()
}

/// Reorder candidates in place.
pub fn apply(candidates: &mut Vec<Candidate>, ordering: Ordering) {
    match ordering {
        Ordering::AsGiven => {}
        Ordering::Cardinality => {
            candidates.sort_by_key(|candidate| Reverse(candidate.letters().len()));
        }
        Ordering::Rarity => {
            let freq = letter_frequencies(candidates);
            let mut keyed: Vec<(f64, Candidate)> = candidates
                .drain(..)
                .map(|candidate| (rarity_score(&candidate, &freq), candidate))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| b.total_cmp(a));
            candidates.extend(keyed.into_iter().map(|(_, candidate)| candidate));
        }
    }
}
