// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruning bound.
//!
//! An optimistic estimate of the best score reachable from a partial team.
//! The bound must never be lower than the true best completion, or the
//! search would discard optimal teams.

use crate::letters::{LetterSet, NLETTERS};

/// Per-cursor summaries of the candidates not yet considered.
///
/// Index `i` describes the suffix `letters[i..]`; index `len()` is the empty suffix.
#[derive(Debug, Clone)]
pub struct SuffixBounds {
    /// Union of the letter-sets of the suffix.
    union: Vec<LetterSet>,
    /// Largest letter-set size in the suffix.
    max_len: Vec<usize>,
}

impl SuffixBounds {
    pub fn new(letters: &[LetterSet]) -> Self {
        let n = letters.len();
        let mut union = vec![LetterSet::empty(); n + 1];
        let mut max_len = vec![0; n + 1];
        for i in (0..n).rev() {
            union[i] = union[i + 1].union(letters[i]);
            max_len[i] = max_len[i + 1].max(letters[i].len());
        }
        Self { union, max_len }
    }

    pub fn union_from(&self, cursor: usize) -> LetterSet {
        self.union[cursor]
    }

    pub fn max_len_from(&self, cursor: usize) -> usize {
        self.max_len[cursor]
    }

    /// Upper bound for a partial team with letters `union` and `chosen`
    /// members, which may still pick `team_size - chosen` candidates at or
    /// after `cursor`.
    pub fn upper_bound(
        &self,
        union: LetterSet,
        chosen: usize,
        team_size: usize,
        cursor: usize,
    ) -> usize {
        upper_bound(
            union,
            team_size.saturating_sub(chosen),
            self.union_from(cursor),
            self.max_len_from(cursor),
        )
    }
}

/// The smallest of: the alphabet size, the letters still reachable, and the
/// current count plus `slots` best-case gains of `max_gain` letters each.
pub fn upper_bound(union: LetterSet, slots: usize, reachable: LetterSet, max_gain: usize) -> usize {
    let reachable = union.union(reachable).len();
    let by_gain = union.len().saturating_add(slots.saturating_mul(max_gain));
    NLETTERS.min(reachable).min(by_gain)
}
