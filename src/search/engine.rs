// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first search engine.
//!
//! The engine walks the tree of combinations with an explicit stack instead
//! of recursion. Each stack entry is one partial team; its choices are the
//! pool indices after the last chosen member, tried in increasing order.
//! Trying choice `i` is the "include candidate i" branch; moving on to
//! `i + 1` is the "skip it" branch.
//!
//! # Execution Model
//!
//! 1. On first visiting an entry: check cancellation, then
//!    - if the team is complete, score it and backtrack;
//!    - if too few candidates remain, backtrack;
//!    - if the pruning bound cannot beat the best score, backtrack.
//! 2. Otherwise take the entry's next choice and push a child entry.
//! 3. When an entry has no choices left, pop it (backtrack).
//!
//! The stack never holds more than `team_size + 1` entries.

use crate::letters::LetterSet;
use crate::search::best::{BestResult, Offer};
use crate::search::bound::SuffixBounds;
use crate::search::cancel::CancelToken;
use crate::state::{Counters, Statistics};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

/// Stack entry tracking one partial team.
#[derive(Debug)]
struct StackEntry {
    /// Next pool index to try. Never below any index already chosen.
    cursor: usize,

    /// Letters covered by the partial team.
    union: LetterSet,

    /// Whether the entry has been checked (leaf, shortage, bound).
    visited: bool,
}

/// Best score shared between parallel workers.
///
/// Stores `score + 1`, so 0 means no complete team has been found yet.
#[derive(Debug, Default)]
pub struct SharedScore(AtomicUsize);

impl SharedScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.0.load(Ordering::Relaxed).checked_sub(1)
    }

    pub fn raise(&self, score: usize) {
        self.0.fetch_max(score + 1, Ordering::Relaxed);
    }
}

/// What one engine run produced.
#[derive(Debug)]
pub struct Outcome {
    pub best: BestResult,
    pub statistics: Statistics,
    /// False if the run was cancelled before exhausting its subtree.
    pub complete: bool,
}

/// Searches the subtree of teams that extend a fixed prefix.
pub struct Engine<'a> {
    letters: &'a [LetterSet],
    bounds: &'a SuffixBounds,
    team_size: usize,
    cancel: &'a CancelToken,
    shared: Option<&'a SharedScore>,
}

impl<'a> Engine<'a> {
    pub fn new(
        letters: &'a [LetterSet],
        bounds: &'a SuffixBounds,
        team_size: usize,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            letters,
            bounds,
            team_size,
            cancel,
            shared: None,
        }
    }

    /// Read and raise a best score shared with other engines.
    #[must_use]
    pub fn with_shared(mut self, shared: &'a SharedScore) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Run the search over all teams starting with `prefix`.
    ///
    /// `prefix` must be strictly increasing pool indices, at most `team_size` long.
    pub fn run(&self, prefix: &[usize], mut best: BestResult) -> Outcome {
        let mut statistics = Statistics::new();
        let mut team: Vec<usize> = Vec::with_capacity(self.team_size);
        team.extend_from_slice(prefix);

        let union = prefix
            .iter()
            .fold(LetterSet::empty(), |acc, &i| acc.union(self.letters[i]));
        let cursor = prefix.last().map_or(0, |&last| last + 1);

        let mut stack: Vec<StackEntry> = Vec::with_capacity(self.team_size + 1);
        stack.push(StackEntry {
            cursor,
            union,
            visited: false,
        });

        // Main execution loop
        while let Some(top) = stack.len().checked_sub(1) {
            if !stack[top].visited {
                stack[top].visited = true;

                if self.cancel.is_cancelled() {
                    statistics.increment_counter(Counters::Cancelled);
                    debug!(depth = team.len(), "engine run cancelled");
                    return Outcome {
                        best,
                        statistics,
                        complete: false,
                    };
                }
                statistics.increment_counter(Counters::Nodes);

                let (cursor, union) = (stack[top].cursor, stack[top].union);
                if !self.expand(&team, cursor, union, &mut best, &mut statistics) {
                    Self::backtrack(&mut stack, &mut team);
                    continue;
                }
            }

            let entry = &mut stack[top];
            if entry.cursor >= self.letters.len() {
                Self::backtrack(&mut stack, &mut team);
                continue;
            }

            let choice = entry.cursor;
            entry.cursor += 1;
            let union = entry.union.union(self.letters[choice]);
            team.push(choice);
            stack.push(StackEntry {
                cursor: choice + 1,
                union,
                visited: false,
            });
        }

        Outcome {
            best,
            statistics,
            complete: true,
        }
    }

    /// Check a newly visited entry. Returns true if its children should be tried.
    fn expand(
        &self,
        team: &[usize],
        cursor: usize,
        union: LetterSet,
        best: &mut BestResult,
        statistics: &mut Statistics,
    ) -> bool {
        let chosen = team.len();

        if chosen == self.team_size {
            statistics.increment_counter(Counters::Leaves);
            let score = union.len();
            match best.offer(team, score) {
                Offer::Improved => {
                    statistics.increment_counter(Counters::Improvements);
                    if let Some(shared) = self.shared {
                        shared.raise(score);
                    }
                    debug!(score, ?team, "improved best team");
                }
                Offer::Tied => {
                    statistics.increment_counter(Counters::Ties);
                    trace!(score, ?team, "tied best team");
                }
                Offer::Rejected => {}
            }
            return false;
        }

        if self.letters.len() - cursor < self.team_size - chosen {
            statistics.increment_counter(Counters::PrunedByShortage);
            return false;
        }

        let bound = self.bounds.upper_bound(union, chosen, self.team_size, cursor);
        let floor = self.shared.and_then(SharedScore::get);
        if best.should_prune(bound, floor) {
            statistics.increment_counter(Counters::PrunedByBound);
            return false;
        }

        true
    }

    /// Pop the top entry. The root entry stands for the prefix, which stays.
    fn backtrack(stack: &mut Vec<StackEntry>, team: &mut Vec<usize>) {
        stack.pop();
        if !stack.is_empty() {
            team.pop();
        }
    }
}
