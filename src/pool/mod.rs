// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The candidate pool.
//!
//! A pool is built once from a list of identifiers and is immutable during
//! search. Its order is significant: the search visits candidates in pool
//! order, so the order decides which of several equally good teams is found
//! first.

pub mod candidate;
pub mod ordering;
pub mod roster;
pub mod source;

pub use candidate::Candidate;
pub use ordering::Ordering;

use std::collections::HashSet;
use tracing::debug;

/// Ordered, deduplicated sequence of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    candidates: Vec<Candidate>,
}

impl Pool {
    /// Build a pool from identifiers.
    ///
    /// Duplicate identifiers are dropped, keeping the first occurrence.
    /// Identifiers without letters are kept; they contribute nothing to a team.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for name in names {
            let name = name.into();
            if seen.insert(name.clone()) {
                candidates.push(Candidate::new(name));
            }
        }

        let degenerate = candidates.iter().filter(|c| c.letters().is_empty()).count();
        if degenerate > 0 {
            debug!(degenerate, "pool contains candidates without letters");
        }

        Self { candidates }
    }

    /// A copy of this pool with candidates reordered.
    #[must_use]
    pub fn ordered(&self, ordering: Ordering) -> Self {
        let mut candidates = self.candidates.clone();
        ordering::apply(&mut candidates, ordering);
        debug!(?ordering, size = candidates.len(), "pool reordered");
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Pool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_keeping_first() {
        let pool = Pool::from_names(["TSM", "G2", "TSM", "DRX", "G2"]);
        let names: Vec<&str> = pool.candidates().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["TSM", "G2", "DRX"]);
    }

    #[test]
    fn test_identity_is_exact_string() {
        // Same letters, different identifiers
        let pool = Pool::from_names(["tsm", "TSM", "mst"]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_keeps_degenerate_names() {
        let pool = Pool::from_names(["", "42", "ok"]);
        assert_eq!(pool.len(), 3);
        assert!(pool.get(0).unwrap().letters().is_empty());
        assert!(pool.get(1).unwrap().letters().is_empty());
    }

    #[test]
    fn test_ordered_leaves_original() {
        let pool: Pool = ["b", "abc"].into_iter().collect();
        let ordered = pool.ordered(Ordering::Cardinality);
        assert_eq!(ordered.get(0).unwrap().name(), "abc");
        assert_eq!(pool.get(0).unwrap().name(), "b");
    }

    #[test]
    fn test_empty_pool() {
        let pool = Pool::from_names(Vec::<String>::new());
        assert!(pool.is_empty());
        assert!(pool.get(0).is_none());
    }
}
