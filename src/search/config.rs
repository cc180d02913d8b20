// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::pool::Ordering;

/// Team size used when none is given.
pub const DEFAULT_TEAM_SIZE: usize = 5;

/// What to keep when several teams reach the best score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TiePolicy {
    /// Keep the first best team found in pool order.
    #[default]
    First,
    /// Keep every team with the best score, in discovery order.
    All,
}

/// Parameters of one search.
///
/// # Example
///
/// ```
/// use alphabet_cover::pool::Ordering;
/// use alphabet_cover::search::{SearchConfig, TiePolicy};
///
/// let config = SearchConfig::new(3)
///     .with_tie_policy(TiePolicy::All)
///     .with_ordering(Ordering::Cardinality);
/// assert_eq!(config.team_size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    team_size: usize,
    tie_policy: TiePolicy,
    ordering: Ordering,
    parallel: bool,
}

impl SearchConfig {
    pub fn new(team_size: usize) -> Self {
        Self {
            team_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Request a parallel search. Ignored when the `parallel` feature is off.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            tie_policy: TiePolicy::default(),
            ordering: Ordering::default(),
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.team_size(), 5);
        assert_eq!(config.tie_policy(), TiePolicy::First);
        assert_eq!(config.ordering(), Ordering::Rarity);
        assert!(!config.parallel());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new(7)
            .with_tie_policy(TiePolicy::All)
            .with_ordering(Ordering::AsGiven)
            .with_parallel(true);
        assert_eq!(config.team_size(), 7);
        assert_eq!(config.tie_policy(), TiePolicy::All);
        assert_eq!(config.ordering(), Ordering::AsGiven);
        assert!(config.parallel());
    }
}
