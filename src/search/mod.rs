// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial coverage search.
//!
//! Given a pool of candidates and a team size K, find the K-member team(s)
//! whose names together cover the most distinct letters.
//!
//! # Example
//!
//! ```
//! use alphabet_cover::pool::{Ordering, Pool};
//! use alphabet_cover::search::{SearchConfig, Searcher};
//!
//! let pool = Pool::from_names(["Fnatic", "G2", "TSM", "Cloud9", "DRX"]);
//! let config = SearchConfig::new(2).with_ordering(Ordering::AsGiven);
//! let result = Searcher::new(&pool, config)?.run();
//!
//! assert_eq!(result.score, 10);
//! assert_eq!(result.teams[0].names, vec!["Fnatic", "Cloud9"]);
//! # Ok::<(), alphabet_cover::CoverError>(())
//! ```

pub mod best;
pub mod bound;
pub mod cancel;
pub mod config;
pub mod engine;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use best::BestResult;
pub use bound::{upper_bound, SuffixBounds};
pub use cancel::CancelToken;
pub use config::{SearchConfig, TiePolicy, DEFAULT_TEAM_SIZE};

use crate::error::{validate_team_size, Result};
use crate::letters::LetterSet;
use crate::pool::Pool;
use crate::state::{Counters, Statistics};
use engine::{Engine, Outcome};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

/// One selected team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Indices into the searched pool, increasing.
    pub indices: Vec<usize>,
    /// Member identifiers, in pool order.
    pub names: Vec<String>,
    /// Letters covered by the team.
    pub letters: LetterSet,
}

impl Team {
    /// Number of distinct letters covered.
    pub fn score(&self) -> usize {
        self.letters.len()
    }

    /// Letters of the alphabet the team does not cover.
    pub fn missing(&self) -> LetterSet {
        self.letters.missing()
    }
}

/// Result of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub team_size: usize,
    /// Best number of distinct letters; 0 if no team was completed.
    pub score: usize,
    /// Best team(s). One team under `TiePolicy::First`, every tie under
    /// `TiePolicy::All`. Empty only if the search was cancelled early.
    pub teams: Vec<Team>,
    pub statistics: Statistics,
    /// False if the search was cancelled; the teams are then the best found so far.
    pub complete: bool,
}

impl SearchResult {
    /// The first best team.
    pub fn best(&self) -> Option<&Team> {
        self.teams.first()
    }
}

/// A validated search over one pool.
///
/// The searcher owns a copy of the pool, reordered as configured; team
/// indices in results refer to [`Searcher::pool`].
#[derive(Debug, Clone)]
pub struct Searcher {
    pool: Pool,
    letters: Vec<LetterSet>,
    bounds: SuffixBounds,
    config: SearchConfig,
}

impl Searcher {
    /// Validate the team size against the pool and prepare the search.
    ///
    /// Fails with an invalid-argument error if the team size exceeds the pool.
    pub fn new(pool: &Pool, config: SearchConfig) -> Result<Self> {
        validate_team_size(config.team_size(), pool.len())?;

        let pool = pool.ordered(config.ordering());
        let letters: Vec<LetterSet> = pool.candidates().iter().map(|c| c.letters()).collect();
        let bounds = SuffixBounds::new(&letters);
        Ok(Self {
            pool,
            letters,
            bounds,
            config,
        })
    }

    /// The pool as searched, after reordering.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search to completion.
    pub fn run(&self) -> SearchResult {
        self.run_with_cancel(&CancelToken::new())
    }

    /// Run the search, stopping early if `cancel` is triggered.
    pub fn run_with_cancel(&self, cancel: &CancelToken) -> SearchResult {
        let team_size = self.config.team_size();
        let policy = self.config.tie_policy();
        info!(
            pool = self.pool.len(),
            team_size,
            ?policy,
            ordering = ?self.config.ordering(),
            parallel = self.config.parallel(),
            "starting search"
        );
        let started = Instant::now();

        let outcome = if self.use_parallel() {
            self.run_parallel(cancel)
        } else {
            Engine::new(&self.letters, &self.bounds, team_size, cancel)
                .run(&[], BestResult::new(policy))
        };

        let result = self.finish(outcome);
        if !result.complete {
            warn!(
                score = result.score,
                "search cancelled, result may not be optimal"
            );
        }
        info!(
            score = result.score,
            teams = result.teams.len(),
            nodes = result.statistics.get(Counters::Nodes),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );
        result
    }

    fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.parallel() && self.config.team_size() > 0
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(&self, cancel: &CancelToken) -> Outcome {
        parallel::run(
            &self.letters,
            &self.bounds,
            self.config.team_size(),
            self.config.tie_policy(),
            cancel,
        )
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(&self, cancel: &CancelToken) -> Outcome {
        let team_size = self.config.team_size();
        Engine::new(&self.letters, &self.bounds, team_size, cancel)
            .run(&[], BestResult::new(self.config.tie_policy()))
    }

    fn finish(&self, outcome: Outcome) -> SearchResult {
        let Outcome {
            best,
            statistics,
            complete,
        } = outcome;

        let teams: Vec<Team> = best
            .teams()
            .iter()
            .map(|indices| self.team(indices))
            .collect();
        SearchResult {
            team_size: self.config.team_size(),
            score: best.score().unwrap_or(0),
            teams,
            statistics,
            complete,
        }
    }

    fn team(&self, indices: &[usize]) -> Team {
        let candidates = self.pool.candidates();
        Team {
            indices: indices.to_vec(),
            names: indices
                .iter()
                .map(|&i| candidates[i].name().to_string())
                .collect(),
            letters: indices
                .iter()
                .fold(LetterSet::empty(), |acc, &i| acc.union(self.letters[i])),
        }
    }
}

/// Search `pool` for the best team of `team_size` with the default configuration.
pub fn search(pool: &Pool, team_size: usize) -> Result<SearchResult> {
    Ok(Searcher::new(pool, SearchConfig::new(team_size))?.run())
}
