// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for fixed-size teams whose names cover the most letters of the alphabet.
//!
//! Given N candidate names and a team size K, find the K-member team whose
//! names, taken together, contain the most distinct letters (ideally all 26).
//!
//! # Architecture
//!
//! ## Immutable input
//!
//! - [`pool::Pool`]: deduplicated, ordered candidates, each with the
//!   letter-set of its name computed once
//! - [`search::SuffixBounds`]: per-position summaries of the candidates not
//!   yet considered, used by the pruning bound
//!
//! ## Per-search state
//!
//! - The engine's explicit stack of partial teams (at most K + 1 entries)
//! - [`search::BestResult`]: best team(s) found so far
//! - [`state::Statistics`]: node, leaf and pruning counters
//!
//! # Search Algorithm
//!
//! Depth-first enumeration of combinations in increasing pool-index order,
//! pruned whenever an upper bound on the reachable letter count cannot beat
//! the best team found so far. Pool order does not affect the score, but
//! putting candidates with rare letters first finds strong teams early and
//! lets the bound cut most of the tree.
//!
//! # Parallelization
//!
//! With the `parallel` feature, the first team member is partitioned across
//! rayon tasks that share the best score for pruning.
//!
//! # Example
//!
//! ```
//! use alphabet_cover::{search, Pool};
//!
//! let pool = Pool::from_names(["Fnatic", "G2", "TSM", "Cloud9", "DRX"]);
//! let result = search(&pool, 3)?;
//! assert_eq!(result.score, 12);
//! # Ok::<(), alphabet_cover::CoverError>(())
//! ```

pub mod error;
pub mod letters;
pub mod pool;
pub mod report;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use error::{CoverError, Result};
pub use letters::{Letter, LetterSet};
pub use pool::{Candidate, Pool};
pub use search::{search, SearchConfig, SearchResult, Searcher, Team, TiePolicy};
