// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel search over the first team member.
//!
//! Each rayon task searches the teams whose lowest pool index is fixed, with
//! its own best-result accumulator. Tasks read and raise a shared best score
//! for pruning; a stale read only prunes less. Results are merged in pool
//! order, so the best score always matches the sequential search, while the
//! team reported under `TiePolicy::First` may be a different tie.

use crate::letters::LetterSet;
use crate::search::best::BestResult;
use crate::search::bound::SuffixBounds;
use crate::search::cancel::CancelToken;
use crate::search::config::TiePolicy;
use crate::search::engine::{Engine, Outcome, SharedScore};
use crate::state::Statistics;
use rayon::prelude::*;
use tracing::debug;

/// Search all teams of `team_size >= 1`, one task per first member.
pub fn run(
    letters: &[LetterSet],
    bounds: &SuffixBounds,
    team_size: usize,
    policy: TiePolicy,
    cancel: &CancelToken,
) -> Outcome {
    debug_assert!(team_size > 0);
    let shared = SharedScore::new();
    let engine = Engine::new(letters, bounds, team_size, cancel).with_shared(&shared);

    let outcomes: Vec<Outcome> = (0..letters.len())
        .into_par_iter()
        .map(|first| engine.run(&[first], BestResult::new(policy)))
        .collect();
    debug!(tasks = outcomes.len(), "parallel search tasks finished");

    let init = Outcome {
        best: BestResult::new(policy),
        statistics: Statistics::new(),
        complete: true,
    };
    outcomes.into_iter().fold(init, |mut acc, outcome| {
        acc.statistics.merge(&outcome.statistics);
        Outcome {
            best: acc.best.merge(outcome.best),
            statistics: acc.statistics,
            complete: acc.complete && outcome.complete,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::engine::Engine;

    fn sets(names: &[&str]) -> Vec<LetterSet> {
        names.iter().map(|n| LetterSet::from_name(n)).collect()
    }

    #[test]
    fn test_matches_sequential_ties() {
        let letters = sets(&["ab", "cd", "ef", "abc", "x", "yz"]);
        let bounds = SuffixBounds::new(&letters);
        let cancel = CancelToken::new();

        let sequential = Engine::new(&letters, &bounds, 3, &cancel)
            .run(&[], BestResult::new(TiePolicy::All));
        let parallel = run(&letters, &bounds, 3, TiePolicy::All, &cancel);

        assert!(parallel.complete);
        assert_eq!(parallel.best.score(), sequential.best.score());
        assert_eq!(parallel.best.teams(), sequential.best.teams());
    }

    #[test]
    fn test_cancelled() {
        let letters = sets(&["ab", "cd", "ef"]);
        let bounds = SuffixBounds::new(&letters);
        let cancel = CancelToken::new();
        cancel.cancel();

        let outcome = run(&letters, &bounds, 2, TiePolicy::First, &cancel);
        assert!(!outcome.complete);
        assert_eq!(outcome.best.score(), None);
    }
}
