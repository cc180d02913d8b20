// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Best-result accumulator.
//!
//! One accumulator lives for one search (or one worker of a parallel search).
//! Teams are stored as pool indices in increasing order.

use crate::search::config::TiePolicy;

/// Outcome of offering a complete team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Strictly better than anything seen; replaces the best.
    Improved,
    /// Equal to the best and kept as a tie.
    Tied,
    /// Not kept.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct BestResult {
    policy: TiePolicy,
    score: Option<usize>,
    teams: Vec<Vec<usize>>,
}

impl BestResult {
    pub fn new(policy: TiePolicy) -> Self {
        Self {
            policy,
            score: None,
            teams: Vec::new(),
        }
    }

    /// Best score so far, or None before the first complete team.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn teams(&self) -> &[Vec<usize>] {
        &self.teams
    }

    /// Whether a branch whose bound is `bound` can be abandoned.
    ///
    /// `floor` is a best score known from elsewhere (another worker). When
    /// keeping all ties, a branch that can only equal the best is still needed.
    pub fn should_prune(&self, bound: usize, floor: Option<usize>) -> bool {
        let best = match (self.score, floor) {
            (Some(a), Some(b)) => a.max(b),
            (a, b) => match a.or(b) {
                Some(best) => best,
                None => return false,
            },
        };
        match self.policy {
            TiePolicy::First => bound <= best,
            TiePolicy::All => bound < best,
        }
    }

    /// Offer a complete team with the given score.
    pub fn offer(&mut self, team: &[usize], score: usize) -> Offer {
        match self.score {
            Some(best) if score < best => Offer::Rejected,
            Some(best) if score == best => match self.policy {
                TiePolicy::First => Offer::Rejected,
                TiePolicy::All => {
                    self.teams.push(team.to_vec());
                    Offer::Tied
                }
            },
            _ => {
                self.score = Some(score);
                self.teams.clear();
                self.teams.push(team.to_vec());
                Offer::Improved
            }
        }
    }

    /// Combine with the result of a later part of the search space.
    ///
    /// On equal scores `self` comes first, so merging in pool order keeps the
    /// order a sequential search would report.
    #[must_use]
    pub fn merge(mut self, later: BestResult) -> BestResult {
        match (self.score, later.score) {
            (_, None) => self,
            (None, Some(_)) => later,
            (Some(a), Some(b)) if b > a => later,
            (Some(a), Some(b)) if b == a => {
                if self.policy == TiePolicy::All {
                    self.teams.extend(later.teams);
                }
                self
            }
            _ => self,
        }
    }
}
