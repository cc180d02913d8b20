// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Invalid search parameters are rejected before any search work starts.
//! Candidates whose names have no letters are not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the searcher and its candidate sources.
#[derive(Error, Debug)]
pub enum CoverError {
    /// The requested team size was negative.
    #[error("invalid argument: team size must not be negative (got {0})")]
    NegativeTeamSize(i64),

    /// The requested team size is larger than the candidate pool.
    #[error("invalid argument: team size {team_size} exceeds pool size {pool_size}")]
    TeamSizeExceedsPool { team_size: usize, pool_size: usize },

    /// Reading candidate names failed.
    #[error("failed to read candidates from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoverError {
    /// True for the errors caused by bad search parameters.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CoverError::NegativeTeamSize(_) | CoverError::TeamSizeExceedsPool { .. }
        )
    }
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, CoverError>;

/// Convert a signed team size into a `usize`, rejecting negatives.
pub fn team_size_from_signed(team_size: i64) -> Result<usize> {
    usize::try_from(team_size).map_err(|_| CoverError::NegativeTeamSize(team_size))
}

/// Check a team size against the pool it will be drawn from.
pub fn validate_team_size(team_size: usize, pool_size: usize) -> Result<()> {
    if team_size > pool_size {
        return Err(CoverError::TeamSizeExceedsPool {
            team_size,
            pool_size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_team_size() {
        let err = team_size_from_signed(-1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid argument: team size must not be negative (got -1)"
        );
        assert_eq!(team_size_from_signed(7).unwrap(), 7);
    }

    #[test]
    fn test_team_size_exceeds_pool() {
        let err = validate_team_size(6, 5).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid argument: team size 6 exceeds pool size 5"
        );
    }

    #[test]
    fn test_empty_pool() {
        assert!(validate_team_size(0, 0).is_ok());
        assert!(validate_team_size(1, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_io_is_not_invalid_argument() {
        let err = CoverError::Io {
            path: PathBuf::from("teams.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "failed to read candidates from teams.txt");
    }
}
