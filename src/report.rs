// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable and JSON renderings of a search result.

use crate::search::{SearchResult, Team};
use std::fmt::{self, Write};

/// Wrapper that formats one team as its members followed by the missing letters.
pub struct TeamReport<'a> {
    pub number: usize,
    pub team: &'a Team,
}

impl fmt::Display for TeamReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team {}:", self.number)?;
        for name in &self.team.names {
            writeln!(f, "{}", name)?;
        }
        let missing = self.team.missing();
        writeln!(f, "missing chars: {} ({})", missing.len(), missing)
    }
}

/// Render every team of a result, separated by blank lines.
pub fn render_text(result: &SearchResult) -> String {
    let mut out = String::new();
    if !result.complete {
        // Writing to a String cannot fail
        let _ = writeln!(out, "search incomplete: best found so far\n");
    }
    for (i, team) in result.teams.iter().enumerate() {
        let report = TeamReport {
            number: i + 1,
            team,
        };
        let _ = writeln!(out, "{}", report);
    }
    out
}

/// Render the whole result as pretty-printed JSON.
pub fn render_json(result: &SearchResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
