// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading candidate identifiers.
//!
//! Input format: one identifier per line. Surrounding whitespace is trimmed;
//! blank lines and lines starting with `#` are skipped.

use crate::error::{CoverError, Result};
use crate::pool::roster::CHAMPIONS;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read identifiers from any buffered reader.
pub fn read_names<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

/// Read identifiers from a file, or from stdin when the path is `-`.
pub fn read_names_from_path(path: &Path) -> Result<Vec<String>> {
    let io_error = |source| CoverError::Io {
        path: path.to_path_buf(),
        source,
    };

    let names = if path == Path::new("-") {
        read_names(io::stdin().lock()).map_err(io_error)?
    } else {
        let file = File::open(path).map_err(io_error)?;
        read_names(BufReader::new(file)).map_err(io_error)?
    };
    debug!(path = %path.display(), count = names.len(), "read candidate names");
    Ok(names)
}

/// Identifiers from `path`, or the built-in roster when no path is given.
pub fn load_names(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => read_names_from_path(path),
        None => Ok(CHAMPIONS.iter().map(|name| name.to_string()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_names_skips_comments_and_blanks() {
        let input = "# teams\nFnatic\n\n  G2  \n#TSM\nCloud9\n";
        let names = read_names(Cursor::new(input)).unwrap();
        assert_eq!(names, vec!["Fnatic", "G2", "Cloud9"]);
    }

    #[test]
    fn test_read_names_empty_input() {
        let names = read_names(Cursor::new("")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_names_from_path(Path::new("/nonexistent/teams.txt")).unwrap_err();
        assert!(matches!(err, CoverError::Io { .. }));
    }

    #[test]
    fn test_default_roster() {
        let names = load_names(None).unwrap();
        assert_eq!(names.len(), CHAMPIONS.len());
        assert_eq!(names[0], "aatrox");
    }
}
