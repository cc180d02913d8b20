// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A named candidate and its letter-set.

use crate::letters::LetterSet;
use serde::Serialize;

/// A candidate for selection: an identifier and the letters it covers.
///
/// The letter-set is derived from the name once, at construction, and
/// there is no way to change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    name: String,
    letters: LetterSet,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let letters = LetterSet::from_name(&name);
        Self { name, letters }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }
}
