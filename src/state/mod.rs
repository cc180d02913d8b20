// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search mutable state that is not part of the search stack itself.

pub mod statistics;

pub use statistics::{Counters, Statistics};
