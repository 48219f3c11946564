use serde::{Deserialize, Serialize};

use super::tab::TabRecord;

/// Outcome of a successful fuzzy match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub score: i64,
    /// Char indices into the candidate, strictly increasing.
    pub positions: Vec<usize>,
}

/// A tab that matched the current query, with its score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    pub tab: TabRecord,
    pub score: i64,
}
