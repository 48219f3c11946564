//! Fuzzy Matcher for TabFinder.
//!
//! Ordered subsequence matching: every pattern character must appear in the
//! candidate in the same relative order, not necessarily adjacent. Each
//! matched character at candidate index `i` contributes `100 - i` to the
//! score, so matches near the start of the string rank higher.

use crate::types::ranking::MatchResult;

/// Score returned for an empty pattern, which matches everything.
pub const EMPTY_PATTERN_SCORE: i64 = 1;

/// Per-character base score; a match at index `i` adds `MATCH_BASE - i`.
const MATCH_BASE: i64 = 100;

/// Matches `pattern` against `candidate`, ignoring case.
///
/// Returns `None` when the pattern is not a subsequence of the candidate.
/// Positions are char indices into `candidate` itself; characters are
/// compared one at a time after lower-casing, so a character whose lower
/// case spans several chars never shifts the indices.
pub fn fuzzy_match(candidate: &str, pattern: &str) -> Option<MatchResult> {
    if pattern.is_empty() {
        return Some(MatchResult {
            score: EMPTY_PATTERN_SCORE,
            positions: Vec::new(),
        });
    }

    let pattern: Vec<char> = pattern.chars().collect();

    let mut cursor = 0;
    let mut score = 0i64;
    let mut positions = Vec::with_capacity(pattern.len());

    for (i, ch) in candidate.chars().enumerate() {
        if same_ignoring_case(ch, pattern[cursor]) {
            positions.push(i);
            score += MATCH_BASE - i as i64;
            cursor += 1;
            if cursor == pattern.len() {
                break;
            }
        }
    }

    if cursor != pattern.len() {
        return None;
    }
    Some(MatchResult { score, positions })
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
