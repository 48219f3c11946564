//! Ranker for TabFinder.
//!
//! Scores every tab record against the query and returns the matches in
//! descending score order.

use crate::services::fuzzy_matcher::fuzzy_match;
use crate::types::ranking::RankedResult;
use crate::types::tab::TabRecord;

/// Text the query is matched against.
///
/// Title and URL appear on their own and again inside the searchable text,
/// so terms early in either field weigh twice. Ranking depends on this.
pub fn match_haystack(record: &TabRecord) -> String {
    format!("{} {} {}", record.title, record.url, record.searchable_text)
}

/// Filters `records` down to those matching `query`, best match first.
///
/// Records with equal scores keep their input order.
pub fn filter(records: &[TabRecord], query: &str) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = records
        .iter()
        .filter_map(|record| {
            fuzzy_match(&match_haystack(record), query).map(|m| RankedResult {
                tab: record.clone(),
                score: m.score,
            })
        })
        .collect();

    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
