//! Property-based tests for the fuzzy matcher.
//!
//! Any successful match reports strictly increasing positions into the
//! candidate, one per pattern character, each pointing at a character that
//! lower-cases the same as the pattern character. The empty pattern matches
//! everything.

use proptest::prelude::*;

use tabfinder::services::fuzzy_matcher::{fuzzy_match, EMPTY_PATTERN_SCORE};

/// Characters mixing ASCII with ones whose case mapping changes length.
fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => proptest::char::range('a', 'z'),
        2 => proptest::char::range('A', 'Z'),
        1 => Just(' '),
        1 => prop::sample::select(vec!['İ', 'ß', 'Σ', 'σ', 'ς', 'Ä', 'ä', 'ﬁ', 'K', 'Ω']),
        1 => any::<char>(),
    ]
}

fn arb_text(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..max).prop_map(|chars| chars.into_iter().collect())
}

fn lowered(c: char) -> String {
    c.to_lowercase().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn matched_positions_point_into_candidate(
        candidate in arb_text(40),
        pattern in arb_text(5),
    ) {
        if let Some(m) = fuzzy_match(&candidate, &pattern) {
            let cand: Vec<char> = candidate.chars().collect();
            let pat: Vec<char> = pattern.chars().collect();

            prop_assert_eq!(m.positions.len(), pat.len());
            for pair in m.positions.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for (i, &pos) in m.positions.iter().enumerate() {
                prop_assert!(pos < cand.len());
                prop_assert_eq!(lowered(cand[pos]), lowered(pat[i]));
            }
            if !pattern.is_empty() {
                let expected: i64 = m.positions.iter().map(|&p| 100 - p as i64).sum();
                prop_assert_eq!(m.score, expected);
            }
        }
    }

    #[test]
    fn empty_pattern_always_matches(candidate in ".{0,60}") {
        let m = fuzzy_match(&candidate, "").unwrap();
        prop_assert_eq!(m.score, EMPTY_PATTERN_SCORE);
        prop_assert!(m.positions.is_empty());
    }

    #[test]
    fn subsequence_of_candidate_always_matches(
        candidate in arb_text(30),
        picks in prop::collection::vec(any::<bool>(), 30),
    ) {
        let pattern: String = candidate
            .chars()
            .zip(picks.iter())
            .filter(|(_, &keep)| keep)
            .map(|(c, _)| c)
            .collect();
        prop_assert!(fuzzy_match(&candidate, &pattern).is_some());
    }

    #[test]
    fn ascii_match_ignores_case(
        candidate in "[a-z]{1,30}",
        picks in prop::collection::vec(any::<bool>(), 30),
    ) {
        let pattern: String = candidate
            .chars()
            .zip(picks.iter())
            .filter(|(_, &keep)| keep)
            .map(|(c, _)| c)
            .collect();
        let upper = candidate.to_uppercase();
        prop_assert_eq!(fuzzy_match(&upper, &pattern), fuzzy_match(&candidate, &pattern));
    }
}
