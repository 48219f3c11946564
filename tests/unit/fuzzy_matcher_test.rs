//! Unit tests for the fuzzy matcher.

use rstest::rstest;

use tabfinder::services::fuzzy_matcher::{fuzzy_match, EMPTY_PATTERN_SCORE};

#[rstest]
#[case("GitHub", "gh", vec![0, 3])]
#[case("GitHub", "GH", vec![0, 3])]
#[case("https://github.com", "hub", vec![0, 12, 13])]
#[case("abc", "abc", vec![0, 1, 2])]
#[case("a-b-c", "ac", vec![0, 4])]
#[case("İstanbul guide", "g", vec![9])]
#[case("İstanbul guide", "İg", vec![0, 9])]
#[case("ÄPFEL", "äp", vec![0, 1])]
fn test_matched_positions(#[case] candidate: &str, #[case] pattern: &str, #[case] expected: Vec<usize>) {
    let m = fuzzy_match(candidate, pattern).expect("should match");
    assert_eq!(m.positions, expected);
}

#[rstest]
#[case("google", "gh")]
#[case("abc", "cba")]
#[case("ab", "abc")]
#[case("", "a")]
fn test_non_matches(#[case] candidate: &str, #[case] pattern: &str) {
    assert!(fuzzy_match(candidate, pattern).is_none());
}

#[test]
fn test_empty_pattern_matches_with_minimal_score() {
    for candidate in ["", "anything", "GitHub https://github.com"] {
        let m = fuzzy_match(candidate, "").unwrap();
        assert_eq!(m.score, EMPTY_PATTERN_SCORE);
        assert!(m.positions.is_empty());
    }
}

#[test]
fn test_score_sums_hundred_minus_index() {
    // 'h' at 0, 'u' at 12, 'b' at 13 in "https://github.com"
    let m = fuzzy_match("https://github.com", "hub").unwrap();
    assert_eq!(m.score, 100 + (100 - 12) + (100 - 13));
}

#[test]
fn test_earlier_match_scores_higher() {
    let early = fuzzy_match("tab finder", "tab").unwrap();
    let late = fuzzy_match("the old tab", "tab").unwrap();
    assert!(early.score > late.score);
}

#[test]
fn test_score_goes_negative_past_index_hundred() {
    let candidate = format!("{}z", "a".repeat(150));
    let m = fuzzy_match(&candidate, "z").unwrap();
    assert_eq!(m.positions, vec![150]);
    assert_eq!(m.score, -50);
}

#[test]
fn test_greedy_first_occurrence() {
    // Greedy scan takes the first 'a', even though a later one exists.
    let m = fuzzy_match("banana", "an").unwrap();
    assert_eq!(m.positions, vec![1, 2]);
}

#[test]
fn test_no_whitespace_normalisation() {
    assert!(fuzzy_match("tab finder", "tab finder").is_some());
    assert!(fuzzy_match("tabfinder", "tab finder").is_none());
}

#[test]
fn test_match_is_deterministic() {
    let a = fuzzy_match("Hacker News https://news.ycombinator.com", "hn");
    let b = fuzzy_match("Hacker News https://news.ycombinator.com", "hn");
    assert_eq!(a, b);
}

#[test]
fn test_positions_index_original_candidate() {
    // 'İ' lower-cases to two chars; later positions must not drift.
    let candidate = "İİ Straße guide";
    let m = fuzzy_match(candidate, "sg").unwrap();
    let chars: Vec<char> = candidate.chars().collect();
    assert_eq!(m.positions.len(), 2);
    assert_eq!(chars[m.positions[0]], 'S');
    assert_eq!(chars[m.positions[1]], 'g');

    let m = fuzzy_match("İ", "İ").unwrap();
    assert_eq!(m.positions, vec![0]);
}
