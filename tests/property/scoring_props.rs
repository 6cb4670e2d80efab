// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking properties.

use super::common::make_entry;
use proptest::prelude::*;
use wiki_search::{parse_query, rank, score_entry, IndexEntry};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like strings over a small alphabet so queries actually hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D]{1,5}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn entry_strategy() -> impl Strategy<Value = IndexEntry> {
    (word_strategy(), text_strategy()).prop_map(|(title, content)| make_entry(&title, &content))
}

fn index_strategy() -> impl Strategy<Value = Vec<IndexEntry>> {
    prop::collection::vec(entry_strategy(), 0..20)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every returned result has a positive score.
    #[test]
    fn prop_results_have_positive_scores(entries in index_strategy(), query in query_strategy()) {
        for result in rank(&entries, &query, 50) {
            prop_assert!(result.score > 0);
        }
    }

    /// Property: the result count never exceeds the limit.
    #[test]
    fn prop_results_respect_limit(
        entries in index_strategy(),
        query in query_strategy(),
        limit in 0usize..10,
    ) {
        prop_assert!(rank(&entries, &query, limit).len() <= limit);
    }

    /// Property: scores are non-increasing down the list.
    #[test]
    fn prop_results_sorted_descending(entries in index_strategy(), query in query_strategy()) {
        let results = rank(&entries, &query, 50);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: every entry with a positive score is returned when the limit allows.
    #[test]
    fn prop_unlimited_rank_finds_every_match(entries in index_strategy(), query in query_strategy()) {
        prop_assume!(query.trim().chars().count() >= 2);
        let terms = parse_query(&query);
        let expected = entries.iter().filter(|e| score_entry(e, &terms) > 0).count();
        prop_assert_eq!(rank(&entries, &query, entries.len()).len(), expected);
    }

    /// Property: queries under two trimmed characters never return anything.
    #[test]
    fn prop_short_queries_are_empty(
        entries in index_strategy(),
        c in "[a-d]",
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let query = format!("{pad_left}{c}{pad_right}");
        prop_assert!(rank(&entries, &query, 50).is_empty());
    }

    /// Property: scoring ignores the case of the query.
    #[test]
    fn prop_query_case_insensitive(entries in index_strategy(), query in query_strategy()) {
        prop_assert_eq!(
            rank(&entries, &query.to_lowercase(), 50),
            rank(&entries, &query.to_uppercase(), 50)
        );
    }

    /// Property: ranking is deterministic.
    #[test]
    fn prop_rank_deterministic(entries in index_strategy(), query in query_strategy()) {
        prop_assert_eq!(rank(&entries, &query, 50), rank(&entries, &query, 50));
    }

    /// Property: a title equal to the term outscores one that only contains it,
    /// given identical content.
    #[test]
    fn prop_exact_title_beats_substring(term in "[a-d]{2,4}", suffix in "[a-d]{1,3}", content in text_strategy()) {
        let exact = make_entry(&term, &content);
        let longer = make_entry(&format!("{term}{suffix}"), &content);
        let terms = parse_query(&term);
        prop_assert!(score_entry(&exact, &terms) > score_entry(&longer, &terms));
    }
}
