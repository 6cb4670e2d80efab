// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking order, limits and query edge cases.

use super::common::{make_entry, wiki_entries};
use wiki_search::rank;

#[test]
fn test_results_sorted_by_descending_score() {
    let results = rank(&wiki_entries(), "world", 20);

    let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);

    // "Old World" has the term in its title; "Settlement" only in content
    assert_eq!(results[0].entry.title, "Old World");
    assert_eq!(results[1].entry.title, "Settlement");
}

#[test]
fn test_ties_keep_index_order() {
    let entries = vec![
        make_entry("First", "war"),
        make_entry("Second", "war"),
        make_entry("Third", "war"),
    ];
    let titles: Vec<_> = rank(&entries, "war", 10)
        .into_iter()
        .map(|r| r.entry.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn test_limit_truncates_after_sorting() {
    let entries: Vec<_> = (0..10)
        .map(|i| make_entry(&format!("Page {i}"), &"war ".repeat(i + 1)))
        .collect();

    let results = rank(&entries, "war", 5);
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].entry.title, "Page 9", "best match survives truncation");
    assert_eq!(results[4].entry.title, "Page 5");
}

#[test]
fn test_limit_zero_returns_nothing() {
    assert!(rank(&wiki_entries(), "world", 0).is_empty());
}

#[test]
fn test_short_and_blank_queries_are_empty() {
    let entries = wiki_entries();
    for query in ["", " ", "   \t", "w", "  w  ", "я"] {
        assert!(rank(&entries, query, 20).is_empty(), "query {query:?}");
    }
}

#[test]
fn test_two_char_query_is_scored() {
    let entries = vec![make_entry("Ox", "an ox")];
    let results = rank(&entries, "ox", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 10 + 20 + 1);
}

#[test]
fn test_query_is_case_insensitive() {
    let lower = rank(&wiki_entries(), "magik", 5);
    let upper = rank(&wiki_entries(), "MAGIK", 5);
    assert_eq!(lower, upper);
}

#[test]
fn test_cyrillic_query_matches() {
    let results = rank(&wiki_entries(), "ПОРЧА", 5);
    assert_eq!(results.len(), 1);
    // title substring + exact title + one occurrence in content
    assert_eq!(results[0].score, 31);
}

#[test]
fn test_repeated_term_counts_twice() {
    let once = rank(&wiki_entries(), "magik", 5);
    let twice = rank(&wiki_entries(), "magik magik", 5);
    assert_eq!(twice[0].score, once[0].score * 2);
}

#[test]
fn test_terms_accumulate_across_fields() {
    // "old" hits the Old World title and content, "war" hits content only
    let results = rank(&wiki_entries(), "old war", 5);
    assert_eq!(results[0].entry.title, "Old World");
    assert_eq!(results[0].score, 10 + 1 + 1);
}

#[test]
fn test_scoring_leaves_entries_untouched() {
    let entries = wiki_entries();
    let before = entries.clone();
    let _ = rank(&entries, "world war", 20);
    assert_eq!(entries, before);
}
