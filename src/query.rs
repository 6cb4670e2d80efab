// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization shared by the scorer and the highlighter.
//!
//! Both sides must agree on what a "term" is, otherwise the highlighter marks
//! words the scorer never counted. Normalization is minimal:
//! lowercase, split on whitespace, keep duplicates and order.

/// Queries shorter than this (after trimming, in characters) are not searched.
pub const MIN_QUERY_CHARS: usize = 2;

/// Lowercase the query and split it into non-empty whitespace-separated terms.
///
/// Duplicates are kept: `"rust rust"` yields two terms, and each one scores.
///
/// ```ignore
/// assert_eq!(parse_query("  Magik  User "), vec!["magik", "user"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether the input is long enough to be worth searching.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}
