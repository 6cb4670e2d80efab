// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score every entry, keep the positives, sort, cut.
//!
//! Sort order is score descending. Ties keep the order the entries appear in
//! `search-index.json`: the sort is stable and nothing else breaks ties. The
//! site build writes pages in directory-walk order, so equal scores come back
//! in that order too.

use crate::query::{is_searchable, parse_query};
use crate::scoring::core::score_entry;
use crate::types::{IndexEntry, ScoredResult};
use std::cmp::Ordering;

/// Compare two results for ranking: higher score first.
///
/// Equal scores compare `Equal`, so a stable sort preserves index
/// order for ties.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score.cmp(&a.score)
}

/// Rank `entries` against `query`, returning at most `limit` results.
///
/// Queries under two characters (after trimming) return nothing without
/// looking at the entries.
pub fn rank(entries: &[IndexEntry], query: &str, limit: usize) -> Vec<ScoredResult> {
    if !is_searchable(query) {
        return Vec::new();
    }

    let terms = parse_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = entries
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &terms);
            (score > 0).then(|| ScoredResult {
                entry: entry.clone(),
                score,
            })
        })
        .collect();

    results.sort_by(compare_results);
    results.truncate(limit);
    results
}
