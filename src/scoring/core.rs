// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The arithmetic of a match.
//!
//! Scores are plain additive integers, accumulated per query term:
//!
//! | Signal                              | Points          |
//! |-------------------------------------|-----------------|
//! | Title contains the term             | 10              |
//! | Title *is* the term (whole title)   | +20 on top      |
//! | Each occurrence in the content      | 1               |
//!
//! So a page titled "Magik" whose body mentions "magik" twice scores
//! `10 + 20 + 2 = 32` for the query "magik". A repeated query term is scored
//! again: "magik magik" gives the same page 64.
//!
//! Content occurrences are counted non-overlapping, left to right, which is
//! what `str::matches` does: "aa" occurs twice in "aaaa", not three times.

use crate::types::IndexEntry;

/// Points when the lowercased title contains the term.
pub const TITLE_CONTAINS_SCORE: u32 = 10;

/// Extra points when the lowercased title equals the term exactly.
pub const TITLE_EXACT_BONUS: u32 = 20;

/// Points per non-overlapping occurrence in the lowercased content.
pub const CONTENT_OCCURRENCE_SCORE: u32 = 1;

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// An empty needle never occurs (terms come from `split_whitespace`, so this
/// only matters to direct callers).
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Score one entry against already-normalized terms.
///
/// Lowercases title and content once, then walks the terms. Returns 0 when
/// nothing matched.
pub fn score_entry(entry: &IndexEntry, terms: &[String]) -> u32 {
    let title = entry.title.to_lowercase();
    let content = entry.content.to_lowercase();

    terms
        .iter()
        .map(|term| score_term(&title, &content, term))
        .sum()
}

/// Score a single term against pre-lowercased title and content.
pub fn score_term(title: &str, content: &str, term: &str) -> u32 {
    let mut score = 0;

    if title.contains(term) {
        score += TITLE_CONTAINS_SCORE;
    }
    if title == term {
        score += TITLE_EXACT_BONUS;
    }

    let occurrences = u32::try_from(count_occurrences(content, term)).unwrap_or(u32::MAX);
    score.saturating_add(occurrences.saturating_mul(CONTENT_OCCURRENCE_SCORE))
}
