// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering properties.

use super::common::make_entry;
use proptest::prelude::*;
use wiki_search::render::{preview, ELLIPSIS};
use wiki_search::{rank, Renderer, SearchConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a preview is at most `max_chars` characters plus the ellipsis.
    #[test]
    fn prop_preview_bounded(content in "\\PC{0,400}", max_chars in 0usize..320) {
        let out = preview(&content, max_chars);
        prop_assert!(out.ends_with(ELLIPSIS));
        let body = &out[..out.len() - ELLIPSIS.len()];
        prop_assert_eq!(body.chars().count(), content.chars().count().min(max_chars));
        prop_assert!(content.starts_with(body));
    }

    /// Property: one dropdown item per ranked result, or exactly the hint.
    #[test]
    fn prop_item_count_matches_results(
        titles in prop::collection::vec("[a-c]{2,4}", 0..12),
        query in "[a-c]{2,3}",
    ) {
        let entries: Vec<_> = titles.iter().map(|t| make_entry(t, t)).collect();
        let config = SearchConfig::default();
        let renderer = Renderer::quick(&config.quick, &config.messages);

        let results = rank(&entries, &query, config.quick.limit);
        let html = renderer.render(&results, &query);

        if results.is_empty() {
            prop_assert!(html.starts_with(r#"<div class="search-hint">"#));
        } else {
            prop_assert_eq!(html.matches(r#"class="search-result-item""#).count(), results.len());
        }
    }
}
