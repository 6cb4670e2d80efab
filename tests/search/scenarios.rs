// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios on the two-page sample index.

use super::common::{sample_entries, sample_index_json};
use std::rc::Rc;
use wiki_search::testing::StaticSource;
use wiki_search::{rank, IndexCache, Renderer, SearchConfig};

#[test]
fn test_magik_scores_title_exact_and_content() {
    let results = rank(&sample_entries(), "magik", 10);

    assert_eq!(results.len(), 1, "only the Magik page matches");
    assert_eq!(results[0].entry.url, "/a");
    // 10 title substring + 20 exact title + 2 content occurrences
    assert_eq!(results[0].score, 32);
}

#[test]
fn test_unmatched_query_is_empty() {
    assert!(rank(&sample_entries(), "xyz123", 10).is_empty());
}

#[test]
fn test_empty_full_render_is_only_the_hint() {
    let config = SearchConfig::default();
    let renderer = Renderer::full(&config.full, &config.messages);

    let html = renderer.render(&[], "xyz123");
    assert_eq!(html, r#"<p class="search-hint">Ничего не найдено</p>"#);
    assert!(!html.contains("search-result-card"));
}

#[tokio::test]
async fn test_cached_index_serves_the_same_scenario() {
    let cache = Rc::new(IndexCache::new(StaticSource::new(sample_index_json())));
    assert!(cache.search("magik", 10).is_empty(), "nothing before load");

    cache.load().await;
    let results = cache.search("magik", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 32);
    assert!(cache.search("xyz123", 10).is_empty());
}
