// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup produced for the dropdown and the results page.

use super::common::wiki_entries;
use wiki_search::{rank, Layout, Messages, Renderer, SearchConfig};

fn quick() -> Renderer {
    let config = SearchConfig::default();
    Renderer::quick(&config.quick, &config.messages)
}

fn full() -> Renderer {
    let config = SearchConfig::default();
    Renderer::full(&config.full, &config.messages)
}

#[test]
fn test_dropdown_renders_one_link_per_result() {
    let results = rank(&wiki_entries(), "world", 5);
    let html = quick().render(&results, "world");

    assert_eq!(html.matches(r#"class="search-result-item""#).count(), results.len());
    assert!(html.contains(r#"href="/setting/old-world.html""#));
    assert!(html.contains(r#"<div class="search-result-category">setting</div>"#));
    assert!(!html.contains("search-result-card"));
}

#[test]
fn test_page_renders_cards_with_meta() {
    let results = rank(&wiki_entries(), "world", 20);
    let html = full().render(&results, "world");

    assert_eq!(html.matches(r#"class="search-result-card""#).count(), results.len());
    assert_eq!(html.matches(r#"class="search-result-meta""#).count(), results.len());
    assert!(!html.contains("search-result-item"));
}

#[test]
fn test_render_follows_result_order() {
    let results = rank(&wiki_entries(), "world", 20);
    let html = full().render(&results, "world");

    let old_world = html.find("/setting/old-world.html").expect("old world rendered");
    let settlement = html.find("/setting/settlement.html").expect("settlement rendered");
    assert!(old_world < settlement);
}

#[test]
fn test_title_and_preview_are_highlighted() {
    let results = rank(&wiki_entries(), "magik", 5);
    let html = quick().render(&results, "magik");

    assert!(html.contains(
        r#"<div class="search-result-title"><mark class="search-highlight">Magik</mark></div>"#
    ));
    assert_eq!(html.matches(r#"<mark class="search-highlight">"#).count(), 3);
}

#[test]
fn test_preview_always_ends_with_ellipsis() {
    let results = rank(&wiki_entries(), "index", 5);
    let html = full().render(&results, "index");
    assert!(html.contains(r#"<p class="search-result-preview">Home page of the wiki....</p>"#));
}

#[test]
fn test_custom_messages_are_rendered() {
    let messages = Messages {
        no_results: "Nothing found".to_string(),
        start_typing: "Start typing".to_string(),
    };
    let renderer = Renderer::new(Layout::Dropdown, 150, &messages);
    assert_eq!(renderer.render(&[], "zz"), r#"<div class="search-hint">Nothing found</div>"#);
    assert_eq!(renderer.start_typing(), r#"<div class="search-hint">Start typing</div>"#);
}

#[test]
fn test_rendering_replaces_not_appends() {
    let renderer = quick();
    let results = rank(&wiki_entries(), "magik", 5);
    let first = renderer.render(&results, "magik");
    let second = renderer.render(&results, "magik");
    assert_eq!(first, second);
}
