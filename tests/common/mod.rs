// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::rc::Rc;
use wiki_search::testing::{ManualScheduler, RecordingView, StaticSource};
use wiki_search::{
    Debouncer, IndexCache, IndexEntry, IndexSource, Renderer, SearchConfig, SearchField,
    SearchIndex,
};

// Re-export canonical test utilities from wiki_search::testing
pub use wiki_search::testing::{make_entry, make_entry_full, sample_entries, sample_index_json};

pub type TestField<S = StaticSource> = SearchField<S, RecordingView, ManualScheduler>;

/// A small wiki with pages in several categories, shaped like the real site.
pub fn wiki_entries() -> Vec<IndexEntry> {
    vec![
        make_entry_full(
            "Magik",
            "A story about a magik user. Magik is powerful.",
            "/backstory/magik.html",
            "backstory",
        ),
        make_entry_full(
            "Settlement",
            "The world state after the war.",
            "/setting/settlement.html",
            "setting",
        ),
        make_entry_full(
            "Old World",
            "Before the war the old world was quiet.",
            "/setting/old-world.html",
            "setting",
        ),
        make_entry_full(
            "Порча",
            "Порча земли распространяется с севера.",
            "/setting/porcha.html",
            "setting",
        ),
        make_entry_full("Index", "Home page of the wiki.", "/index.html", "root"),
    ]
}

pub fn wiki_index() -> SearchIndex {
    SearchIndex::new(wiki_entries())
}

pub fn wiki_json() -> String {
    serde_json::to_string(&wiki_entries()).expect("entries serialize")
}

/// Cache preloaded with `wiki_entries()` served from memory.
pub fn wiki_cache() -> Rc<IndexCache<StaticSource>> {
    Rc::new(IndexCache::new(StaticSource::new(wiki_json())))
}

/// Header dropdown field with default configuration.
pub fn quick_field<S: IndexSource + 'static>(cache: &Rc<IndexCache<S>>) -> Rc<TestField<S>> {
    let config = SearchConfig::default();
    SearchField::new(
        Rc::clone(cache),
        RecordingView::default(),
        Renderer::quick(&config.quick, &config.messages),
        config.quick.limit,
        Debouncer::new(ManualScheduler::default(), config.debounce_ms),
    )
}

/// Results-page field with default configuration.
pub fn full_field<S: IndexSource + 'static>(cache: &Rc<IndexCache<S>>) -> Rc<TestField<S>> {
    let config = SearchConfig::default();
    SearchField::new(
        Rc::clone(cache),
        RecordingView::default(),
        Renderer::full(&config.full, &config.messages),
        config.full.limit,
        Debouncer::new(ManualScheduler::default(), config.debounce_ms),
    )
}
