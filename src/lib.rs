// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-browser full-text search for a static wiki.
//!
//! The site build writes every page into `search-index.json` as a flat list of
//! `{title, content, url, category}` records. This crate loads that file once,
//! ranks pages against what the reader types, and renders either the header
//! dropdown or the full results page.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  index.rs    │──▶│  scoring/    │──▶│  render.rs   │──▶│ runtime/wasm │
//! │ (IndexCache, │   │ (rank,       │   │ (Renderer,   │   │ (DOM, fetch, │
//! │  load once)  │   │  score_entry)│   │  highlight)  │   │  setTimeout) │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!         ▲                                                        │
//!         └──────────────── controller/ (debounce, state) ◀────────┘
//! ```
//!
//! Everything except `runtime::wasm` is plain Rust and tests natively. The
//! browser bindings are behind the `wasm` feature.
//!
//! # Usage
//!
//! ```ignore
//! use wiki_search::{rank, highlight, SearchIndex};
//!
//! let index = SearchIndex::from_json(&body)?;
//! for result in rank(index.entries(), "magik", 5) {
//!     println!("{} ({})", highlight(&result.entry.title, "magik"), result.score);
//! }
//! ```

// Module declarations
pub mod config;
pub mod controller;
mod error;
pub mod highlight;
mod index;
pub mod query;
pub mod render;
pub mod runtime;
pub mod scoring;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::{FieldConfig, Messages, SearchConfig};
pub use controller::{Debouncer, FieldState, LocalTask, ResultsView, Scheduler, SearchField};
pub use error::IndexLoadError;
pub use highlight::{highlight, strip_highlights, Highlighter};
pub use index::{IndexCache, IndexSource, IndexState};
pub use query::{is_searchable, parse_query, MIN_QUERY_CHARS};
pub use render::{Layout, Renderer};
pub use scoring::{compare_results, rank, score_entry};
pub use types::{IndexEntry, ScoredResult, SearchIndex};
