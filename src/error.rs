// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! There is exactly one failure the search can hit: the index didn't load.
//! The loader recovers from it by logging and searching an empty index, so
//! this type rarely travels further than `IndexCache::load`.

use thiserror::Error;

/// Failure to fetch or parse `search-index.json`.
#[derive(Debug, Error)]
pub enum IndexLoadError {
    /// The request never produced a response (network error, no `fetch`).
    #[error("failed to fetch search index: {0}")]
    Fetch(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },
    /// The body wasn't a JSON array of index entries.
    #[error("failed to parse search index: {0}")]
    Parse(#[from] serde_json::Error),
}
