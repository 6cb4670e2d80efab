// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the search works over.
//!
//! `IndexEntry` is one page of the wiki as the site build wrote it into
//! `search-index.json`. `SearchIndex` is the whole file once parsed: a shared,
//! read-only slice that every search on the page reuses. `ScoredResult` is what
//! a query produces, built fresh each time and thrown away after rendering.
//!
//! # Invariants
//!
//! - **SearchIndex**: never mutated after construction. Clones share the same
//!   backing slice, so handing it to a controller costs a refcount bump.
//! - **ScoredResult**: `score > 0`. Entries that match nothing never make it
//!   out of the scorer.

use crate::error::IndexLoadError;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One page record from the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    /// Plain-text body (tags stripped by the site build).
    pub content: String,
    pub url: String,
    pub category: String,
}

/// An entry that matched a query, with its additive score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub entry: IndexEntry,
    pub score: u32,
}

/// The loaded search index.
///
/// Cheap to clone: all clones point at the same entries.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Rc<[IndexEntry]>,
}

impl SearchIndex {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Parse the JSON array written by the site build.
    pub fn from_json(body: &str) -> Result<Self, IndexLoadError> {
        let entries: Vec<IndexEntry> = serde_json::from_str(body)?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<IndexEntry>> for SearchIndex {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self::new(entries)
    }
}
