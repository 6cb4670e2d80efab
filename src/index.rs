// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the search index, once.
//!
//! `IndexCache` owns the page's only copy of the index. It starts `Unloaded`;
//! the first `load()` fetches `search-index.json` through an [`IndexSource`],
//! parses it and keeps it for the rest of the page session. Later calls return
//! the cached index without touching the network.
//!
//! # Failure
//!
//! A failed fetch or parse is logged and `load()` resolves to an empty index.
//! Callers can't tell "nothing matched" from "nothing loaded", and don't need
//! to. The cache goes back to `Unloaded`, so the next search tries again;
//! nothing retries on its own.
//!
//! # Concurrency
//!
//! Everything runs on the UI thread. A `load()` that arrives while another is
//! fetching (a search firing during the first-focus preload, say) waits for
//! that fetch instead of starting its own, then returns whatever it produced.
//! If the fetching future is dropped before it finishes, the cache settles
//! back to `Unloaded` and wakes the waiters.

use crate::error::IndexLoadError;
use crate::scoring::rank;
use crate::types::{ScoredResult, SearchIndex};
use std::cell::RefCell;
use std::future::{poll_fn, Future};
use std::task::{Poll, Waker};
use tracing::{debug, error, info};

/// Where the raw index JSON comes from.
///
/// The browser implementation fetches over HTTP (`runtime::wasm::FetchSource`);
/// tests use in-memory sources from `testing`.
#[allow(async_fn_in_trait)]
pub trait IndexSource {
    /// Fetch the index body.
    async fn fetch(&self) -> Result<String, IndexLoadError>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String {
        String::from("search index")
    }
}

/// Load state of the cache.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    /// Nothing fetched yet, or the last attempt failed.
    #[default]
    Unloaded,
    /// A fetch is in flight; other loads wait on it.
    Loading,
    /// Parsed and cached for the session.
    Loaded(SearchIndex),
}

impl IndexState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, IndexState::Loaded(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, IndexState::Loading)
    }
}

/// Lazily loaded, session-long index cache.
pub struct IndexCache<S> {
    source: S,
    state: RefCell<IndexState>,
    waiters: RefCell<Vec<Waker>>,
}

impl<S> IndexCache<S> {
    /// Leave `Loading` if still there and wake every waiting load.
    fn settle(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.is_loading() {
                *state = IndexState::Unloaded;
            }
        }
        for waker in self.waiters.take() {
            waker.wake();
        }
    }

    fn wait_for_fetch(&self) -> impl Future<Output = ()> + '_ {
        poll_fn(move |cx| {
            if self.state.borrow().is_loading() {
                self.waiters.borrow_mut().push(cx.waker().clone());
                Poll::Pending
            } else {
                Poll::Ready(())
            }
        })
    }
}

/// Settles the cache when the fetching load finishes or is dropped.
struct Settle<'a, S>(&'a IndexCache<S>);

impl<S> Drop for Settle<'_, S> {
    fn drop(&mut self) {
        self.0.settle();
    }
}

impl<S: IndexSource> IndexCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RefCell::new(IndexState::Unloaded),
            waiters: RefCell::new(Vec::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current load state.
    pub fn state(&self) -> IndexState {
        self.state.borrow().clone()
    }

    /// The cached index, if loaded. Never triggers a fetch.
    pub fn get(&self) -> Option<SearchIndex> {
        match &*self.state.borrow() {
            IndexState::Loaded(index) => Some(index.clone()),
            _ => None,
        }
    }

    /// Return the cached index, fetching it first if needed.
    ///
    /// Never fails: load errors are logged and produce an empty index.
    pub async fn load(&self) -> SearchIndex {
        if let Some(index) = self.get() {
            return index;
        }

        if self.state.borrow().is_loading() {
            debug!("search index fetch in flight, waiting");
            self.wait_for_fetch().await;
            return self.get().unwrap_or_default();
        }

        self.state.replace(IndexState::Loading);
        let _settle = Settle(self);
        debug!(source = %self.source.describe(), "fetching search index");

        match self.fetch_index().await {
            Ok(index) => {
                info!(entries = index.len(), "search index loaded");
                self.state.replace(IndexState::Loaded(index.clone()));
                index
            }
            Err(e) => {
                error!(source = %self.source.describe(), error = %e, "failed to load search index");
                SearchIndex::default()
            }
        }
    }

    async fn fetch_index(&self) -> Result<SearchIndex, IndexLoadError> {
        let body = self.source.fetch().await?;
        SearchIndex::from_json(&body)
    }

    /// Rank the cached index against `query`.
    ///
    /// Synchronous and side-effect free. Returns nothing when the index isn't
    /// loaded yet; call `load()` first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredResult> {
        match &*self.state.borrow() {
            IndexState::Loaded(index) => rank(index.entries(), query, limit),
            _ => Vec::new(),
        }
    }
}
