// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides in-memory stand-ins for the browser: an index source that
//! never touches the network, a scheduler with a manual clock, and a view
//! that records what it was asked to show.

#![doc(hidden)]

use crate::controller::{LocalTask, ResultsView, Scheduler};
use crate::error::IndexLoadError;
use crate::index::IndexSource;
use crate::types::IndexEntry;
use std::cell::{Cell, RefCell};
use std::future::poll_fn;
use std::task::{Poll, Waker};

/// Create an index entry with a derived URL and the `root` category.
pub fn make_entry(title: &str, content: &str) -> IndexEntry {
    IndexEntry {
        title: title.to_string(),
        content: content.to_string(),
        url: format!("/{}.html", title.to_lowercase().replace(' ', "-")),
        category: "root".to_string(),
    }
}

/// Create an index entry with every field spelled out.
pub fn make_entry_full(title: &str, content: &str, url: &str, category: &str) -> IndexEntry {
    IndexEntry {
        title: title.to_string(),
        content: content.to_string(),
        url: url.to_string(),
        category: category.to_string(),
    }
}

/// The two-page index used throughout the docs and tests.
pub fn sample_entries() -> Vec<IndexEntry> {
    vec![
        make_entry_full(
            "Magik",
            "A story about a magik user. Magik is powerful.",
            "/a",
            "Backstory",
        ),
        make_entry_full("Settlement", "The world state.", "/b", "Setting"),
    ]
}

/// `sample_entries()` as the site build would write it.
pub fn sample_index_json() -> String {
    serde_json::to_string(&sample_entries()).unwrap_or_default()
}

/// Serves a fixed body and counts fetches.
#[derive(Debug, Default)]
pub struct StaticSource {
    body: String,
    fetches: Cell<usize>,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            fetches: Cell::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl IndexSource for StaticSource {
    async fn fetch(&self) -> Result<String, IndexLoadError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        String::from("static test source")
    }
}

/// Always fails like an unreachable server, and counts attempts.
#[derive(Debug, Default)]
pub struct FailingSource {
    fetches: Cell<usize>,
}

impl FailingSource {
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl IndexSource for FailingSource {
    async fn fetch(&self) -> Result<String, IndexLoadError> {
        self.fetches.set(self.fetches.get() + 1);
        Err(IndexLoadError::Http {
            status: 404,
            url: "/search-index.json".to_string(),
        })
    }
}

/// Holds every fetch open until `open()` is called, like a slow network.
#[derive(Debug, Default)]
pub struct GatedSource {
    body: String,
    open: Cell<bool>,
    waiters: RefCell<Vec<Waker>>,
    fetches: Cell<usize>,
}

impl GatedSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Let pending and future fetches complete.
    pub fn open(&self) {
        self.open.set(true);
        for waker in self.waiters.take() {
            waker.wake();
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl IndexSource for GatedSource {
    async fn fetch(&self) -> Result<String, IndexLoadError> {
        self.fetches.set(self.fetches.get() + 1);
        poll_fn(|cx| {
            if self.open.get() {
                Poll::Ready(())
            } else {
                self.waiters.borrow_mut().push(cx.waker().clone());
                Poll::Pending
            }
        })
        .await;
        Ok(self.body.clone())
    }
}

struct Timer {
    id: u64,
    due: u64,
    task: LocalTask,
}

/// Scheduler driven by `advance()` instead of wall-clock time.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl ManualScheduler {
    /// Number of scheduled, not yet fired, tasks.
    pub fn live_count(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Move the clock forward and run every task that came due, in due order.
    pub async fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
        let now = self.now.get();

        let mut due: Vec<Timer> = {
            let mut timers = self.timers.borrow_mut();
            let (due, pending): (Vec<Timer>, Vec<Timer>) =
                timers.drain(..).partition(|t| t.due <= now);
            *timers = pending;
            due
        };
        due.sort_by_key(|t| t.due);

        for timer in due {
            timer.task.await;
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, task: LocalTask) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.timers.borrow_mut().push(Timer {
            id,
            due: self.now.get() + u64::from(delay_ms),
            task,
        });
        id
    }

    fn cancel(&self, handle: u64) {
        self.timers.borrow_mut().retain(|t| t.id != handle);
    }
}

/// Records the last markup shown and whether the container is visible.
#[derive(Debug, Default)]
pub struct RecordingView {
    markup: RefCell<String>,
    visible: Cell<bool>,
    shows: Cell<usize>,
}

impl RecordingView {
    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn show_count(&self) -> usize {
        self.shows.get()
    }
}

impl ResultsView for RecordingView {
    fn show(&self, markup: &str) {
        *self.markup.borrow_mut() = markup.to_string();
        self.visible.set(true);
        self.shows.set(self.shows.get() + 1);
    }

    fn hide(&self) {
        self.markup.borrow_mut().clear();
        self.visible.set(false);
    }
}
