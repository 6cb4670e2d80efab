// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search input wired to its results container.
//!
//! ```text
//!            input (< 2 chars)
//!   ┌──────────────────────────────────┐
//!   ▼                                  │
//! Idle ──input──▶ Pending ──timer──▶ Displayed
//!                  ▲   │                 │
//!                  └───┘ input           │ input
//!                  (re-arm)              ▼
//!                                     Pending
//! ```
//!
//! Every input event cancels the pending timer before deciding anything else,
//! so at most one search per field is ever scheduled. When the timer fires the
//! field loads the index (cached after the first time), ranks it, renders, and
//! hands the markup to its [`ResultsView`].
//!
//! The dropdown variant adds three behaviors the results page doesn't need:
//! eager index load on first focus, dismissal on outside clicks, and Enter to
//! open the top result. While the next search is pending the previous
//! results stay on screen, so dismissal and Enter act on what is visible,
//! not on the state.

use crate::controller::debounce::{Debouncer, Scheduler};
use crate::index::{IndexCache, IndexSource};
use crate::query::is_searchable;
use crate::render::{Layout, Renderer};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use tracing::debug;

/// Where rendered markup goes. The browser implementation writes
/// `innerHTML` and toggles the dropdown's active class.
pub trait ResultsView {
    /// Replace the container content with `markup` and make it visible.
    fn show(&self, markup: &str);

    /// Empty the container and, for the dropdown, hide it.
    fn hide(&self);
}

/// Controller state for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Nothing shown, nothing scheduled.
    Idle,
    /// A debounced search is scheduled or running.
    Pending,
    /// Results (or the no-results hint) are on screen.
    Displayed,
}

/// Controller for a single search input.
pub struct SearchField<S, V, T: Scheduler> {
    cache: Rc<IndexCache<S>>,
    view: V,
    renderer: Renderer,
    limit: usize,
    debouncer: Debouncer<T>,
    state: Cell<FieldState>,
    /// Bumped by every input event; a search only renders if it still matches.
    generation: Cell<u64>,
    /// Dropdown is on screen: shown and not hidden since.
    visible: Cell<bool>,
    first_url: RefCell<Option<String>>,
    primed: Cell<bool>,
}

impl<S, V, T> SearchField<S, V, T>
where
    S: IndexSource + 'static,
    V: ResultsView + 'static,
    T: Scheduler + 'static,
{
    pub fn new(
        cache: Rc<IndexCache<S>>,
        view: V,
        renderer: Renderer,
        limit: usize,
        debouncer: Debouncer<T>,
    ) -> Rc<Self> {
        Rc::new(Self {
            cache,
            view,
            renderer,
            limit,
            debouncer,
            state: Cell::new(FieldState::Idle),
            generation: Cell::new(0),
            visible: Cell::new(false),
            first_url: RefCell::new(None),
            primed: Cell::new(false),
        })
    }

    pub fn state(&self) -> FieldState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn debouncer(&self) -> &Debouncer<T> {
        &self.debouncer
    }

    /// Whether results or a hint are currently on screen.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn is_dropdown(&self) -> bool {
        self.renderer.layout() == Layout::Dropdown
    }

    /// Handle a text change.
    ///
    /// Short input clears immediately; anything else (re)arms the debounce
    /// timer with a search for `text`. Either way, searches started by
    /// earlier input no longer render.
    pub fn on_input(self: &Rc<Self>, text: &str) -> FieldState {
        self.debouncer.cancel();
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        if !is_searchable(text) {
            self.reset();
            return self.state.get();
        }

        let field = Rc::clone(self);
        let query = text.to_string();
        self.debouncer
            .schedule(Box::pin(async move { field.run(generation, &query).await }));
        self.state.set(FieldState::Pending);
        self.state.get()
    }

    /// The debounced search itself: load, rank, render.
    ///
    /// The index load can suspend. If any input arrived in the meantime,
    /// the results belong to an old query and are dropped.
    async fn run(&self, generation: u64, query: &str) {
        self.cache.load().await;
        if self.generation.get() != generation {
            debug!(query, "newer input arrived during load, dropping results");
            return;
        }

        let results = self.cache.search(query, self.limit);
        debug!(query, results = results.len(), "rendering search results");

        let markup = self.renderer.render(&results, query);
        *self.first_url.borrow_mut() = results.first().map(|r| r.entry.url.clone());
        self.view.show(&markup);
        self.visible.set(true);
        self.state.set(FieldState::Displayed);
    }

    fn reset(&self) {
        if self.renderer.layout().toggles_visibility() {
            self.hide();
        } else {
            self.first_url.borrow_mut().take();
            self.view.show(&self.renderer.start_typing());
            self.visible.set(true);
        }
        self.state.set(FieldState::Idle);
    }

    fn hide(&self) {
        self.first_url.borrow_mut().take();
        self.view.hide();
        self.visible.set(false);
    }

    /// First focus of the dropdown input: returns the eager index load to
    /// spawn. Later focuses, and the results page, return `None`.
    pub fn on_focus(&self) -> Option<impl Future<Output = ()> + 'static> {
        if !self.is_dropdown() || self.primed.replace(true) {
            return None;
        }
        let cache = Rc::clone(&self.cache);
        Some(async move {
            cache.load().await;
        })
    }

    /// A click landed outside both the input and the dropdown.
    ///
    /// Hides the dropdown if it is open. A pending search is left alone and
    /// reopens it when it renders.
    pub fn on_outside_click(&self) {
        if !self.is_dropdown() || !self.visible.get() {
            return;
        }
        self.hide();
        if self.state.get() == FieldState::Displayed {
            self.state.set(FieldState::Idle);
        }
    }

    /// Enter pressed in the input: the URL of the first result on screen, if
    /// the dropdown is open and shows one.
    pub fn on_enter(&self) -> Option<String> {
        if !self.is_dropdown() || !self.visible.get() {
            return None;
        }
        self.first_url.borrow().clone()
    }
}
