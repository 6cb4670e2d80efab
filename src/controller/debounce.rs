// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounced, cancellable scheduling.
//!
//! A [`Scheduler`] runs a task after a delay and can cancel it before then.
//! [`Debouncer`] keeps at most one scheduled task alive: scheduling always
//! cancels whatever was pending first, so only the last keystroke's search
//! ever runs.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;

/// A unit of deferred work. Tasks are futures so a fired search can await the
/// index fetch; they run on the UI thread and need not be `Send`.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs tasks after a delay.
///
/// In the browser this is `setTimeout` (`runtime::wasm::TimeoutScheduler`);
/// tests drive a manual clock.
pub trait Scheduler {
    type Handle;

    /// Run `task` once `delay_ms` has elapsed.
    fn schedule(&self, delay_ms: u32, task: LocalTask) -> Self::Handle;

    /// Cancel a task. Cancelling one that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Holds the single pending task for one input field.
pub struct Debouncer<T: Scheduler> {
    scheduler: T,
    delay_ms: u32,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: Scheduler> Debouncer<T> {
    pub fn new(scheduler: T, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Replace any pending task with `task`.
    pub fn schedule(&self, task: LocalTask) {
        self.cancel();
        let handle = self.scheduler.schedule(self.delay_ms, task);
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&self) {
        let handle = self.pending.borrow_mut().take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}
