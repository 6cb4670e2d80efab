// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input controllers: keystrokes in, rendered results out.
//!
//! The controllers know nothing about the DOM. They talk to a [`Scheduler`]
//! for timers and a [`ResultsView`] for output, both of which the browser
//! runtime implements and tests fake.

pub mod debounce;
pub mod field;

pub use debounce::{Debouncer, LocalTask, Scheduler};
pub use field::{FieldState, ResultsView, SearchField};
