// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns one entry and a list of terms into a score. `ranking` runs
//! that over the whole index and orders what comes out.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_results, rank};
