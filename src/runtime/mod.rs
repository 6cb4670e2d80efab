// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The browser is the only runtime: `wasm` plugs the controllers into the
//! DOM. Built only with the `wasm` feature, so the rest of the crate tests
//! natively.

#[cfg(feature = "wasm")]
pub mod wasm;
