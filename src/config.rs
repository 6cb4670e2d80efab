// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration passed from the page.
//!
//! Every field has a default matching the wiki templates, so the page can pass
//! nothing at all, or only the parts it wants to change:
//!
//! ```js
//! const search = new WikiSearch({ debounceMs: 200, full: { limit: 50 } });
//! ```

use serde::Deserialize;

/// Where the site build writes the index.
pub const DEFAULT_INDEX_URL: &str = "/search-index.json";

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Top-level configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// URL of the JSON index (default: `/search-index.json`)
    pub index_url: String,
    /// Debounce delay in milliseconds (default: 300)
    pub debounce_ms: u32,
    /// Header quick-search dropdown
    pub quick: FieldConfig,
    /// Dedicated search page
    pub full: FieldConfig,
    /// Class toggled on the dropdown while it shows results (default: `active`)
    pub active_class: String,
    /// User-facing strings
    pub messages: Messages,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            quick: FieldConfig::quick(),
            full: FieldConfig::full(),
            active_class: "active".to_string(),
            messages: Messages::default(),
        }
    }
}

/// One search input and the container its results render into.
///
/// A partially specified field keeps the remaining values of the variant it
/// overrides, e.g. `{ full: { limit: 50 } }` still renders into
/// `#search-results-container`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub input_id: String,
    pub results_id: String,
    /// Maximum results rendered
    pub limit: usize,
    /// Characters of content shown before the ellipsis
    pub preview_chars: usize,
}

impl FieldConfig {
    /// Header dropdown: 5 results, 150-character previews.
    pub fn quick() -> Self {
        Self {
            input_id: "quick-search".to_string(),
            results_id: "search-results".to_string(),
            limit: 5,
            preview_chars: 150,
        }
    }

    /// Search page: 20 results, 300-character previews.
    pub fn full() -> Self {
        Self {
            input_id: "search-input".to_string(),
            results_id: "search-results-container".to_string(),
            limit: 20,
            preview_chars: 300,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldOverrides {
    input_id: Option<String>,
    results_id: Option<String>,
    limit: Option<usize>,
    preview_chars: Option<usize>,
}

impl FieldOverrides {
    fn apply(self, base: FieldConfig) -> FieldConfig {
        FieldConfig {
            input_id: self.input_id.unwrap_or(base.input_id),
            results_id: self.results_id.unwrap_or(base.results_id),
            limit: self.limit.unwrap_or(base.limit),
            preview_chars: self.preview_chars.unwrap_or(base.preview_chars),
        }
    }
}

/// Placeholder text shown instead of results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    /// Shown when a search matched nothing (default: "Ничего не найдено")
    pub no_results: String,
    /// Shown on the search page before two characters are typed
    /// (default: "Начните вводить для поиска")
    pub start_typing: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_results: "Ничего не найдено".to_string(),
            start_typing: "Начните вводить для поиска".to_string(),
        }
    }
}

// `quick` and `full` default to different values, so a plain `#[serde(default)]`
// on FieldConfig can't know which base to fill gaps from.
impl<'de> Deserialize<'de> for SearchConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        struct Raw {
            index_url: Option<String>,
            debounce_ms: Option<u32>,
            quick: FieldOverrides,
            full: FieldOverrides,
            active_class: Option<String>,
            messages: Messages,
        }

        let raw = Raw::deserialize(deserializer)?;
        let defaults = SearchConfig::default();
        Ok(SearchConfig {
            index_url: raw.index_url.unwrap_or(defaults.index_url),
            debounce_ms: raw.debounce_ms.unwrap_or(defaults.debounce_ms),
            quick: raw.quick.apply(defaults.quick),
            full: raw.full.apply(defaults.full),
            active_class: raw.active_class.unwrap_or(defaults.active_class),
            messages: raw.messages,
        })
    }
}
