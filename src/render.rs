// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked results into markup.
//!
//! Rendering is a pure function from results to an HTML string. Writing that
//! string into the page is the DOM adapter's job (`runtime::wasm`), so all of
//! this runs in native tests.
//!
//! Two layouts share one renderer:
//!
//! | Layout     | Container                   | Preview | Item markup            |
//! |------------|-----------------------------|---------|------------------------|
//! | `Dropdown` | `#search-results`           | 150     | `a.search-result-item` |
//! | `Page`     | `#search-results-container` | 300     | `div.search-result-card` |
//!
//! Titles and previews are highlighted; URLs and category labels are escaped.

use crate::config::{FieldConfig, Messages};
use crate::highlight::Highlighter;
use crate::types::ScoredResult;

/// Appended to every preview, truncated or not.
pub const ELLIPSIS: &str = "...";

/// Which markup a renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Header quick-search dropdown
    Dropdown,
    /// Dedicated search results page
    Page,
}

impl Layout {
    /// Whether the container's visibility class follows its content.
    ///
    /// The dropdown is hidden until there's something to show; the results
    /// page container is always visible.
    pub fn toggles_visibility(self) -> bool {
        matches!(self, Layout::Dropdown)
    }
}

/// Renders results for one layout.
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: Layout,
    preview_chars: usize,
    no_results: String,
    start_typing: String,
}

impl Renderer {
    pub fn new(layout: Layout, preview_chars: usize, messages: &Messages) -> Self {
        Self {
            layout,
            preview_chars,
            no_results: messages.no_results.clone(),
            start_typing: messages.start_typing.clone(),
        }
    }

    /// Dropdown renderer with the field's preview length.
    pub fn quick(field: &FieldConfig, messages: &Messages) -> Self {
        Self::new(Layout::Dropdown, field.preview_chars, messages)
    }

    /// Results-page renderer with the field's preview length.
    pub fn full(field: &FieldConfig, messages: &Messages) -> Self {
        Self::new(Layout::Page, field.preview_chars, messages)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Render `results` for `query`. Replaces, never appends: the output is
    /// the container's entire new content.
    pub fn render(&self, results: &[ScoredResult], query: &str) -> String {
        if results.is_empty() {
            return self.hint(&self.no_results);
        }

        let highlighter = Highlighter::new(query);
        results
            .iter()
            .map(|result| self.render_item(result, &highlighter))
            .collect()
    }

    /// The "start typing" placeholder shown on the results page for short input.
    pub fn start_typing(&self) -> String {
        self.hint(&self.start_typing)
    }

    fn hint(&self, message: &str) -> String {
        match self.layout {
            Layout::Dropdown => format!(r#"<div class="search-hint">{}</div>"#, escape_html(message)),
            Layout::Page => format!(r#"<p class="search-hint">{}</p>"#, escape_html(message)),
        }
    }

    fn render_item(&self, result: &ScoredResult, highlighter: &Highlighter) -> String {
        let entry = &result.entry;
        let title = highlighter.highlight(&entry.title);
        let preview = highlighter.highlight(&preview(&entry.content, self.preview_chars));
        let url = escape_html(&entry.url);
        let category = escape_html(&entry.category);

        match self.layout {
            Layout::Dropdown => format!(
                concat!(
                    r#"<a href="{url}" class="search-result-item">"#,
                    r#"<div class="search-result-title">{title}</div>"#,
                    r#"<div class="search-result-preview">{preview}</div>"#,
                    r#"<div class="search-result-category">{category}</div>"#,
                    "</a>"
                ),
                url = url,
                title = title,
                preview = preview,
                category = category,
            ),
            Layout::Page => format!(
                concat!(
                    r#"<div class="search-result-card">"#,
                    r#"<h3 class="search-result-title"><a href="{url}">{title}</a></h3>"#,
                    r#"<p class="search-result-preview">{preview}</p>"#,
                    r#"<div class="search-result-meta">"#,
                    r#"<span class="search-result-category">{category}</span>"#,
                    "</div>",
                    "</div>"
                ),
                url = url,
                title = title,
                preview = preview,
                category = category,
            ),
        }
    }
}

/// First `max_chars` characters of `content` followed by the ellipsis.
pub fn preview(content: &str, max_chars: usize) -> String {
    let end = content
        .char_indices()
        .nth(max_chars)
        .map_or(content.len(), |(i, _)| i);
    format!("{}{}", &content[..end], ELLIPSIS)
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
