// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Marking query terms inside displayed text.
//!
//! Terms are applied one at a time, in query order, duplicates included. Each
//! term wraps every case-insensitive, non-overlapping occurrence in
//! `<mark class="search-highlight">`. Terms are regex-escaped first, so `c++`
//! or `(draft)` match literally.
//!
//! Because application is sequential, a later term sees the text an earlier
//! term produced. It rescans the plain text, including text already inside a
//! mark (so "magik agi" nests an "agi" mark inside the "Magik" one), but never
//! the markers themselves: a term like `mark` or `class` can't land inside a
//! tag and break it. Matches also never span a marker boundary.
//!
//! The text itself is emitted as-is. Index content is HTML-derived text and
//! may carry entities, which the browser decodes on insertion.

use crate::query::parse_query;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Opening marker wrapped around each match.
pub const HIGHLIGHT_OPEN: &str = r#"<mark class="search-highlight">"#;

/// Closing marker wrapped around each match.
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Open,
    Close,
}

/// Highlight `query` terms in `text`, returning markup.
///
/// An empty query returns `text` untouched.
///
/// ```ignore
/// assert_eq!(
///     highlight("Magik user", "magik"),
///     r#"<mark class="search-highlight">Magik</mark> user"#,
/// );
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }
    Highlighter::new(query).highlight(text)
}

/// Compiled per-term patterns for one query.
///
/// Renderers highlight a title and a preview for every result; compiling the
/// patterns once per query keeps that to one regex build per term.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let patterns = parse_query(query)
            .iter()
            .filter_map(|term| term_pattern(term))
            .collect();
        Self { patterns }
    }

    /// Number of term patterns that will be applied.
    pub fn term_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn highlight(&self, text: &str) -> String {
        render(&self.pieces(text))
    }

    fn pieces(&self, text: &str) -> Vec<Piece> {
        let mut pieces = vec![Piece::Text(text.to_string())];
        for pattern in &self.patterns {
            pieces = pieces
                .into_iter()
                .flat_map(|piece| match piece {
                    Piece::Text(text) => split_matches(&text, pattern),
                    marker => vec![marker],
                })
                .collect();
        }
        pieces
    }
}

fn term_pattern(term: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .map_err(|e| warn!(term, error = %e, "skipping unhighlightable term"))
        .ok()
}

fn split_matches(text: &str, pattern: &Regex) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if m.start() > last {
            pieces.push(Piece::Text(text[last..m.start()].to_string()));
        }
        pieces.push(Piece::Open);
        pieces.push(Piece::Text(m.as_str().to_string()));
        pieces.push(Piece::Close);
        last = m.end();
    }

    if last < text.len() {
        pieces.push(Piece::Text(text[last..].to_string()));
    }
    pieces
}

fn render(pieces: &[Piece]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Open => out.push_str(HIGHLIGHT_OPEN),
            Piece::Close => out.push_str(HIGHLIGHT_CLOSE),
        }
    }
    out
}

/// Remove highlight markers, recovering the original text.
pub fn strip_highlights(markup: &str) -> String {
    markup.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "")
}
