// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contextual excerpts around query matches.
//!
//! Every occurrence of the query gets a window of [`CONTEXT_BEFORE`] characters
//! before and [`CONTEXT_AFTER`] characters after the match, clamped to the
//! content. Windows are accepted greedily left to right: an occurrence whose
//! window starts at or before the end of the previously accepted window is
//! dropped, not merged. So two matches a few words apart produce one snippet.
//!
//! The excerpt is cut from the raw markdown and then cleaned, with `…` marking
//! either side that was truncated. The match position (`idx`) stays in raw
//! content coordinates so it can be compared with heading offsets.

use std::ops::Range;

use crate::markdown::clean_markdown;
use crate::matcher::QueryMatcher;
use crate::types::Snippet;

/// Characters of context kept before a match.
pub const CONTEXT_BEFORE: usize = 60;

/// Characters of context kept after the end of a match.
pub const CONTEXT_AFTER: usize = 90;

/// Characters shown when nothing in the content matches.
pub const FALLBACK_LEN: usize = 150;

/// Marker for a truncated side of a snippet.
pub const ELLIPSIS: char = '…';

/// The window `[idx - 60, idx + query_len + 90)` clamped to `[0, content_len]`.
pub fn snippet_window(idx: usize, query_len: usize, content_len: usize) -> Range<usize> {
    let start = idx.saturating_sub(CONTEXT_BEFORE);
    let end = content_len.min(idx + query_len + CONTEXT_AFTER);
    start..end
}

/// Character index → byte index lookup for slicing by characters.
struct CharBoundaries {
    bytes: Vec<usize>,
}

impl CharBoundaries {
    fn new(text: &str) -> Self {
        let bytes = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()))
            .collect();
        CharBoundaries { bytes }
    }

    fn char_len(&self) -> usize {
        self.bytes.len() - 1
    }

    fn slice<'a>(&self, text: &'a str, range: Range<usize>) -> &'a str {
        &text[self.bytes[range.start]..self.bytes[range.end]]
    }
}

/// Extract snippets for a raw query string.
///
/// A query too short to search for matches nothing, so the result is the
/// fallback excerpt.
pub fn extract_snippets(content: &str, query: &str) -> Vec<Snippet> {
    match QueryMatcher::new(query) {
        Some(matcher) => extract_snippets_with(content, &matcher),
        None => fallback(content),
    }
}

/// Extract every non-overlapping snippet for a compiled query.
///
/// Returns an empty list only for empty content. Content with no match yields a
/// single snippet made of the first [`FALLBACK_LEN`] characters, with `idx = 0`.
pub fn extract_snippets_with(content: &str, matcher: &QueryMatcher) -> Vec<Snippet> {
    if content.is_empty() {
        return Vec::new();
    }

    let chars = CharBoundaries::new(content);
    let total = chars.char_len();
    let mut snippets = Vec::new();
    let mut last_end: Option<usize> = None;

    for idx in matcher.positions(content) {
        let window = snippet_window(idx, matcher.query_len(), total);
        if last_end.is_some_and(|end| window.start <= end) {
            continue;
        }

        let mut raw = String::new();
        if window.start > 0 {
            raw.push(ELLIPSIS);
        }
        raw.push_str(chars.slice(content, window.clone()));
        if window.end < total {
            raw.push(ELLIPSIS);
        }

        snippets.push(Snippet {
            text: clean_markdown(&raw),
            idx,
        });
        last_end = Some(window.end);
    }

    if snippets.is_empty() {
        return fallback(content);
    }
    snippets
}

fn fallback(content: &str) -> Vec<Snippet> {
    if content.is_empty() {
        return Vec::new();
    }
    let chars = CharBoundaries::new(content);
    let end = chars.char_len().min(FALLBACK_LEN);
    vec![Snippet {
        text: clean_markdown(chars.slice(content, 0..end)),
        idx: 0,
    }]
}
