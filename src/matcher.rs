// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one matching predicate used everywhere.
//!
//! A query matches at position `i` when the text starting at `i` equals the
//! query ignoring case, and `i` sits on a word boundary. Only the start is
//! anchored: "post" matches "postgres" but not "signpost".
//!
//! Regex metacharacters in the query are escaped, so `c++` and `a.b` are literal.
//! Each scan owns its iterator; a `QueryMatcher` carries no cursor state and can
//! be shared freely.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// Queries shorter than this (after trimming) never run.
pub const MIN_QUERY_LEN: usize = 2;

/// Compiled form of a user query.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    query_len: usize,
    regex: Regex,
}

impl QueryMatcher {
    /// Compile a query, or `None` if it is too short to search for.
    ///
    /// The query is trimmed first. A query that the regex engine refuses (only
    /// possible for enormous inputs) is treated the same as a too-short one.
    pub fn new(query: &str) -> Option<Self> {
        let query = query.trim();
        let query_len = query.chars().count();
        if query_len < MIN_QUERY_LEN {
            return None;
        }

        let pattern = format!(r"\b{}", regex::escape(query));
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .ok()?;

        Some(QueryMatcher {
            query: query.to_string(),
            query_len,
            regex,
        })
    }

    /// The trimmed query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Length of the trimmed query in characters.
    pub fn query_len(&self) -> usize {
        self.query_len
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Byte ranges of every non-overlapping occurrence, for slicing `text`.
    pub fn byte_ranges(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|found| found.range()).collect()
    }

    /// Character offsets of every non-overlapping occurrence, in order.
    pub fn positions(&self, text: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for found in self.regex.find_iter(text) {
            char_cursor += text[byte_cursor..found.start()].chars().count();
            byte_cursor = found.start();
            positions.push(char_cursor);
        }

        positions
    }
}
