// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippets grouped under the heading they appear below.
//!
//! A snippet belongs to the last heading whose offset is at or before the
//! snippet's match position. Snippets above the first heading go into an
//! ungrouped bucket. A heading whose own text matches the query gets a group
//! even when no snippet falls under it, so a post whose only hit is `## Target`
//! still shows where the hit is.
//!
//! Output order: the ungrouped bucket first (only when it has snippets), then
//! one group per heading in document order.

use crate::headings::extract_headings;
use crate::matcher::QueryMatcher;
use crate::snippets::extract_snippets_with;
use crate::types::{Heading, SearchHeading, SearchMatchGroup, Snippet};

/// Index of the heading that owns a snippet at `idx`, if any.
///
/// Headings come out of the scanner sorted by offset, so this is a binary search.
pub fn owning_heading(headings: &[Heading], idx: usize) -> Option<usize> {
    headings
        .partition_point(|heading| heading.offset <= idx)
        .checked_sub(1)
}

/// Group already extracted snippets under already extracted headings.
pub fn group_snippets(
    headings: &[Heading],
    snippets: Vec<Snippet>,
    matcher: &QueryMatcher,
) -> Vec<SearchMatchGroup> {
    let mut ungrouped = Vec::new();
    let mut by_heading: Vec<Option<Vec<String>>> = headings
        .iter()
        .map(|heading| matcher.is_match(&heading.text).then(Vec::new))
        .collect();

    for snippet in snippets {
        match owning_heading(headings, snippet.idx) {
            Some(i) => by_heading[i].get_or_insert_with(Vec::new).push(snippet.text),
            None => ungrouped.push(snippet.text),
        }
    }

    let mut groups = Vec::new();
    if !ungrouped.is_empty() {
        groups.push(SearchMatchGroup {
            heading: None,
            snippets: ungrouped,
        });
    }

    groups.extend(
        headings
            .iter()
            .zip(by_heading)
            .filter_map(|(heading, snippets)| {
                snippets.map(|snippets| SearchMatchGroup {
                    heading: Some(SearchHeading::from(heading)),
                    snippets,
                })
            }),
    );

    groups
}

/// Headings and snippets for one post body, grouped for display.
pub fn build_match_groups(content: &str, matcher: &QueryMatcher) -> Vec<SearchMatchGroup> {
    let headings = extract_headings(content);
    let snippets = extract_snippets_with(content, matcher);
    group_snippets(&headings, snippets, matcher)
}
