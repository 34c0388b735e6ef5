// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence-budgeted pagination.
//!
//! A page is not a fixed number of posts. Starting at the requested post index,
//! posts are added one at a time and their occurrence counts summed; the page
//! closes as soon as the sum reaches the budget. The check happens after each
//! post is added, so the first post always makes it in even if it alone blows
//! the budget, and a post is never split across pages.

use std::ops::Range;

use crate::types::NextOffset;

/// One page worth of the ranked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Indices into the ranked list included in this page.
    pub range: Range<usize>,
    pub next_offset: NextOffset,
}

/// Choose the posts for one page.
///
/// `occurrences[i]` is the occurrence count of the i-th ranked post. An `offset`
/// at or past the end yields an empty page that reports exhaustion.
pub fn paginate(occurrences: &[usize], offset: usize, occurrence_limit: usize) -> PageWindow {
    let len = occurrences.len();
    let mut end = offset;
    let mut batch = 0usize;

    for (i, count) in occurrences.iter().enumerate().skip(offset) {
        batch += count;
        end = i + 1;
        if batch >= occurrence_limit {
            break;
        }
    }

    if end >= len {
        return PageWindow {
            range: offset.min(len)..len,
            next_offset: NextOffset::Exhausted,
        };
    }

    PageWindow {
        range: offset..end,
        next_offset: NextOffset::At(end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_post_always_included() {
        let page = paginate(&[4, 4], 0, 2);
        assert_eq!(page.range, 0..1);
        assert_eq!(page.next_offset, NextOffset::At(1));

        let page = paginate(&[4, 4], 1, 2);
        assert_eq!(page.range, 1..2);
        assert_eq!(page.next_offset, NextOffset::Exhausted);
    }

    #[test]
    fn test_accumulates_until_budget_reached() {
        let page = paginate(&[1, 1, 1, 5, 1], 0, 3);
        assert_eq!(page.range, 0..3);
        assert_eq!(page.next_offset, NextOffset::At(3));

        let page = paginate(&[1, 1, 1, 5, 1], 3, 3);
        assert_eq!(page.range, 3..4);
        assert_eq!(page.next_offset, NextOffset::At(4));
    }

    #[test]
    fn test_everything_fits() {
        let page = paginate(&[1, 2, 3], 0, 100);
        assert_eq!(page.range, 0..3);
        assert_eq!(page.next_offset, NextOffset::Exhausted);
    }

    #[test]
    fn test_budget_hit_exactly_on_last_post() {
        let page = paginate(&[2, 2], 0, 4);
        assert_eq!(page.range, 0..2);
        assert_eq!(page.next_offset, NextOffset::Exhausted);
    }

    #[test]
    fn test_offset_past_end() {
        let page = paginate(&[1, 2], 5, 10);
        assert!(page.range.is_empty());
        assert_eq!(page.next_offset, NextOffset::Exhausted);
    }

    #[test]
    fn test_empty_list() {
        let page = paginate(&[], 0, 10);
        assert!(page.range.is_empty());
        assert_eq!(page.next_offset, NextOffset::Exhausted);
    }

    #[test]
    fn test_zero_budget_gives_one_post_per_page() {
        let page = paginate(&[3, 3, 3], 1, 0);
        assert_eq!(page.range, 1..2);
        assert_eq!(page.next_offset, NextOffset::At(2));
    }
}
