// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search over blog posts.
//!
//! A [`Post`] is what the corpus loader hands us. Everything else in this file
//! is derived per query and thrown away afterwards: headings, snippets, match
//! groups and the paginated [`SearchPage`].
//!
//! # Offsets
//!
//! Every offset in this crate is a **character** offset (Unicode scalar values),
//! never a byte offset. Snippet windows are measured in characters, and headings
//! are located by the character index of their first marker. Converting to byte
//! positions happens only at the point of slicing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::markdown::reading_time;

// =============================================================================
// POSTS
// =============================================================================

/// One published (or draft) blog post.
///
/// Posts are immutable once built. `slug` is the primary key; the corpus drops
/// later duplicates of a slug it has already seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Insertion order is preserved; may be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    pub pub_datetime: DateTime<Utc>,
    /// Raw, unrendered markdown body (frontmatter already removed).
    pub content: String,
    #[serde(default)]
    pub draft: bool,
    /// Human readable estimate such as "3 min read". Passed through untouched.
    pub reading_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_alt: Option<String>,
}

impl Post {
    /// Build a non-draft post with no tags. Reading time is derived from `content`.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        pub_datetime: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Post {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            pub_datetime,
            reading_time: reading_time(&content),
            content,
            draft: false,
            hero_image: None,
            hero_image_alt: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }
}

// =============================================================================
// HEADINGS
// =============================================================================

/// A level-2 or level-3 heading found in a post body.
///
/// Recomputed on every query. `offset` is the character index of the heading's
/// first character in the content; snippets are assigned to the last heading
/// whose offset is at or before the snippet's match position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub slug: String,
    pub level: u8,
    pub offset: usize,
}

/// The part of a [`Heading`] that goes out in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHeading {
    pub text: String,
    pub slug: String,
    pub level: u8,
}

impl From<&Heading> for SearchHeading {
    fn from(heading: &Heading) -> Self {
        SearchHeading {
            text: heading.text.clone(),
            slug: heading.slug.clone(),
            level: heading.level,
        }
    }
}

// =============================================================================
// SNIPPETS AND MATCH GROUPS
// =============================================================================

/// A cleaned excerpt plus the position of the match that produced it.
///
/// `idx` lives in the coordinate space of the raw content (before markup was
/// stripped), so it can be compared against [`Heading::offset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    pub idx: usize,
}

/// Snippets clustered under the heading that precedes them.
///
/// `heading` is `None` for text that appears before the first heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatchGroup {
    pub heading: Option<SearchHeading>,
    pub snippets: Vec<String>,
}

// =============================================================================
// RESULTS
// =============================================================================

/// One post in a page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub slug: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub matches: Vec<SearchMatchGroup>,
}

/// Where the next page starts.
///
/// Serialized as a plain integer: the post index to pass back as `offset`, or
/// `-1` once every matching post has been returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextOffset {
    /// More posts remain, starting at this index into the ranked list.
    At(usize),
    /// The last matching post has been returned.
    #[default]
    Exhausted,
}

impl NextOffset {
    /// Sentinel used on the wire for [`NextOffset::Exhausted`].
    pub const EXHAUSTED: i64 = -1;

    pub fn as_i64(self) -> i64 {
        match self {
            NextOffset::At(index) => index as i64,
            NextOffset::Exhausted => Self::EXHAUSTED,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            NextOffset::At(index) => Some(index),
            NextOffset::Exhausted => None,
        }
    }

    pub fn from_i64(value: i64) -> Self {
        if value < 0 {
            NextOffset::Exhausted
        } else {
            NextOffset::At(value as usize)
        }
    }
}

impl Serialize for NextOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for NextOffset {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(NextOffset::from_i64)
    }
}

/// A page of search results plus corpus-wide totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    /// Occurrences across every post in the corpus, independent of pagination.
    pub total_occurrences: usize,
    /// Posts with a non-zero score, independent of pagination.
    pub total_articles: usize,
    pub next_offset: NextOffset,
}

impl SearchPage {
    /// The page returned for queries that are too short to run.
    ///
    /// `next_offset` is `0` here rather than exhausted, so a caller that blindly
    /// follows the cursor restarts at the beginning once the query is long enough.
    pub fn empty() -> Self {
        SearchPage {
            results: Vec::new(),
            total_occurrences: 0,
            total_articles: 0,
            next_offset: NextOffset::At(0),
        }
    }
}
