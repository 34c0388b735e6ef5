// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How a post earns its place in the ranking.
//!
//! Each field contributes its weight once if the query occurs in it at all,
//! no matter how many times. Weights are additive:
//!
//! | Field       | Weight |
//! |-------------|--------|
//! | Title       | 4      |
//! | Description | 3      |
//! | Tags (any)  | 2      |
//! | Content     | 1      |
//!
//! So a post that mentions the query in its title and body (5) outranks one that
//! mentions it only in its description (3), and a hundred body mentions never
//! beat a single title hit.
//!
//! Occurrence counts are tracked separately. They play no part in ranking; the
//! search engine spends them against the per-page occurrence budget.

use serde::{Deserialize, Serialize};

use crate::matcher::QueryMatcher;
use crate::types::Post;

/// Weight of a title hit.
pub const TITLE_WEIGHT: u32 = 4;

/// Weight of a description hit.
pub const DESCRIPTION_WEIGHT: u32 = 3;

/// Weight of a hit in any tag.
pub const TAG_WEIGHT: u32 = 2;

/// Weight of one or more hits in the body.
pub const CONTENT_WEIGHT: u32 = 1;

/// Searchable fields of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Tags,
    Content,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Tags, Field::Content];

    pub fn weight(self) -> u32 {
        match self {
            Field::Title => TITLE_WEIGHT,
            Field::Description => DESCRIPTION_WEIGHT,
            Field::Tags => TAG_WEIGHT,
            Field::Content => CONTENT_WEIGHT,
        }
    }
}

/// Relevance of one post for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostScore {
    /// Sum of the weights of every field that matched. Zero means no match.
    pub score: u32,
    /// Literal occurrences across title, description, every tag and content.
    pub occurrences: usize,
}

impl PostScore {
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Occurrences of the query in a single field.
pub fn field_occurrences(post: &Post, field: Field, matcher: &QueryMatcher) -> usize {
    match field {
        Field::Title => matcher.count(&post.title),
        Field::Description => matcher.count(&post.description),
        Field::Tags => post.tags.iter().map(|tag| matcher.count(tag)).sum(),
        Field::Content => matcher.count(&post.content),
    }
}

/// Score a post against a compiled query.
pub fn score_post(post: &Post, matcher: &QueryMatcher) -> PostScore {
    Field::ALL
        .iter()
        .fold(PostScore::default(), |mut acc, &field| {
            let hits = field_occurrences(post, field, matcher);
            if hits > 0 {
                acc.score += field.weight();
                acc.occurrences += hits;
            }
            acc
        })
}
