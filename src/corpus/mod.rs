// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The set of published posts and the questions a blog asks of it.
//!
//! A [`Corpus`] is built once from whatever a [`CorpusSource`] returns and then
//! only read. Construction enforces three things:
//!
//! - drafts are gone,
//! - slugs are unique (the first post with a slug wins, later ones are logged
//!   and dropped),
//! - posts are ordered by publication date, newest first. The sort is stable,
//!   so posts published at the same instant keep their load order.
//!
//! Search result order depends on that last point: equal scores fall back to
//! corpus order.

pub mod cache;
pub mod loader;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::Datelike;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::search::{search, SearchOptions};
use crate::types::{Post, SearchPage};

pub use cache::CorpusCache;
pub use loader::{CorpusSource, MarkdownDir};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Posts published in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGroup<'a> {
    /// English month name, e.g. "March".
    pub month: &'static str,
    /// 1 for January through 12 for December.
    pub month_number: u32,
    pub posts: Vec<&'a Post>,
}

/// Posts published in one year, months newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub months: Vec<MonthGroup<'a>>,
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    posts: Vec<Post>,
}

impl Corpus {
    pub fn new(posts: Vec<Post>) -> Self {
        let mut seen = HashSet::new();
        let mut posts: Vec<Post> = posts
            .into_iter()
            .filter(|post| !post.draft)
            .filter(|post| {
                let fresh = seen.insert(post.slug.clone());
                if !fresh {
                    warn!(slug = %post.slug, "duplicate slug, keeping the first post");
                }
                fresh
            })
            .collect();

        posts.sort_by(|a, b| b.pub_datetime.cmp(&a.pub_datetime));
        Corpus { posts }
    }

    /// Load from a source and build.
    pub fn load(source: &impl CorpusSource) -> Result<Self> {
        source.load().map(Corpus::new)
    }

    /// Published posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Every tag used by a published post, deduplicated and sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.posts
            .iter()
            .flat_map(|post| post.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Posts carrying exactly this tag, newest first.
    pub fn posts_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts
            .iter()
            .filter(move |post| post.tags.iter().any(|t| t == tag))
    }

    /// Posts grouped by year, then month, both newest first.
    pub fn archive(&self) -> Vec<YearGroup<'_>> {
        let mut grouped: BTreeMap<i32, BTreeMap<u32, Vec<&Post>>> = BTreeMap::new();
        for post in &self.posts {
            let date = post.pub_datetime;
            grouped
                .entry(date.year())
                .or_default()
                .entry(date.month())
                .or_default()
                .push(post);
        }

        grouped
            .into_iter()
            .rev()
            .map(|(year, months)| YearGroup {
                year,
                months: months
                    .into_iter()
                    .rev()
                    .map(|(month_number, posts)| MonthGroup {
                        month: MONTH_NAMES[month_number as usize - 1],
                        month_number,
                        posts,
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn search(&self, query: &str, options: SearchOptions) -> SearchPage {
        search(&self.posts, query, options)
    }
}
