// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: rank, total, paginate, group.
//!
//! A query runs against the whole corpus every time. There is no index; blogs
//! are small and a linear scan with one compiled regex is fast enough that an
//! index would only add a cache to invalidate.
//!
//! The pipeline:
//!
//! 1. Compile the query. Too short? Return [`SearchPage::empty`].
//! 2. Score every post and sum occurrences over all of them (the totals ignore
//!    pagination).
//! 3. Keep posts with a non-zero score, stable-sorted by score descending. Ties
//!    keep corpus order, which is newest first.
//! 4. Take one page by occurrence budget (see [`paginate`]).
//! 5. Build heading-grouped snippets for just the posts on that page (see
//!    [`grouping`]).

pub mod grouping;
pub mod paginate;

use tracing::{debug, instrument};

use crate::matcher::QueryMatcher;
use crate::scoring::{score_post, PostScore};
use crate::types::{Post, SearchPage, SearchResult};

pub use grouping::build_match_groups;
pub use paginate::{paginate, PageWindow};

/// Default occurrence budget for one page.
pub const DEFAULT_OCCURRENCE_LIMIT: usize = 100;

/// Paging parameters for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop adding posts once this many occurrences are on the page.
    pub occurrence_limit: usize,
    /// Index into the ranked list of matching posts where the page starts.
    pub offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            occurrence_limit: DEFAULT_OCCURRENCE_LIMIT,
            offset: 0,
        }
    }
}

impl SearchOptions {
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_occurrence_limit(mut self, occurrence_limit: usize) -> Self {
        self.occurrence_limit = occurrence_limit;
        self
    }
}

/// A matching post and how it scored.
#[derive(Debug, Clone, Copy)]
pub struct RankedPost<'a> {
    pub post: &'a Post,
    pub score: PostScore,
}

/// Every matching post in rank order, plus the corpus-wide occurrence total.
#[derive(Debug, Clone, Default)]
pub struct Ranking<'a> {
    pub hits: Vec<RankedPost<'a>>,
    pub total_occurrences: usize,
}

/// Score every post and order the matches.
///
/// `sort_by` is stable, so equal scores keep the order of `posts`.
pub fn rank<'a>(posts: &'a [Post], matcher: &QueryMatcher) -> Ranking<'a> {
    let mut total_occurrences = 0;
    let mut hits: Vec<RankedPost<'a>> = posts
        .iter()
        .filter_map(|post| {
            let score = score_post(post, matcher);
            total_occurrences += score.occurrences;
            score.is_match().then_some(RankedPost { post, score })
        })
        .collect();

    hits.sort_by(|a, b| b.score.score.cmp(&a.score.score));

    Ranking {
        hits,
        total_occurrences,
    }
}

fn to_result(post: &Post, matcher: &QueryMatcher) -> SearchResult {
    SearchResult {
        slug: post.slug.clone(),
        title: post.title.clone(),
        date: post.pub_datetime,
        reading_time: post.reading_time.clone(),
        tags: post.tags.clone(),
        matches: build_match_groups(&post.content, matcher),
    }
}

/// Run one query over `posts` and return one page.
///
/// `posts` is taken as given: callers that hold drafts must filter them first
/// (the [`Corpus`](crate::corpus::Corpus) already does).
#[instrument(level = "debug", skip(posts), fields(posts = posts.len()))]
pub fn search(posts: &[Post], query: &str, options: SearchOptions) -> SearchPage {
    let Some(matcher) = QueryMatcher::new(query) else {
        debug!("query too short, returning empty page");
        return SearchPage::empty();
    };

    let ranking = rank(posts, &matcher);
    let occurrences: Vec<usize> = ranking
        .hits
        .iter()
        .map(|hit| hit.score.occurrences)
        .collect();
    let window = paginate(&occurrences, options.offset, options.occurrence_limit);

    let results: Vec<SearchResult> = ranking.hits[window.range.clone()]
        .iter()
        .map(|hit| to_result(hit.post, &matcher))
        .collect();

    debug!(
        total_articles = ranking.hits.len(),
        total_occurrences = ranking.total_occurrences,
        returned = results.len(),
        next_offset = window.next_offset.as_i64(),
        "search complete"
    );

    SearchPage {
        results,
        total_occurrences: ranking.total_occurrences,
        total_articles: ranking.hits.len(),
        next_offset: window.next_offset,
    }
}
