// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request/response contract for a search endpoint.
//!
//! Transport is left to the host. A handler deserializes [`SearchRequest`] from
//! whatever it receives (query string, JSON body), calls [`handle_search`], and
//! serializes the [`SearchResponse`]:
//!
//! ```json
//! { "results": [...], "count": 12, "totalArticles": 3, "nextOffset": -1 }
//! ```
//!
//! `count` is the corpus-wide occurrence total, not the number of results on the
//! page. Clients page by sending `offset = nextOffset` until it comes back `-1`.

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::search::{SearchOptions, DEFAULT_OCCURRENCE_LIMIT};
use crate::types::{NextOffset, SearchPage, SearchResult};

fn default_occurrence_limit() -> usize {
    DEFAULT_OCCURRENCE_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_occurrence_limit")]
    pub occurrence_limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        SearchRequest {
            q: q.into(),
            occurrence_limit: DEFAULT_OCCURRENCE_LIMIT,
            offset: 0,
        }
    }

    /// Paging options. A zero limit is raised to one.
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            occurrence_limit: self.occurrence_limit.max(1),
            offset: self.offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    /// Occurrences across the whole corpus.
    pub count: usize,
    pub total_articles: usize,
    pub next_offset: NextOffset,
}

impl From<SearchPage> for SearchResponse {
    fn from(page: SearchPage) -> Self {
        SearchResponse {
            results: page.results,
            count: page.total_occurrences,
            total_articles: page.total_articles,
            next_offset: page.next_offset,
        }
    }
}

pub fn handle_search(corpus: &Corpus, request: &SearchRequest) -> SearchResponse {
    corpus.search(&request.q, request.options()).into()
}
