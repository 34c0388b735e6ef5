// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-text search over a blog's markdown posts.
//!
//! No index is built. Every query compiles one case-insensitive,
//! word-start-anchored matcher and scans every post, which is plenty fast for a
//! few hundred posts and means nothing can go stale.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  corpus/     │────▶│  search/     │────▶│  api.rs              │
//! │ (loader,     │     │ (rank,       │     │ (SearchRequest,      │
//! │  cache)      │     │  paginate,   │     │  SearchResponse)     │
//! └──────────────┘     │  grouping)   │     └──────────────────────┘
//!                      └──────────────┘
//!                             │
//!        ┌────────────┬───────┴─────┬─────────────┐
//!        ▼            ▼             ▼             ▼
//! ┌────────────┐ ┌──────────┐ ┌───────────┐ ┌────────────┐
//! │ matcher.rs │ │scoring.rs│ │snippets.rs│ │headings.rs │
//! └────────────┘ └──────────┘ └───────────┘ └────────────┘
//!                                   │             │
//!                                   ▼             ▼
//!                            ┌─────────────┐ ┌─────────┐
//!                            │ markdown.rs │ │ slug.rs │
//!                            └─────────────┘ └─────────┘
//! ```
//!
//! # Pagination
//!
//! Pages are sized by occurrences, not posts. A page keeps taking posts until it
//! holds at least `occurrence_limit` matches, and always takes at least one. The
//! cursor is a post index into the ranked list; `-1` on the wire means done.
//!
//! # Usage
//!
//! ```ignore
//! use folio::{Corpus, MarkdownDir, SearchOptions};
//!
//! let corpus = Corpus::load(&MarkdownDir::new("src/content/blog"))?;
//! let page = corpus.search("rust", SearchOptions::default());
//! for result in &page.results {
//!     println!("{} ({} groups)", result.title, result.matches.len());
//! }
//! ```

pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod headings;
pub mod markdown;
pub mod matcher;
pub mod scoring;
pub mod search;
pub mod slug;
pub mod snippets;
pub mod testing;
pub mod types;

pub use api::{handle_search, SearchRequest, SearchResponse};
pub use config::Config;
pub use corpus::{Corpus, CorpusCache, CorpusSource, MarkdownDir, MonthGroup, YearGroup};
pub use error::{Error, Result};
pub use headings::extract_headings;
pub use markdown::{clean_markdown, reading_time};
pub use matcher::{QueryMatcher, MIN_QUERY_LEN};
pub use scoring::{score_post, PostScore};
pub use search::{search, SearchOptions, DEFAULT_OCCURRENCE_LIMIT};
pub use slug::{slugify, Slugger};
pub use snippets::extract_snippets;
pub use types::{
    Heading, NextOffset, Post, SearchHeading, SearchMatchGroup, SearchPage, SearchResult, Snippet,
};
