//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use folio::testing::{date, make_post, make_post_on};
use folio::{Corpus, Post, SearchOptions, SearchPage, SearchResult};

pub use folio::testing::{make_post_with_hits, markdown_file};

/// A handful of posts about overlapping topics.
///
/// | slug        | date       | "rust" in title | tags        |
/// |-------------|------------|-----------------|-------------|
/// | rust-async  | 2025-03-01 | yes             | rust, async |
/// | go-vs-rust  | 2025-02-01 | yes             | go          |
/// | cooking     | 2025-01-15 | no              | food        |
/// | rusty-tools | 2024-12-01 | no (body only)  | tools       |
/// | draft-rust  | 2025-04-01 | yes (draft)     | rust        |
pub fn blog_posts() -> Vec<Post> {
    vec![
        make_post_on(
            "rusty-tools",
            "Tools I use",
            date(2024, 12, 1),
            "## Editors\nI write Rust in Helix.\n## Shell\nNothing special.",
        )
        .with_tags(["tools"]),
        make_post_on(
            "cooking",
            "Weekend cooking",
            date(2025, 1, 15),
            "## Bread\nFlour, water, salt.",
        )
        .with_tags(["food"]),
        make_post_on(
            "go-vs-rust",
            "Go vs Rust",
            date(2025, 2, 1),
            "Both are fine.\n## Rust\nOwnership.\n## Go\nGoroutines.",
        )
        .with_tags(["go"]),
        make_post_on(
            "rust-async",
            "Async Rust",
            date(2025, 3, 1),
            "Intro about rust.\n## Executors\nTokio is a rust runtime.\n### Wakers\nPolling.",
        )
        .with_tags(["rust", "async"]),
        make_post_on("draft-rust", "Rust draft", date(2025, 4, 1), "rust rust rust")
            .with_draft(true)
            .with_tags(["rust"]),
    ]
}

pub fn blog() -> Corpus {
    Corpus::new(blog_posts())
}

/// Follow `nextOffset` from 0 until exhausted and collect every page.
pub fn all_pages(corpus: &Corpus, query: &str, occurrence_limit: usize) -> Vec<SearchPage> {
    let mut options = SearchOptions::default().with_occurrence_limit(occurrence_limit);
    let mut pages = Vec::new();
    loop {
        let page = corpus.search(query, options);
        let next = page.next_offset.index();
        let empty = page.results.is_empty();
        pages.push(page);
        match next {
            Some(next) if !empty => options = options.with_offset(next),
            _ => return pages,
        }
    }
}

pub fn result_slugs(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.slug.as_str()).collect()
}

/// Write a post file under `dir`, creating parent directories.
pub fn write_post(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

pub fn simple_post(slug: &str, content: &str) -> Post {
    make_post(slug, slug, "", content)
}
