// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::types::Post;

/// Midnight UTC on the given day.
///
/// Panics on an impossible date, which is fine for fixtures.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

/// A published post dated 2026-01-01 with no tags.
pub fn make_post(slug: &str, title: &str, description: &str, content: &str) -> Post {
    Post::new(slug, title, description, date(2026, 1, 1), content)
}

/// A published post on a specific day.
pub fn make_post_on(slug: &str, title: &str, when: DateTime<Utc>, content: &str) -> Post {
    Post::new(slug, title, "", when, content)
}

/// A post whose body mentions `word` exactly `count` times, spaced far enough
/// apart that each mention gets its own snippet.
pub fn make_post_with_hits(slug: &str, word: &str, count: usize) -> Post {
    let separator = format!(" {}", "lorem ".repeat(40));
    let body = vec![word; count].join(separator.as_str());
    make_post(slug, &format!("Post {slug}"), "", &body)
}

/// Render a markdown file with YAML frontmatter, as the loader expects it.
pub fn markdown_file(title: &str, date: &str, tags: &[&str], draft: bool, body: &str) -> String {
    let tags = tags
        .iter()
        .map(|tag| format!("  - {tag}\n"))
        .collect::<String>();
    format!(
        "---\ntitle: \"{title}\"\ndescription: \"About {title}\"\npubDatetime: {date}\ndraft: {draft}\ntags:\n{tags}---\n{body}"
    )
}
