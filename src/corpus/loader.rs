// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading posts from a directory of markdown files.
//!
//! Layout is free-form: every `*.md` file anywhere under the root is a post, and
//! its file stem is its slug. A file starts with a YAML frontmatter block fenced
//! by `---` lines; everything after the closing fence is the body.
//!
//! ```text
//! ---
//! title: "Hello"
//! description: "First post"
//! pubDatetime: 2024-01-02T10:00:00Z
//! tags: [rust, search]
//! draft: false
//! ---
//! ## Intro
//! ...
//! ```
//!
//! Discovery is sequential (directory walks are I/O bound and cheap). Reading and
//! parsing fan out over rayon when the `parallel` feature is on; the output order
//! matches the walk order either way.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::markdown::reading_time;
use crate::types::Post;

/// Anything that can produce the full list of posts.
///
/// The cache and the CLI only care that posts come from somewhere; tests feed
/// in-memory lists, the binary reads a directory.
pub trait CorpusSource {
    fn load(&self) -> Result<Vec<Post>>;
}

impl CorpusSource for Vec<Post> {
    fn load(&self) -> Result<Vec<Post>> {
        Ok(self.clone())
    }
}

/// Frontmatter fields we understand. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Frontmatter {
    title: String,
    #[serde(default)]
    description: String,
    pub_datetime: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    hero_image: Option<String>,
    #[serde(default)]
    hero_image_alt: Option<String>,
}

/// Split a file into `(yaml, body)`.
///
/// The opening fence must be the first line. Returns `None` when there is no
/// complete frontmatter block.
pub fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let first_line_end = raw.find('\n')?;
    if raw[..first_line_end].trim_end() != "---" {
        return None;
    }

    let yaml_start = first_line_end + 1;
    let mut cursor = yaml_start;
    for line in raw[yaml_start..].split_inclusive('\n') {
        let line_start = cursor;
        cursor += line.len();
        if line.trim_end() == "---" {
            return Some((&raw[yaml_start..line_start], &raw[cursor..]));
        }
    }
    None
}

/// Parse `pubDatetime`.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (optionally with fractional
/// seconds, or a space instead of `T`), or a bare date. Naive values are UTC.
pub fn parse_pub_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Build a post from a file's text. `path` is only used for the slug and errors.
pub fn parse_post(path: &Path, raw: &str) -> Result<Post> {
    let (yaml, body) = split_frontmatter(raw).ok_or_else(|| Error::MissingFrontmatter {
        path: path.to_path_buf(),
    })?;

    let frontmatter: Frontmatter =
        serde_yaml::from_str(yaml).map_err(|source| Error::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    let pub_datetime =
        parse_pub_datetime(&frontmatter.pub_datetime).ok_or_else(|| Error::InvalidDate {
            path: path.to_path_buf(),
            value: frontmatter.pub_datetime.clone(),
        })?;

    let slug = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Post {
        slug,
        title: frontmatter.title,
        description: frontmatter.description,
        tags: frontmatter.tags.unwrap_or_default(),
        pub_datetime,
        reading_time: reading_time(body),
        content: body.to_string(),
        draft: frontmatter.draft,
        hero_image: frontmatter.hero_image,
        hero_image_alt: frontmatter.hero_image_alt,
    })
}

fn load_file(path: &Path) -> Result<Post> {
    let raw = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    parse_post(path, &raw)
}

/// A directory tree of markdown posts.
#[derive(Debug, Clone)]
pub struct MarkdownDir {
    root: PathBuf,
}

impl MarkdownDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MarkdownDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every `*.md` file under the root, sorted by path within each directory.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "content directory missing");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            let is_markdown = entry.path().extension().is_some_and(|ext| ext == "md");
            if entry.file_type().is_file() && is_markdown {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

impl CorpusSource for MarkdownDir {
    /// Load every file, drafts included. Filtering happens in the corpus.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self) -> Result<Vec<Post>> {
        let paths = self.discover()?;

        #[cfg(feature = "parallel")]
        let posts = paths
            .par_iter()
            .map(|path| load_file(path))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let posts = paths
            .iter()
            .map(|path| load_file(path))
            .collect::<Result<Vec<_>>>()?;

        info!(files = posts.len(), "loaded posts");
        Ok(posts)
    }
}
