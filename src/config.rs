// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `folio.toml`: where the posts live and how big a page is.
//!
//! ```toml
//! content-dir = "src/content/blog"
//!
//! [search]
//! occurrence-limit = 100
//! ```
//!
//! Every key is optional. A missing file means all defaults; an unknown key is
//! an error so typos do not silently fall back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::search::{SearchOptions, DEFAULT_OCCURRENCE_LIMIT};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Content directory used when the config does not name one.
pub const DEFAULT_CONTENT_DIR: &str = "src/content/blog";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub content_dir: PathBuf,
    pub search: SearchSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchSection {
    pub occurrence_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            search: SearchSection::default(),
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        SearchSection {
            occurrence_limit: DEFAULT_OCCURRENCE_LIMIT,
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, or `folio.toml` in the working directory.
    ///
    /// A missing file yields defaults. Relative `content-dir` values are
    /// resolved against the directory holding the config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let mut config = Self::from_toml(path, &text)?;
        if config.content_dir.is_relative() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                config.content_dir = parent.join(&config.content_dir);
            }
        }
        Ok(config)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default().with_occurrence_limit(self.search.occurrence_limit.max(1))
    }
}
