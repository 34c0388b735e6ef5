// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands over one content directory: `search` runs a query (one page,
//! or every page with `--all`), `tags` and `archive` list what is published, and
//! `headings` prints the table of contents of a single file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Full-text search over a directory of markdown blog posts",
    version
)]
pub struct Cli {
    /// Config file (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content directory, overriding `content-dir` from the config
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search published posts
    Search {
        /// Search query (at least 2 characters after trimming)
        query: String,

        /// Occurrence budget for one page, overriding the config
        #[arg(short, long)]
        limit: Option<usize>,

        /// Index of the first post to return (the `nextOffset` of a previous page)
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Follow `nextOffset` until every matching post has been printed
        #[arg(long)]
        all: bool,

        /// Emit the JSON response instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List every tag, sorted
    Tags,

    /// List posts grouped by year and month, newest first
    Archive,

    /// Print the level-2/3 table of contents of a markdown file
    Headings {
        /// Markdown file; frontmatter is skipped when present
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::try_parse_from([
            "folio", "--content", "posts", "search", "rust", "--limit", "5", "--offset", "2",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.content, Some(PathBuf::from("posts")));
        match cli.command {
            Commands::Search {
                query,
                limit,
                offset,
                all,
                json,
            } => {
                assert_eq!(query, "rust");
                assert_eq!(limit, Some(5));
                assert_eq!(offset, 2);
                assert!(!all);
                assert!(json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "tags", "--config", "site.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Commands::Tags));
    }
}
