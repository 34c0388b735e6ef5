// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::corpus::loader::split_frontmatter;
use folio::{
    extract_headings, Config, Corpus, MarkdownDir, NextOffset, QueryMatcher, SearchOptions,
    SearchResponse,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(content) = cli.content {
        config.content_dir = content;
    }

    match cli.command {
        Commands::Search {
            query,
            limit,
            offset,
            all,
            json,
        } => {
            let corpus = load_corpus(&config)?;
            let mut options = config.search_options().with_offset(offset);
            if let Some(limit) = limit {
                options = options.with_occurrence_limit(limit.max(1));
            }
            run_search(&corpus, &query, options, all, json)
        }
        Commands::Tags => {
            let corpus = load_corpus(&config)?;
            print!("{}", display::render_tags(display::use_colors(), &corpus.tags()));
            Ok(())
        }
        Commands::Archive => {
            let corpus = load_corpus(&config)?;
            print!(
                "{}",
                display::render_archive(display::use_colors(), &corpus.archive())
            );
            Ok(())
        }
        Commands::Headings { file } => run_headings(&file),
    }
}

fn load_corpus(config: &Config) -> Result<Corpus> {
    let source = MarkdownDir::new(&config.content_dir);
    Corpus::load(&source)
        .with_context(|| format!("loading posts from {}", config.content_dir.display()))
}

fn run_search(
    corpus: &Corpus,
    query: &str,
    mut options: SearchOptions,
    all: bool,
    json: bool,
) -> Result<()> {
    let colors = !json && display::use_colors();
    let matcher = QueryMatcher::new(query);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut rank = options.offset;

    loop {
        let page = corpus.search(query, options);

        if json {
            let response = SearchResponse::from(page.clone());
            serde_json::to_writer(&mut out, &response).context("writing JSON")?;
            writeln!(out)?;
        } else if let Some(matcher) = &matcher {
            for result in &page.results {
                rank += 1;
                write!(out, "{}", display::render_result(colors, rank, result, matcher))?;
                writeln!(out)?;
            }
        }

        let next = match page.next_offset {
            NextOffset::At(next) if all && !page.results.is_empty() => Some(next),
            _ => None,
        };

        match next {
            Some(next) => options = options.with_offset(next),
            None => {
                if !json {
                    if matcher.is_none() {
                        writeln!(out, "query too short")?;
                    }
                    let summary = display::render_summary(colors, &page);
                    writeln!(out, "{}", display::rule_under(colors, &summary))?;
                    writeln!(out, "{}", summary)?;
                }
                return Ok(());
            }
        }
    }
}

fn run_headings(file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let body = split_frontmatter(&raw).map_or(raw.as_str(), |(_, body)| body);
    print!(
        "{}",
        display::render_toc(display::use_colors(), &extract_headings(body))
    );
    Ok(())
}
