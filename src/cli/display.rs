// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the folio CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `FOLIO_THEME` first, then `COLORFGBG`, then falls back to dark. `NO_COLOR` and
//! a non-TTY stdout turn color off entirely, so piping into `less` or a file
//! gives plain text.
//!
//! Every `render_*` function returns a `String` and takes a `colors` flag, so
//! output can be tested without a terminal.

use std::sync::OnceLock;

use folio::{MonthGroup, QueryMatcher, SearchMatchGroup, SearchPage, SearchResult, YearGroup};
use folio::{Heading, NextOffset};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Roles rather than hues, so the palettes stay swappable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Heading,
    Highlight,
    Muted,
    Accent,
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn palette(theme: Theme, role: Role) -> (u8, u8, u8) {
    match (theme, role) {
        (Theme::Dark, Role::Title) => (102, 217, 239),     // bright cyan
        (Theme::Dark, Role::Heading) => (97, 175, 239),    // #61afef
        (Theme::Dark, Role::Highlight) => (229, 192, 123), // #e5c07b
        (Theme::Dark, Role::Muted) => (92, 99, 112),       // #5c6370
        (Theme::Dark, Role::Accent) => (198, 120, 221),    // #c678dd
        (Theme::Light, Role::Title) => (1, 112, 158),
        (Theme::Light, Role::Heading) => (64, 120, 242),   // #4078f2
        (Theme::Light, Role::Highlight) => (193, 132, 1),  // #c18401
        (Theme::Light, Role::Muted) => (160, 161, 167),    // #a0a1a7
        (Theme::Light, Role::Accent) => (166, 38, 164),    // #a626a4
    }
}

/// Whether stdout should get escape codes.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in the role's color plus extra modifiers, or return it as-is.
pub fn paint(colors: bool, role: Role, modifiers: &[&str], text: &str) -> String {
    if !colors {
        return text.to_string();
    }
    format!(
        "{}{}{}{}",
        rgb(palette(theme(), role)),
        modifiers.concat(),
        text,
        RESET
    )
}

/// Length of `s` as it appears on screen (escape sequences excluded).
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => len += 1,
        }
    }
    len
}

/// A horizontal rule as wide as `above` appears on screen.
pub fn rule_under(colors: bool, above: &str) -> String {
    paint(colors, Role::Muted, &[], &"─".repeat(visible_len(above)))
}

/// Emphasize every occurrence of the query in a snippet.
pub fn highlight(colors: bool, text: &str, matcher: &QueryMatcher) -> String {
    if !colors {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in matcher.byte_ranges(text) {
        out.push_str(&text[cursor..range.start]);
        out.push_str(&paint(true, Role::Highlight, &[BOLD], &text[range.clone()]));
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn render_group(colors: bool, group: &SearchMatchGroup, matcher: &QueryMatcher) -> String {
    let mut out = String::new();
    if let Some(heading) = &group.heading {
        let marker = "#".repeat(heading.level as usize);
        let label = format!("{} {}", marker, heading.text);
        out.push_str(&format!(
            "    {} {}\n",
            paint(colors, Role::Heading, &[], &label),
            paint(colors, Role::Muted, &[], &format!("#{}", heading.slug))
        ));
    }
    for snippet in &group.snippets {
        out.push_str(&format!("      {}\n", highlight(colors, snippet, matcher)));
    }
    out
}

pub fn render_result(
    colors: bool,
    rank: usize,
    result: &SearchResult,
    matcher: &QueryMatcher,
) -> String {
    let mut out = format!(
        "{:>3}. {}  {}\n",
        rank,
        paint(colors, Role::Title, &[BOLD], &result.title),
        paint(colors, Role::Muted, &[], &format!("/posts/{}", result.slug))
    );

    let mut meta = vec![
        result.date.format("%Y-%m-%d").to_string(),
        result.reading_time.clone(),
    ];
    if !result.tags.is_empty() {
        meta.push(result.tags.join(", "));
    }
    out.push_str(&format!(
        "     {}\n",
        paint(colors, Role::Muted, &[DIM], &meta.join(" · "))
    ));

    for group in &result.matches {
        out.push_str(&render_group(colors, group, matcher));
    }
    out
}

/// Footer line with corpus totals and the cursor for the next page.
pub fn render_summary(colors: bool, page: &SearchPage) -> String {
    let next = match page.next_offset {
        NextOffset::At(offset) => format!("more with --offset {}", offset),
        NextOffset::Exhausted => "end of results".to_string(),
    };
    let text = format!(
        "{} occurrence{} in {} post{} · {}",
        page.total_occurrences,
        if page.total_occurrences == 1 { "" } else { "s" },
        page.total_articles,
        if page.total_articles == 1 { "" } else { "s" },
        next
    );
    paint(colors, Role::Accent, &[], &text)
}

pub fn render_tags(colors: bool, tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| format!("{}\n", paint(colors, Role::Accent, &[], &format!("#{}", tag))))
        .collect()
}

fn render_month(colors: bool, month: &MonthGroup<'_>) -> String {
    let mut out = format!(
        "  {}\n",
        paint(colors, Role::Heading, &[], month.month)
    );
    for post in &month.posts {
        out.push_str(&format!(
            "    {}  {}\n",
            paint(colors, Role::Muted, &[], &post.pub_datetime.format("%d").to_string()),
            post.title
        ));
    }
    out
}

pub fn render_archive(colors: bool, years: &[YearGroup<'_>]) -> String {
    let mut out = String::new();
    for year in years {
        out.push_str(&format!(
            "{}\n",
            paint(colors, Role::Title, &[BOLD], &year.year.to_string())
        ));
        for month in &year.months {
            out.push_str(&render_month(colors, month));
        }
    }
    out
}

/// Indented table of contents: level-3 entries nest under level-2.
pub fn render_toc(colors: bool, headings: &[Heading]) -> String {
    headings
        .iter()
        .map(|heading| {
            let indent = if heading.level == 3 { "  " } else { "" };
            format!(
                "{}- {} {}\n",
                indent,
                heading.text,
                paint(colors, Role::Muted, &[], &format!("(#{})", heading.slug))
            )
        })
        .collect()
}
