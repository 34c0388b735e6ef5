// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Level-2 and level-3 headings, found with a line scanner.
//!
//! Headings serve two purposes during a search: snippets are grouped under the
//! nearest heading above them, and a heading whose own text matches the query is
//! reported even when no snippet lands under it. The same list is the post's
//! table of contents.
//!
//! We do not build a markdown tree. A single pass over lines recognises:
//!
//! - ATX headings: up to three spaces, then `##` or `###`, then a space, tab or
//!   end of line. An optional closing run of `#` is dropped.
//! - Setext headings: a paragraph followed by a line of `-` is level 2. A line of
//!   `=` makes level 1 and is ignored like any other level-1 heading.
//! - Fenced code blocks (``` or ~~~) are skipped, so `## not a heading` inside a
//!   code sample stays invisible.
//! - Blockquote markers are peeled off first, so `> ## Tip` is a heading. A
//!   paragraph only becomes a setext heading when its underline sits at the same
//!   quote depth.
//! - List items, blockquotes and thematic breaks interrupt a paragraph instead of
//!   extending it.
//!
//! Levels 1 and 4-6 are recognised (they end a paragraph) but never returned.

use crate::markdown::strip_inline;
use crate::slug::Slugger;
use crate::types::Heading;

/// A paragraph that might still turn into a setext heading.
struct OpenParagraph {
    offset: usize,
    depth: usize,
    lines: Vec<String>,
}

/// An open code fence: marker character, run length and quote depth.
struct Fence {
    marker: char,
    len: usize,
    depth: usize,
}

/// Peel leading `>` markers. Returns `(depth, chars consumed, rest)`.
fn strip_quote(line: &str) -> (usize, usize, &str) {
    let mut depth = 0;
    let mut rest = line;
    loop {
        let spaces = rest.chars().take_while(|c| *c == ' ').count();
        if spaces > 3 {
            break;
        }
        let Some(after) = rest[spaces..].strip_prefix('>') else {
            break;
        };
        rest = after.strip_prefix(' ').unwrap_or(after);
        depth += 1;
    }
    // Markers and spaces are ASCII, so bytes consumed equal chars consumed.
    (depth, line.len() - rest.len(), rest)
}

/// Split off up to three leading spaces. `None` means the line is indented
/// code (four or more columns).
fn strip_indent(line: &str) -> Option<(usize, &str)> {
    let indent = line.chars().take_while(|c| *c == ' ').count();
    if indent > 3 || line[indent..].starts_with('\t') {
        return None;
    }
    Some((indent, &line[indent..]))
}

/// Recognise an ATX heading. Returns `(level, raw inline text)`.
fn parse_atx(rest: &str) -> Option<(u8, &str)> {
    let hashes = rest.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let after = &rest[hashes..];
    if !(after.is_empty() || after.starts_with(' ') || after.starts_with('\t')) {
        return None;
    }

    let mut text = after.trim();
    // A closing sequence must be all '#' and separated from the text by whitespace.
    let trimmed = text.trim_end_matches('#');
    if trimmed.is_empty() {
        text = "";
    } else if trimmed.len() != text.len() && trimmed.ends_with([' ', '\t']) {
        text = trimmed.trim_end();
    }

    Some((hashes as u8, text))
}

/// Recognise the opening or closing line of a fenced code block.
fn parse_fence(rest: &str, depth: usize) -> Option<Fence> {
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|c| *c == marker).count();
    (len >= 3).then_some(Fence { marker, len, depth })
}

/// Recognise a setext underline. Returns the heading level it produces.
fn parse_setext_underline(rest: &str) -> Option<u8> {
    let rest = rest.trim_end();
    if rest.is_empty() {
        return None;
    }
    if rest.chars().all(|c| c == '=') {
        Some(1)
    } else if rest.chars().all(|c| c == '-') {
        Some(2)
    } else {
        None
    }
}

/// `---`, `***`, `___` (spaces allowed between markers).
fn is_thematic_break(rest: &str) -> bool {
    let mut markers = rest.chars().filter(|c| !c.is_whitespace());
    let Some(first) = markers.next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_') && {
        let others: Vec<char> = markers.collect();
        others.len() >= 2 && others.iter().all(|c| *c == first)
    }
}

fn starts_bullet_item(rest: &str) -> bool {
    rest.starts_with("- ") || rest.starts_with("* ") || rest.starts_with("+ ")
}

/// The number of an ordered list item (`3. ` or `3) `), if `rest` starts one.
fn ordered_item_number(rest: &str) -> Option<u32> {
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let marker = &rest[digits..];
    if !(marker.starts_with(". ") || marker.starts_with(") ")) {
        return None;
    }
    rest[..digits].parse().ok()
}

/// Lines that start some other block and therefore never begin a paragraph.
fn starts_other_block(rest: &str) -> bool {
    rest.starts_with('<')
        || is_thematic_break(rest)
        || starts_bullet_item(rest)
        || ordered_item_number(rest).is_some()
}

/// Lines that close an open paragraph instead of continuing it. Only an ordered
/// list starting at 1 may interrupt a paragraph.
fn interrupts_paragraph(rest: &str) -> bool {
    is_thematic_break(rest) || starts_bullet_item(rest) || ordered_item_number(rest) == Some(1)
}

/// Extract all level-2 and level-3 headings in document order.
///
/// Slugs come from a fresh [`Slugger`], so repeated heading text gets `-1`, `-2`
/// suffixes within this document. Empty content yields an empty list.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut slugger = Slugger::new();
    let mut paragraph: Option<OpenParagraph> = None;
    let mut fence: Option<Fence> = None;
    let mut line_offset = 0;

    let mut push = |level: u8, raw: &str, offset: usize, headings: &mut Vec<Heading>| {
        if level == 2 || level == 3 {
            let text = strip_inline(raw);
            headings.push(Heading {
                slug: slugger.slug(&text),
                text,
                level,
                offset,
            });
        }
    };

    for raw_line in content.split_inclusive('\n') {
        let start = line_offset;
        line_offset += raw_line.chars().count();
        let (depth, quoted, line) = strip_quote(raw_line.trim_end_matches(['\n', '\r']));
        let start = start + quoted;

        if let Some(open) = &fence {
            if depth >= open.depth {
                if let Some((_, rest)) = strip_indent(line) {
                    if let Some(close) = parse_fence(rest, depth) {
                        let tail = rest.trim_start_matches(close.marker);
                        if close.depth == open.depth
                            && close.marker == open.marker
                            && close.len >= open.len
                            && tail.trim().is_empty()
                        {
                            fence = None;
                        }
                    }
                }
                continue;
            }
            // Leaving the blockquote closes a fence opened inside it.
            fence = None;
        }

        if line.trim().is_empty() {
            paragraph = None;
            continue;
        }

        let Some((indent, rest)) = strip_indent(line) else {
            // Indented code, unless it continues an open paragraph.
            if let Some(open) = paragraph.as_mut() {
                open.lines.push(line.trim().to_string());
            }
            continue;
        };

        if let Some(open) = parse_fence(rest, depth) {
            paragraph = None;
            fence = Some(open);
            continue;
        }

        if let Some((level, text)) = parse_atx(rest) {
            paragraph = None;
            push(level, text, start + indent, &mut headings);
            continue;
        }

        if let Some(mut open) = paragraph.take() {
            if depth == open.depth {
                if let Some(level) = parse_setext_underline(rest) {
                    let text = open.lines.join("\n");
                    push(level, &text, open.offset, &mut headings);
                    continue;
                }
            }
            // A deeper quote starts a new block; a shallower line is a lazy continuation.
            if depth <= open.depth && !interrupts_paragraph(rest) {
                open.lines.push(rest.trim().to_string());
                paragraph = Some(open);
                continue;
            }
        }

        if !starts_other_block(rest) {
            paragraph = Some(OpenParagraph {
                offset: start + indent,
                depth,
                lines: vec![rest.trim().to_string()],
            });
        }
    }

    headings
}
