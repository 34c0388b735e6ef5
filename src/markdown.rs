// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Just enough markdown handling to make snippets readable.
//!
//! We never render markdown. Snippets are raw slices of the post body, so before
//! they are shown the syntax has to go: heading markers, emphasis, link targets,
//! inline code ticks, list bullets, blockquote arrows, HTML tags. The rules are
//! applied in a fixed order because later rules assume earlier ones ran (links
//! before emphasis, so `[**x**](url)` ends up as `x`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Average adult reading speed used for the "N min read" estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

fn re(pattern: &str) -> Regex {
    // Patterns are compile-time constants; a failure here is a programming error.
    Regex::new(pattern).expect("static markdown pattern must compile")
}

static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| re(r"(?mR)^[ \t]*(?:[-*_][ \t]*){3,}$"));
static LIST_LEADER: Lazy<Regex> = Lazy::new(|| re(r"(?mR)^([ \t]*)(?:[*+-]|\d+\.)[ \t]+"));
static HTML_TAG: Lazy<Regex> = Lazy::new(|| re(r"<[^>\n]*>"));
static SETEXT_UNDERLINE: Lazy<Regex> = Lazy::new(|| re(r"(?mR)^[ \t]*[=-]{2,}[ \t]*$"));
static FOOTNOTE: Lazy<Regex> = Lazy::new(|| re(r"\[\^[^\]]+\](?:: [^\n]*)?"));
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| re(r"(?mR)^[ \t]*(?:```|~~~)[^\n]*\n?"));
static IMAGE: Lazy<Regex> = Lazy::new(|| re(r"!\[([^\]]*)\](?:\([^)]*\)|\[[^\]]*\])"));
static LINK: Lazy<Regex> = Lazy::new(|| re(r"\[([^\]]*)\](?:\([^)]*\)|\[[^\]]*\])"));
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| re(r"(?mR)^[ \t]{0,3}(?:>[ \t]?)+"));
static ATX_HEADING: Lazy<Regex> =
    Lazy::new(|| re(r"(?mR)^[ \t]{0,3}#{1,6}(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$"));
static STRONG_STAR: Lazy<Regex> = Lazy::new(|| re(r"\*\*([^*\n]+)\*\*"));
static STRONG_UNDERSCORE: Lazy<Regex> = Lazy::new(|| re(r"__([^_\n]+)__"));
static EM_STAR: Lazy<Regex> = Lazy::new(|| re(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*"));
static EM_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| re(r"(^|[^\w])_([^_\s](?:[^_\n]*[^_\s])?)_($|[^\w])"));
static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| re(r"~~([^~\n]+)~~"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| re(r"`+([^`]+?)`+"));
static ESCAPE: Lazy<Regex> = Lazy::new(|| re(r"\\([!-/:-@\[-`{-~])"));
static NEWLINES: Lazy<Regex> = Lazy::new(|| re(r"[\r\n]+"));

/// Emphasis, strikethrough and inline code markers.
fn strip_emphasis(text: &str) -> String {
    let text = STRONG_STAR.replace_all(text, "$1");
    let text = STRONG_UNDERSCORE.replace_all(&text, "$1");
    let mut text = EM_STAR.replace_all(&text, "$1").into_owned();
    // The boundary groups consume a character, so adjacent spans need another pass.
    while EM_UNDERSCORE.is_match(&text) {
        text = EM_UNDERSCORE.replace_all(&text, "$1$2$3").into_owned();
    }
    let text = STRIKETHROUGH.replace_all(&text, "$1");
    INLINE_CODE.replace_all(&text, "$1").into_owned()
}

/// Strip markdown syntax from a raw slice and fold it onto one line.
///
/// `# Heading **Bold** [Link](url)` becomes `Heading Bold Link`.
pub fn clean_markdown(text: &str) -> String {
    let text = HORIZONTAL_RULE.replace_all(text, "");
    let text = LIST_LEADER.replace_all(&text, "$1");
    let text = HTML_TAG.replace_all(&text, "");
    let text = SETEXT_UNDERLINE.replace_all(&text, "");
    let text = FOOTNOTE.replace_all(&text, "");
    let text = CODE_FENCE.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = ATX_HEADING.replace_all(&text, "$1");
    let text = strip_emphasis(&text);
    let text = ESCAPE.replace_all(&text, "$1");

    NEWLINES.replace_all(&text, " ").trim().to_string()
}

/// Reduce the inline content of a heading to its visible text.
///
/// Text and inline code are kept in document order; images and raw HTML vanish
/// entirely and links keep only their label.
pub fn strip_inline(text: &str) -> String {
    let text = IMAGE.replace_all(text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = HTML_TAG.replace_all(&text, "");
    let text = strip_emphasis(&text);
    let text = ESCAPE.replace_all(&text, "$1");

    text.trim().to_string()
}

/// Estimate reading time as "N min read".
///
/// Minutes are rounded to two decimals before rounding up, so a 2-word post
/// reads in "1 min" and an empty one in "0 min".
pub fn reading_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words as f64 / WORDS_PER_MINUTE;
    let rounded = (minutes * 100.0).round() / 100.0;
    format!("{} min read", rounded.ceil() as u64)
}
