// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading slugs for anchor links.
//!
//! Two layers:
//!
//! - [`slugify`] is the stateless algorithm: lowercase, trim, drop anything that
//!   is not a word character, whitespace or hyphen, then turn whitespace runs and
//!   hyphen runs into a single hyphen.
//! - [`Slugger`] wraps it with a per-document counter map so repeated heading text
//!   gets distinct anchors: `intro`, `intro-1`, `intro-2`. Make one per document;
//!   nothing is shared between calls.

use std::collections::HashMap;

/// Convert heading text to a URL-friendly slug.
///
/// Word characters are Unicode letters, digits and `_`, so accented headings keep
/// their letters ("Café au lait" → "café-au-lait").
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for c in lowered.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            // Whitespace runs and hyphen runs both collapse into one hyphen.
            if !slug.ends_with('-') {
                slug.push('-');
            }
        }
    }

    slug
}

/// Hands out unique slugs within one document.
///
/// The first occurrence of a base slug is returned as-is; later occurrences get
/// `-1`, `-2`, ... appended. A generated suffix that collides with a heading
/// whose text already produced that slug is skipped, so the output is unique
/// for the whole document.
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();

        while self.occurrences.contains_key(&candidate) {
            let count = self.occurrences.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }

        self.occurrences.insert(candidate.clone(), 0);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Title with code"), "title-with-code");
        assert_eq!(slugify("Another H2"), "another-h2");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("C++ & Rust!"), "c-rust");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("  a   -  b  "), "a-b");
        assert_eq!(slugify("a---b"), "a-b");
        assert_eq!(slugify("hello !"), "hello-");
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Café au lait"), "café-au-lait");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugger_disambiguates_repeats() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Intro"), "intro");
        assert_eq!(slugger.slug("Intro"), "intro-1");
        assert_eq!(slugger.slug("Intro"), "intro-2");
        assert_eq!(slugger.slug("Outro"), "outro");
    }

    #[test]
    fn test_slugger_skips_taken_suffix() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Intro 1"), "intro-1");
        assert_eq!(slugger.slug("Intro"), "intro");
        // "intro-1" is already taken by the first heading.
        assert_eq!(slugger.slug("Intro"), "intro-2");
    }

    #[test]
    fn test_fresh_slugger_starts_over() {
        let mut first = Slugger::new();
        assert_eq!(first.slug("Intro"), "intro");
        assert_eq!(Slugger::new().slug("Intro"), "intro");
    }
}
