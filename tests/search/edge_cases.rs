//! Degenerate inputs: nothing here may panic or error.

use crate::common::{blog, simple_post};
use folio::{Corpus, NextOffset, SearchOptions, SearchPage};

#[test]
fn test_short_queries() {
    let corpus = blog();
    for query in ["", " ", "r", " r ", "\t\n"] {
        let page = corpus.search(query, SearchOptions::default());
        assert_eq!(page, SearchPage::empty(), "query {query:?}");
        assert_eq!(page.next_offset, NextOffset::At(0));
    }
}

#[test]
fn test_query_is_trimmed() {
    let trimmed = blog().search("rust", SearchOptions::default());
    let padded = blog().search("  rust  ", SearchOptions::default());
    assert_eq!(trimmed, padded);
}

#[test]
fn test_empty_corpus() {
    let page = Corpus::default().search("rust", SearchOptions::default());
    assert!(page.results.is_empty());
    assert_eq!(page.total_articles, 0);
    assert_eq!(page.next_offset, NextOffset::Exhausted);
}

#[test]
fn test_regex_metacharacters() {
    let corpus = Corpus::new(vec![
        simple_post("cpp", "Modern c++ tricks"),
        simple_post("regex", "match a.b* literally (really)"),
    ]);
    for query in ["c++", "a.b*", "(really)", "[unclosed", "\\d+"] {
        // Must not panic, whatever the result.
        let _ = corpus.search(query, SearchOptions::default());
    }
    let page = corpus.search("c++", SearchOptions::default());
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].slug, "cpp");
}

#[test]
fn test_post_with_empty_content_matched_by_title() {
    let corpus = Corpus::new(vec![folio::testing::make_post("e", "needle", "", "")]);
    let page = corpus.search("needle", SearchOptions::default());
    assert_eq!(page.results.len(), 1);
    assert!(page.results[0].matches.is_empty());
}

#[test]
fn test_unicode_content() {
    let corpus = Corpus::new(vec![simple_post(
        "uni",
        "## Café\nÜber naïve résumé in తెలుగు text.",
    )]);
    let page = corpus.search("naïve", SearchOptions::default());
    assert_eq!(page.results.len(), 1);
    let group = &page.results[0].matches[0];
    assert_eq!(group.heading.as_ref().unwrap().slug, "café");
    assert!(group.snippets[0].contains("naïve"));
}

#[test]
fn test_offset_beyond_results() {
    let page = blog().search("rust", SearchOptions::default().with_offset(99));
    assert!(page.results.is_empty());
    assert_eq!(page.total_articles, 3);
    assert_eq!(page.next_offset, NextOffset::Exhausted);
}
