//! Ranking tests: field weights, tie-breaking, totals.

use crate::common::{blog, result_slugs, simple_post};
use folio::testing::{date, make_post, make_post_on};
use folio::{score_post, Corpus, QueryMatcher, SearchOptions};

#[test]
fn test_weighted_order_over_blog() {
    let page = blog().search("rust", SearchOptions::default());
    assert_eq!(
        result_slugs(&page.results),
        vec!["rust-async", "go-vs-rust", "rusty-tools"]
    );
    assert_eq!(page.total_articles, 3);
    assert_eq!(page.total_occurrences, 7);
}

#[test]
fn test_scores_match_field_weights() {
    let corpus = blog();
    let matcher = QueryMatcher::new("rust").unwrap();
    let scores: Vec<(u32, usize)> = corpus
        .posts()
        .iter()
        .map(|post| {
            let s = score_post(post, &matcher);
            (s.score, s.occurrences)
        })
        .collect();
    // rust-async, go-vs-rust, cooking, rusty-tools
    assert_eq!(scores, vec![(7, 4), (5, 2), (0, 0), (1, 1)]);
}

#[test]
fn test_title_beats_many_body_hits() {
    let corpus = Corpus::new(vec![
        make_post("body", "Nothing", "", &"needle ".repeat(50)),
        make_post("title", "needle", "", "nothing"),
    ]);
    let page = corpus.search("needle", SearchOptions::default());
    assert_eq!(result_slugs(&page.results), vec!["title", "body"]);
    assert_eq!(page.total_occurrences, 51);
}

#[test]
fn test_description_beats_tags() {
    let corpus = Corpus::new(vec![
        make_post("tagged", "t", "", "c").with_tags(["needle"]),
        make_post("described", "t", "a needle here", "c"),
    ]);
    let page = corpus.search("needle", SearchOptions::default());
    assert_eq!(result_slugs(&page.results), vec!["described", "tagged"]);
}

#[test]
fn test_equal_scores_keep_newest_first() {
    let corpus = Corpus::new(vec![
        make_post_on("older", "x", date(2024, 1, 1), "needle"),
        make_post_on("newer", "x", date(2025, 1, 1), "needle"),
    ]);
    let page = corpus.search("needle", SearchOptions::default());
    assert_eq!(result_slugs(&page.results), vec!["newer", "older"]);
}

#[test]
fn test_drafts_never_returned() {
    let page = blog().search("draft", SearchOptions::default());
    assert!(page.results.is_empty());
    assert_eq!(page.total_occurrences, 0);
}

#[test]
fn test_case_insensitive_and_word_start() {
    let corpus = Corpus::new(vec![
        simple_post("a", "POSTGRES rocks"),
        simple_post("b", "signpost"),
    ]);
    let page = corpus.search("post", SearchOptions::default());
    assert_eq!(result_slugs(&page.results), vec!["a"]);
}

#[test]
fn test_two_post_title_scenario() {
    let corpus = Corpus::new(vec![
        make_post_on("post-1", "Post 1", date(2026, 1, 1), "Content 1"),
        make_post_on("post-2", "Post 2", date(2026, 2, 1), "Content 2"),
    ]);
    assert_eq!(corpus.posts()[0].slug, "post-2");
    let page = corpus.search("Post 1", SearchOptions::default());
    assert_eq!(result_slugs(&page.results), vec!["post-1"]);
}
