//! Match groups as seen through the full search pipeline.

use crate::common::{blog, simple_post};
use folio::{Corpus, SearchOptions, SearchResult};

fn only_result(corpus: &Corpus, query: &str) -> SearchResult {
    let mut page = corpus.search(query, SearchOptions::default());
    assert_eq!(page.results.len(), 1, "expected exactly one result");
    page.results.remove(0)
}

fn heading_texts(result: &SearchResult) -> Vec<Option<&str>> {
    result
        .matches
        .iter()
        .map(|g| g.heading.as_ref().map(|h| h.text.as_str()))
        .collect()
}

#[test]
fn test_subtitle_scenario() {
    let corpus = Corpus::new(vec![simple_post("s", "## Subtitle\nTarget info is here.")]);
    let result = only_result(&corpus, "Target");
    assert_eq!(heading_texts(&result), vec![Some("Subtitle")]);
    assert_eq!(result.matches[0].snippets.len(), 1);
    assert!(result.matches[0].snippets[0].contains("Target"));
}

#[test]
fn test_blog_groups() {
    let page = blog().search("rust", SearchOptions::default());

    // Both hits in rust-async fall inside one window that starts above the first heading.
    assert_eq!(heading_texts(&page.results[0]), vec![None]);
    assert_eq!(
        page.results[0].matches[0].snippets,
        vec!["Intro about rust. Executors Tokio is a rust runtime. Wakers Polling."]
    );

    assert_eq!(heading_texts(&page.results[1]), vec![Some("Rust")]);
    assert_eq!(page.results[1].matches[0].heading.as_ref().unwrap().slug, "rust");

    assert_eq!(heading_texts(&page.results[2]), vec![Some("Editors")]);
}

#[test]
fn test_matching_heading_group_without_snippets() {
    // The heading's own hit overlaps the first window and is dropped as a snippet.
    let corpus = Corpus::new(vec![simple_post("p", "needle intro\n## Needle\nbody")]);
    let result = only_result(&corpus, "needle");
    assert_eq!(heading_texts(&result), vec![None, Some("Needle")]);
    assert_eq!(result.matches[0].snippets.len(), 1);
    assert!(result.matches[1].snippets.is_empty());
}

#[test]
fn test_matching_heading_and_body_hits() {
    let body = format!("## Needle notes\n{}\n## Other\nneedle", "filler ".repeat(30));
    let corpus = Corpus::new(vec![simple_post("p", &body)]);
    let result = only_result(&corpus, "needle");
    assert_eq!(heading_texts(&result), vec![Some("Needle notes"), Some("Other")]);
    assert_eq!(result.matches[0].snippets.len(), 1);
    assert_eq!(result.matches[1].snippets.len(), 1);
}

#[test]
fn test_ungrouped_first_then_document_order() {
    let body = format!(
        "needle up top\n{pad}\n### Deep needle\n{pad}\n## Later\n{pad}\nneedle again",
        pad = "pad ".repeat(40)
    );
    let corpus = Corpus::new(vec![simple_post("p", &body)]);
    let result = only_result(&corpus, "needle");
    assert_eq!(
        heading_texts(&result),
        vec![None, Some("Deep needle"), Some("Later")]
    );
    assert_eq!(result.matches[1].heading.as_ref().unwrap().level, 3);
}

#[test]
fn test_heading_inside_code_fence_is_not_a_group() {
    let body = "```\n## needle in code\n```\nplain text";
    let corpus = Corpus::new(vec![simple_post("p", body)]);
    let result = only_result(&corpus, "needle");
    assert_eq!(heading_texts(&result), vec![None]);
}
