//! Occurrence-budget pagination across whole result sets.

use crate::common::{all_pages, blog, make_post_with_hits, result_slugs};
use folio::{Corpus, NextOffset, SearchOptions};

#[test]
fn test_budget_of_two_with_four_hit_posts() {
    let corpus = Corpus::new(vec![
        make_post_with_hits("first", "target", 4),
        make_post_with_hits("second", "target", 4),
    ]);
    let options = SearchOptions::default().with_occurrence_limit(2);

    let page = corpus.search("target", options);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next_offset, NextOffset::At(1));

    let page = corpus.search("target", options.with_offset(1));
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next_offset, NextOffset::Exhausted);
}

#[test]
fn test_blog_pages_with_budget_three() {
    let pages = all_pages(&blog(), "rust", 3);
    let slugs: Vec<Vec<&str>> = pages.iter().map(|p| result_slugs(&p.results)).collect();
    assert_eq!(
        slugs,
        vec![vec!["rust-async"], vec!["go-vs-rust", "rusty-tools"]]
    );
    assert_eq!(pages[0].next_offset, NextOffset::At(1));
    assert_eq!(pages[1].next_offset, NextOffset::Exhausted);
}

#[test]
fn test_totals_identical_on_every_page() {
    let pages = all_pages(&blog(), "rust", 2);
    assert_eq!(pages.len(), 3);
    for page in &pages {
        assert_eq!(page.total_articles, 3);
        assert_eq!(page.total_occurrences, 7);
    }
}

#[test]
fn test_concatenated_pages_equal_single_pass() {
    let corpus = Corpus::new(
        (0..12)
            .map(|i| make_post_with_hits(&format!("p{i:02}"), "needle", 1 + i % 4))
            .collect(),
    );
    let single = corpus.search("needle", SearchOptions::default().with_occurrence_limit(usize::MAX));
    assert_eq!(single.next_offset, NextOffset::Exhausted);

    for budget in [1, 2, 3, 5, 8, 100] {
        let paged: Vec<String> = all_pages(&corpus, "needle", budget)
            .iter()
            .flat_map(|p| p.results.iter().map(|r| r.slug.clone()))
            .collect();
        let expected: Vec<String> = single.results.iter().map(|r| r.slug.clone()).collect();
        assert_eq!(paged, expected, "budget {budget}");
    }
}

#[test]
fn test_each_page_meets_budget_unless_last() {
    let corpus = Corpus::new(
        (0..10)
            .map(|i| make_post_with_hits(&format!("p{i}"), "needle", 1 + i % 3))
            .collect(),
    );
    let pages = all_pages(&corpus, "needle", 4);
    let (last, rest) = pages.split_last().unwrap();
    for page in rest {
        let hits: usize = page
            .results
            .iter()
            .map(|r| r.matches.iter().map(|g| g.snippets.len()).sum::<usize>())
            .sum();
        assert!(hits >= 4, "page below budget: {hits}");
    }
    assert_eq!(last.next_offset, NextOffset::Exhausted);
}
