//! Search behavior tests.

mod common;

#[path = "search/ranking.rs"]
mod ranking;

#[path = "search/pagination.rs"]
mod pagination;

#[path = "search/grouping.rs"]
mod grouping;

#[path = "search/edge_cases.rs"]
mod edge_cases;
