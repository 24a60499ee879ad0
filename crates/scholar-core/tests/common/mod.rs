//! Shared fixtures and generators for scholar-core integration tests

#![allow(dead_code)]

use proptest::prelude::*;
use scholar_domain::{Category, Paper};

const WORDS: &[&str] = &["neural", "quantum", "cell", "graph", "ML", "Bio", "Energy"];

/// Build a paper with just the fields the engines look at.
pub fn paper(id: &str, title: &str, keywords: &[&str]) -> Paper {
    let mut paper = Paper::new(id, title, Category::Biology);
    paper.year = 2021;
    paper.keywords = keywords.iter().map(|k| k.to_string()).collect();
    paper
}

pub fn ids(papers: &[&Paper]) -> Vec<String> {
    papers.iter().map(|p| p.id.clone()).collect()
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_words(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..=max)
        .prop_map(|words| words.into_iter().map(str::to_string).collect())
}

/// Papers with unique ids `p0..pN` and fields drawn from a small vocabulary,
/// so queries and keywords collide often.
pub fn arb_papers() -> impl Strategy<Value = Vec<Paper>> {
    prop::collection::vec(
        (
            arb_words(3),
            arb_words(2),
            arb_words(3),
            arb_category(),
            1990i32..2025,
            0u32..500,
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, authors, keywords, category, year, citations))| {
                let mut paper = Paper::new(format!("p{i}"), title.join(" "), category);
                paper.authors = authors;
                paper.keywords = keywords;
                paper.year = year;
                paper.citations = citations;
                paper
            })
            .collect()
    })
}

/// A query drawn from the vocabulary, possibly re-cased or truncated.
pub fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(WORDS.to_vec()).prop_map(str::to_string),
        prop::sample::select(WORDS.to_vec()).prop_map(|w| w.to_uppercase()),
        prop::sample::select(WORDS.to_vec()).prop_map(|w| w[..2].to_string()),
    ]
}
