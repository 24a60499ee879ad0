//! Keyword co-occurrence recommendations.
//!
//! A paper is recommended when it is not a favorite and shares at least one
//! keyword with any favorited paper. There is no scoring: qualifying papers
//! are returned in catalog order and truncated to the limit.

use crate::favorites::FavoriteSet;
use scholar_domain::Paper;
use std::collections::HashSet;

/// Number of recommendations shown alongside the library.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Union of keywords across the favorited papers in `papers`.
///
/// Favorite ids with no matching paper contribute nothing.
pub fn favorite_keywords<'a>(papers: &'a [Paper], favorites: &FavoriteSet) -> HashSet<&'a str> {
    papers
        .iter()
        .filter(|paper| favorites.contains(&paper.id))
        .flat_map(|paper| paper.keywords.iter().map(String::as_str))
        .collect()
}

/// Recommend up to `limit` unfavorited papers sharing a keyword with a favorite.
///
/// Keyword comparison is exact. Returns an empty list when `favorites` is empty.
pub fn recommend<'a>(papers: &'a [Paper], favorites: &FavoriteSet, limit: usize) -> Vec<&'a Paper> {
    if favorites.is_empty() {
        return Vec::new();
    }

    let wanted = favorite_keywords(papers, favorites);

    papers
        .iter()
        .filter(|paper| !favorites.contains(&paper.id))
        .filter(|paper| {
            paper
                .keywords
                .iter()
                .any(|keyword| wanted.contains(keyword.as_str()))
        })
        .take(limit)
        .collect()
}
