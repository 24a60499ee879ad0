//! Query and category filtering.
//!
//! Filters are stable: output keeps the relative order of the input, and
//! running a filter on its own output returns the same list.

use crate::criteria::AdvancedCriteria;
use scholar_domain::{CategorySelector, Paper};
use serde::{Deserialize, Serialize};

/// The full set of restrictions for one view of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free text matched against title, abstract, authors, and keywords.
    pub query: String,
    pub category: CategorySelector,
    /// Year / citation / keyword bounds, when the advanced panel is engaged.
    pub advanced: Option<AdvancedCriteria>,
}

impl FilterCriteria {
    /// Criteria with only a query and a category.
    pub fn new(query: impl Into<String>, category: CategorySelector) -> Self {
        Self {
            query: query.into(),
            category,
            advanced: None,
        }
    }

    /// Whether these criteria match every paper.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.category == CategorySelector::All
            && self.advanced.as_ref().map_or(true, AdvancedCriteria::is_empty)
    }

    /// Test a single paper.
    pub fn matches(&self, paper: &Paper) -> bool {
        let needle = self.query.to_lowercase();
        self.matches_folded(paper, &needle)
    }

    /// Keep matching papers, in input order.
    pub fn apply<'a, I>(&self, papers: I) -> Vec<&'a Paper>
    where
        I: IntoIterator<Item = &'a Paper>,
    {
        let needle = self.query.to_lowercase();
        papers
            .into_iter()
            .filter(|paper| self.matches_folded(paper, &needle))
            .collect()
    }

    fn matches_folded(&self, paper: &Paper, needle: &str) -> bool {
        (needle.is_empty() || paper.matches_text(needle))
            && self.category.matches(paper.category)
            && self
                .advanced
                .as_ref()
                .map_or(true, |advanced| advanced.matches(paper))
    }
}

/// Filter papers by free-text query and category.
///
/// An empty query places no text restriction; [`CategorySelector::All`]
/// places no category restriction. Both together return the input unchanged.
pub fn filter_papers<'a, I>(papers: I, query: &str, category: CategorySelector) -> Vec<&'a Paper>
where
    I: IntoIterator<Item = &'a Paper>,
{
    FilterCriteria::new(query, category).apply(papers)
}
