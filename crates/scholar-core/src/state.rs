//! Browsing state with reducer-style updates.
//!
//! `BrowserState` is the single owner of the current query, category,
//! advanced bounds, and favorites. Each user action is applied through
//! [`BrowserState::apply`], which consumes the old state and returns the next
//! one. The visible list is always recomputed from the full catalog, never
//! from the previous view.

use crate::criteria::AdvancedCriteria;
use crate::favorites::FavoriteSet;
use crate::filter::FilterCriteria;
use crate::recommend::{recommend, RECOMMENDATION_LIMIT};
use scholar_domain::{Catalog, CategorySelector, Paper};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Replace the free-text query.
    Search(String),
    SelectCategory(CategorySelector),
    /// Replace the whole filter from a search-box expression.
    ApplyExpression(String),
    ApplyAdvanced(AdvancedCriteria),
    ClearAdvanced,
    /// Bookmark or un-bookmark a paper.
    ToggleFavorite(String),
}

/// Counts shown next to the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySummary {
    pub catalog_count: usize,
    pub visible_count: usize,
    /// Includes favorites whose paper is no longer in the catalog.
    pub favorites_count: usize,
    pub query: String,
}

impl LibrarySummary {
    /// e.g. `3 papers found for "neural"`.
    pub fn results_label(&self) -> String {
        if self.query.is_empty() {
            format!("{} papers found", self.visible_count)
        } else {
            format!("{} papers found for \"{}\"", self.visible_count, self.query)
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    favorites: FavoriteSet,
    /// Catalog indices of the papers passing `criteria`.
    visible: Vec<usize>,
    recommendation_limit: usize,
}

impl BrowserState {
    /// Start with no filters and no favorites: every paper is visible.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            favorites: FavoriteSet::new(),
            visible,
            recommendation_limit: RECOMMENDATION_LIMIT,
        }
    }

    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Apply one action and return the next state.
    pub fn apply(mut self, action: Action) -> Self {
        tracing::debug!("Applying {:?}", action);

        match action {
            Action::Search(query) => {
                self.criteria.query = query;
            }
            Action::SelectCategory(category) => {
                self.criteria.category = category;
            }
            Action::ApplyExpression(input) => {
                self.criteria = FilterCriteria::parse(&input);
            }
            Action::ApplyAdvanced(advanced) => {
                self.criteria.advanced = Some(advanced);
            }
            Action::ClearAdvanced => {
                self.criteria.advanced = None;
            }
            Action::ToggleFavorite(id) => {
                if !self.catalog.contains(&id) {
                    tracing::debug!("Toggling favorite for unknown paper {}", id);
                }
                self.favorites = self.favorites.toggle(&id);
                return self;
            }
        }

        self.refresh();
        self
    }

    fn refresh(&mut self) {
        let criteria = &self.criteria;
        self.visible = self
            .catalog
            .papers()
            .iter()
            .enumerate()
            .filter(|(_, paper)| criteria.matches(paper))
            .map(|(index, _)| index)
            .collect();

        tracing::debug!(
            "{} of {} papers visible",
            self.visible.len(),
            self.catalog.len()
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Papers passing the current criteria, in catalog order.
    pub fn visible(&self) -> Vec<&Paper> {
        let papers = self.catalog.papers();
        self.visible.iter().map(|&index| &papers[index]).collect()
    }

    /// Recommendations for the current favorites, drawn from the whole
    /// catalog regardless of the active filter.
    pub fn recommendations(&self) -> Vec<&Paper> {
        recommend(
            self.catalog.papers(),
            &self.favorites,
            self.recommendation_limit,
        )
    }

    pub fn summary(&self) -> LibrarySummary {
        LibrarySummary {
            catalog_count: self.catalog.len(),
            visible_count: self.visible.len(),
            favorites_count: self.favorites.len(),
            query: self.criteria.query.clone(),
        }
    }
}
