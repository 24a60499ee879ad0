//! Paper domain model

use crate::Category;
use serde::{Deserialize, Serialize};

/// A paper in the in-memory catalog.
///
/// Papers are immutable for the lifetime of a session. Only `id` carries a
/// uniqueness constraint, enforced when a [`crate::Catalog`] is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    pub year: i32,

    // Venue and impact
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub citations: u32,
    #[serde(default)]
    pub rating: f32,

    // Organization
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,

    // External references
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub pdf_url: String,
}

impl Paper {
    /// Create a paper with required fields; everything else starts empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            abstract_text: String::new(),
            year: 0,
            journal: String::new(),
            citations: 0,
            rating: 0.0,
            keywords: Vec::new(),
            category,
            doi: String::new(),
            pdf_url: String::new(),
        }
    }

    /// Whether any searchable field contains `needle`.
    ///
    /// `needle` must already be lowercased; fields are case-folded here.
    /// Searched fields: title, abstract, each author, each keyword.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.abstract_text.to_lowercase().contains(needle)
            || self
                .authors
                .iter()
                .any(|author| author.to_lowercase().contains(needle))
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(needle))
    }

    /// Whether the paper carries `keyword` (case-insensitive, whole tag).
    pub fn has_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.keywords.iter().any(|k| k.to_lowercase() == keyword)
    }

    /// First author followed by "et al." when there are co-authors.
    pub fn lead_author(&self) -> String {
        match self.authors.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, ..] => format!("{} et al.", first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paper {
        let mut paper = Paper::new("p1", "Neural Networks in Medicine", Category::Medicine);
        paper.authors = vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()];
        paper.abstract_text = "Diagnostic imaging with convolutional models.".to_string();
        paper.keywords = vec!["Deep Learning".to_string(), "Cancer Research".to_string()];
        paper
    }

    #[test]
    fn test_paper_new() {
        let paper = Paper::new("p1", "Title", Category::Physics);
        assert_eq!(paper.id, "p1");
        assert_eq!(paper.category, Category::Physics);
        assert!(paper.authors.is_empty());
        assert!(paper.keywords.is_empty());
    }

    #[test]
    fn test_matches_text_fields() {
        let paper = sample();
        assert!(paper.matches_text("neural"));
        assert!(paper.matches_text("convolutional"));
        assert!(paper.matches_text("turing"));
        assert!(paper.matches_text("cancer"));
        assert!(!paper.matches_text("photosynthesis"));
    }

    #[test]
    fn test_matches_text_ignores_venue() {
        let mut paper = sample();
        paper.journal = "Nature Medicine".to_string();
        assert!(!paper.matches_text("nature"));
    }

    #[test]
    fn test_has_keyword_is_whole_tag() {
        let paper = sample();
        assert!(paper.has_keyword("deep learning"));
        assert!(!paper.has_keyword("Deep"));
    }

    #[test]
    fn test_lead_author() {
        let mut paper = sample();
        assert_eq!(paper.lead_author(), "Ada Lovelace et al.");
        paper.authors.truncate(1);
        assert_eq!(paper.lead_author(), "Ada Lovelace");
        paper.authors.clear();
        assert_eq!(paper.lead_author(), "");
    }

    #[test]
    fn test_json_uses_abstract_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("abstract").is_some());
        assert_eq!(json["category"], "Medicine");
    }
}
