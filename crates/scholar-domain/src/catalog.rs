//! The immutable paper catalog.
//!
//! A catalog is loaded once at startup, either from the built-in seed data or
//! from a JSON file holding an array of papers, and is never mutated
//! afterwards. Loading rejects duplicate ids and papers with error-severity
//! validation issues; warnings are logged and the paper is kept.

use crate::validation::{duplicate_ids, validate_paper, ValidationSeverity};
use crate::Paper;
use std::path::{Path, PathBuf};

const SEED_CATALOG: &str = include_str!("../data/seed_catalog.json");

/// Errors that can occur when loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate paper id: {0}")]
    DuplicateId(String),

    #[error("invalid paper `{id}`: {field}: {message}")]
    InvalidPaper {
        id: String,
        field: String,
        message: String,
    },
}

/// Read-only list of papers with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    papers: Vec<Paper>,
}

impl Catalog {
    /// Build a catalog from papers, validating each one.
    pub fn from_papers(papers: Vec<Paper>) -> Result<Self, CatalogError> {
        if let Some(id) = duplicate_ids(&papers).into_iter().next() {
            return Err(CatalogError::DuplicateId(id));
        }

        for paper in &papers {
            for issue in validate_paper(paper) {
                match issue.severity {
                    ValidationSeverity::Error => {
                        return Err(CatalogError::InvalidPaper {
                            id: issue.paper_id,
                            field: issue.field,
                            message: issue.message,
                        });
                    }
                    ValidationSeverity::Warning => {
                        tracing::warn!(
                            "Paper {} field {}: {}",
                            issue.paper_id,
                            issue.field,
                            issue.message
                        );
                    }
                    ValidationSeverity::Info => {
                        tracing::debug!(
                            "Paper {} field {}: {}",
                            issue.paper_id,
                            issue.field,
                            issue.message
                        );
                    }
                }
            }
        }

        Ok(Self { papers })
    }

    /// Parse a JSON array of papers.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let papers: Vec<Paper> = serde_json::from_str(json)?;
        Self::from_papers(papers)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} papers from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The seed catalog compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SEED_CATALOG)?;
        tracing::info!("Loaded {} built-in papers", catalog.len());
        Ok(catalog)
    }

    /// All papers in load order.
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Look up a paper by id.
    pub fn get(&self, id: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.id == id)
    }

    /// Whether a paper with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(duplicate_ids(catalog.papers()).is_empty());
    }

    #[test]
    fn builtin_catalog_covers_every_category() {
        let catalog = Catalog::builtin().unwrap();
        for category in Category::ALL {
            assert!(
                catalog.papers().iter().any(|p| p.category == category),
                "no seed paper in {}",
                category
            );
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = Paper::new("dup", "First", Category::Biology);
        let b = Paper::new("dup", "Second", Category::Biology);
        let err = Catalog::from_papers(vec![a, b]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "dup"));
    }

    #[test]
    fn missing_title_is_rejected() {
        let paper = Paper::new("p1", "", Category::Biology);
        let err = Catalog::from_papers(vec![paper]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPaper { field, .. } if field == "title"));
    }

    #[test]
    fn warnings_do_not_reject() {
        // No authors, year 0, no keywords: warnings and info only
        let paper = Paper::new("p1", "Untitled draft", Category::Chemistry);
        let catalog = Catalog::from_papers(vec![paper]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn get_and_contains() {
        let catalog = Catalog::from_papers(vec![Paper::new("a", "A", Category::Physics)]).unwrap();
        assert_eq!(catalog.get("a").map(|p| p.title.as_str()), Some("A"));
        assert!(catalog.contains("a"));
        assert!(!catalog.contains("b"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
