//! Validation for papers and catalogs

use crate::Paper;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Earliest publication year accepted without a warning.
pub const MIN_PLAUSIBLE_YEAR: i32 = 1900;

/// Upper bound of the rating scale.
pub const MAX_RATING: f32 = 5.0;

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub paper_id: String,
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn new(paper: &Paper, field: &str, message: &str, severity: ValidationSeverity) -> Self {
        Self {
            paper_id: paper.id.clone(),
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }

    /// Whether this issue prevents the paper from being loaded.
    pub fn is_error(&self) -> bool {
        self.severity == ValidationSeverity::Error
    }
}

/// Validate a paper and return errors/warnings
pub fn validate_paper(paper: &Paper) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if paper.id.trim().is_empty() {
        errors.push(ValidationError::new(
            paper,
            "id",
            "Identifier is required",
            ValidationSeverity::Error,
        ));
    }

    if paper.title.trim().is_empty() {
        errors.push(ValidationError::new(
            paper,
            "title",
            "Title is required",
            ValidationSeverity::Error,
        ));
    }

    // Warnings for recommended fields
    if paper.authors.is_empty() {
        errors.push(ValidationError::new(
            paper,
            "authors",
            "Authors are recommended",
            ValidationSeverity::Warning,
        ));
    }

    if paper.year < MIN_PLAUSIBLE_YEAR {
        errors.push(ValidationError::new(
            paper,
            "year",
            "Publication year looks implausible",
            ValidationSeverity::Warning,
        ));
    }

    if !paper.doi.is_empty() && !paper.doi.starts_with("10.") {
        errors.push(ValidationError::new(
            paper,
            "doi",
            "DOI should start with '10.'",
            ValidationSeverity::Warning,
        ));
    }

    if !(0.0..=MAX_RATING).contains(&paper.rating) {
        errors.push(ValidationError::new(
            paper,
            "rating",
            "Rating should be between 0 and 5",
            ValidationSeverity::Warning,
        ));
    }

    // Papers without keywords never take part in recommendations
    if paper.keywords.is_empty() {
        errors.push(ValidationError::new(
            paper,
            "keywords",
            "No keywords; paper cannot be recommended",
            ValidationSeverity::Info,
        ));
    }

    errors
}

/// Return the ids that occur more than once, in first-duplicate order.
pub fn duplicate_ids(papers: &[Paper]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for paper in papers {
        if !seen.insert(paper.id.as_str()) && !duplicates.contains(&paper.id) {
            duplicates.push(paper.id.clone());
        }
    }

    duplicates
}
