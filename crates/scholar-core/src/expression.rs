//! Combined filter expression parser for the search box.
//!
//! Parses one input string into [`FilterCriteria`], so the query, category,
//! and advanced bounds can all be typed in a single field.
//!
//! # Syntax
//!
//! ```text
//! neural cat:medicine year:2020-2023 cites:50 kw:"Deep Learning"
//! ```
//!
//! Tokens:
//! - `cat:<name>`, `category:<name>`: category selector (`cat:all` clears it)
//! - `year:<from>-<to>`, `year:<y>`: inclusive year range
//! - `cites:<n>`, `citations:<n>`: citation floor
//! - `kw:<keyword>`: required keyword, repeatable
//! - anything else: free text, joined with single spaces
//!
//! Malformed values are ignored rather than reported. Free text loses runs
//! of whitespace and double quotes; use [`has_filter_tokens`] to decide
//! whether input should be searched literally instead.

use crate::criteria::{parse_bound, AdvancedCriteria, YearRange};
use crate::filter::FilterCriteria;
use scholar_domain::CategorySelector;

/// Parse a filter expression string.
pub fn parse_filter_expression(input: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    let mut advanced = AdvancedCriteria::default();
    let mut text_terms = Vec::new();

    for token in tokenize(input) {
        let Some((key, value)) = token.split_once(':') else {
            text_terms.push(token);
            continue;
        };

        match FilterKey::parse(key) {
            Some(FilterKey::Category) => {
                if let Some(selector) = CategorySelector::parse(value) {
                    criteria.category = selector;
                }
            }
            Some(FilterKey::Year) => {
                if let Some(range) = parse_year_range(value) {
                    advanced.year_range = Some(range);
                }
            }
            Some(FilterKey::Citations) => {
                advanced.min_citations = parse_bound(advanced.min_citations, value);
            }
            Some(FilterKey::Keyword) => {
                let value = value.trim();
                if !value.is_empty() && !advanced.keywords.iter().any(|k| k == value) {
                    advanced.keywords.push(value.to_string());
                }
            }
            // Unknown prefixes are plain text (e.g. "covid:19")
            None => text_terms.push(token),
        }
    }

    criteria.query = text_terms.join(" ");
    if !advanced.is_empty() {
        criteria.advanced = Some(advanced);
    }
    criteria
}

impl FilterCriteria {
    /// Parse a filter expression string.
    pub fn parse(input: &str) -> Self {
        parse_filter_expression(input)
    }
}

/// Whether `input` contains at least one recognized `key:value` token.
pub fn has_filter_tokens(input: &str) -> bool {
    tokenize(input).iter().any(|token| {
        token
            .split_once(':')
            .is_some_and(|(key, _)| FilterKey::parse(key).is_some())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKey {
    Category,
    Year,
    Citations,
    Keyword,
}

impl FilterKey {
    fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "cat" | "category" => Some(Self::Category),
            "year" => Some(Self::Year),
            "cites" | "citations" => Some(Self::Citations),
            "kw" | "keyword" => Some(Self::Keyword),
            _ => None,
        }
    }
}

fn parse_year_range(value: &str) -> Option<YearRange> {
    let value = value.trim();
    match value.split_once('-') {
        Some((from, to)) => {
            let from = from.trim().parse().ok()?;
            let to = to.trim().parse().ok()?;
            Some(YearRange::new(from, to))
        }
        None => value.parse().ok().map(YearRange::single),
    }
}

/// Tokenize a filter string, respecting quoted strings.
///
/// Quotes may open mid-token (`kw:"Deep Learning"`), in which case the quoted
/// part is appended to the token being built.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                if !in_quotes && !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
