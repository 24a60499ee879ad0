//! Advanced filter criteria: year range, citation floor, required keywords.
//!
//! Numeric bounds are edited from free-form input. Input that does not parse
//! leaves the bound as it was; it is never an error.

use crate::keywords::toggle_keyword;
use scholar_domain::Paper;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive publication year range.
///
/// Constructors and deserialization swap reversed bounds. A range built as a
/// struct literal may still be reversed, so [`YearRange::contains`] orders the
/// bounds itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawYearRange")]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

#[derive(Deserialize)]
struct RawYearRange {
    from: i32,
    to: i32,
}

impl From<RawYearRange> for YearRange {
    fn from(raw: RawYearRange) -> Self {
        Self::new(raw.from, raw.to)
    }
}

impl YearRange {
    /// Range preselected by the advanced filter panel.
    pub const DEFAULT: YearRange = YearRange {
        from: 2020,
        to: 2024,
    };

    /// Create a range, swapping reversed bounds.
    pub fn new(from: i32, to: i32) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// A single-year range.
    pub fn single(year: i32) -> Self {
        Self {
            from: year,
            to: year,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.from.min(self.to)..=self.from.max(self.to)).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parse a numeric bound edit, keeping `current` when `input` is not a number.
pub fn parse_bound<T: FromStr>(current: T, input: &str) -> T {
    input.trim().parse().unwrap_or(current)
}

/// Bounds applied on top of the query and category filter.
///
/// `Default` places no restriction at all; [`AdvancedCriteria::panel_defaults`]
/// gives the values the filter panel opens with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedCriteria {
    pub year_range: Option<YearRange>,
    pub min_citations: u32,
    /// Every listed keyword must be on the paper (case-insensitive).
    pub keywords: Vec<String>,
}

impl AdvancedCriteria {
    /// Year 2020–2024, no citation floor, no keywords.
    pub fn panel_defaults() -> Self {
        Self {
            year_range: Some(YearRange::DEFAULT),
            min_citations: 0,
            keywords: Vec::new(),
        }
    }

    /// Whether these criteria match every paper.
    pub fn is_empty(&self) -> bool {
        self.year_range.is_none() && self.min_citations == 0 && self.keywords.is_empty()
    }

    /// Test a single paper.
    pub fn matches(&self, paper: &Paper) -> bool {
        self.year_range
            .map_or(true, |range| range.contains(paper.year))
            && paper.citations >= self.min_citations
            && self.keywords.iter().all(|keyword| paper.has_keyword(keyword))
    }

    /// Keep matching papers, in input order.
    pub fn apply<'a, I>(&self, papers: I) -> Vec<&'a Paper>
    where
        I: IntoIterator<Item = &'a Paper>,
    {
        papers
            .into_iter()
            .filter(|paper| self.matches(paper))
            .collect()
    }

    /// Replace the lower year bound from user input.
    pub fn with_year_from(mut self, input: &str) -> Self {
        let range = self.year_range.unwrap_or_default();
        self.year_range = Some(YearRange::new(parse_bound(range.from, input), range.to));
        self
    }

    /// Replace the upper year bound from user input.
    pub fn with_year_to(mut self, input: &str) -> Self {
        let range = self.year_range.unwrap_or_default();
        self.year_range = Some(YearRange::new(range.from, parse_bound(range.to, input)));
        self
    }

    /// Replace the citation floor from user input.
    pub fn with_min_citations(mut self, input: &str) -> Self {
        self.min_citations = parse_bound(self.min_citations, input);
        self
    }

    /// Add or remove a required keyword.
    pub fn with_keyword_toggled(mut self, keyword: &str) -> Self {
        self.keywords = toggle_keyword(&self.keywords, keyword);
        self
    }
}

/// Filter papers by advanced criteria alone.
pub fn filter_advanced<'a, I>(papers: I, criteria: &AdvancedCriteria) -> Vec<&'a Paper>
where
    I: IntoIterator<Item = &'a Paper>,
{
    criteria.apply(papers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_domain::Category;

    fn paper(id: &str, year: i32, citations: u32, keywords: &[&str]) -> Paper {
        let mut paper = Paper::new(id, format!("Paper {id}"), Category::Physics);
        paper.year = year;
        paper.citations = citations;
        paper.keywords = keywords.iter().map(|k| k.to_string()).collect();
        paper
    }

    #[test]
    fn year_range_swaps_reversed_bounds() {
        let range = YearRange::new(2024, 2020);
        assert_eq!(range, YearRange { from: 2020, to: 2024 });
        assert!(range.contains(2020));
        assert!(range.contains(2024));
        assert!(!range.contains(2019));
    }

    #[test]
    fn reversed_literal_range_still_filters() {
        let criteria = AdvancedCriteria {
            year_range: Some(YearRange { from: 2024, to: 2020 }),
            ..Default::default()
        };
        let papers = vec![paper("in", 2022, 0, &[]), paper("out", 2019, 0, &[])];

        let ids: Vec<&str> = filter_advanced(&papers, &criteria)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["in"]);
    }

    #[test]
    fn deserialized_range_is_normalized() {
        let range: YearRange = serde_json::from_str(r#"{"from":2024,"to":2020}"#).unwrap();
        assert_eq!(range, YearRange::new(2020, 2024));
        assert!(range.contains(2022));
    }

    #[test]
    fn parse_bound_keeps_current_on_garbage() {
        assert_eq!(parse_bound(2020, "abc"), 2020);
        assert_eq!(parse_bound(2020, ""), 2020);
        assert_eq!(parse_bound(2020, " 2018 "), 2018);
        assert_eq!(parse_bound(0u32, "-5"), 0);
    }

    #[test]
    fn default_criteria_match_everything() {
        let criteria = AdvancedCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&paper("a", 1950, 0, &[])));
    }

    #[test]
    fn all_bounds_apply() {
        let papers = vec![
            paper("old", 2015, 500, &["Machine Learning"]),
            paper("few", 2022, 3, &["Machine Learning"]),
            paper("nokw", 2022, 500, &["Topology"]),
            paper("hit", 2022, 500, &["machine learning", "Topology"]),
        ];
        let criteria = AdvancedCriteria::panel_defaults()
            .with_min_citations("10")
            .with_keyword_toggled("Machine Learning");

        let ids: Vec<&str> = criteria.apply(&papers).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["hit"]);
    }

    #[test]
    fn year_edits_are_lenient() {
        let criteria = AdvancedCriteria::panel_defaults()
            .with_year_from("not a year")
            .with_year_to("2030");
        assert_eq!(criteria.year_range, Some(YearRange::new(2020, 2030)));
    }

    #[test]
    fn year_edit_on_open_range_starts_from_defaults() {
        let criteria = AdvancedCriteria::default().with_year_to("2022");
        assert_eq!(criteria.year_range, Some(YearRange::new(2020, 2022)));
    }

    #[test]
    fn keyword_toggle_twice_removes() {
        let criteria = AdvancedCriteria::default()
            .with_keyword_toggled("Blockchain")
            .with_keyword_toggled("Blockchain");
        assert!(criteria.keywords.is_empty());
    }
}
