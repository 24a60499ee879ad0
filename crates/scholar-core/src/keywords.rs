//! Keyword palette offered by the advanced filter.

/// Keywords offered as one-click filter chips, in display order.
pub const POPULAR_KEYWORDS: &[&str] = &[
    "Machine Learning",
    "Deep Learning",
    "Artificial Intelligence",
    "Neural Networks",
    "Computer Vision",
    "Natural Language Processing",
    "Quantum Computing",
    "Blockchain",
    "Bioinformatics",
    "Climate Change",
    "Renewable Energy",
    "Cancer Research",
];

/// Add `keyword` if absent, remove it if present. Returns the new selection.
///
/// Order of the remaining keywords is preserved; added keywords go last.
pub fn toggle_keyword(selected: &[String], keyword: &str) -> Vec<String> {
    if selected.iter().any(|k| k == keyword) {
        selected.iter().filter(|k| *k != keyword).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(keyword.to_string());
        next
    }
}
