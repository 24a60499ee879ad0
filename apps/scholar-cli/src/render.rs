//! Plain-text and JSON output.

use scholar_core::LibrarySummary;
use scholar_domain::Paper;
use serde::Serialize;

/// JSON body for `search` and `recommend`.
#[derive(Debug, Serialize)]
pub struct SearchOutput<'a> {
    pub summary: LibrarySummary,
    pub papers: Vec<&'a Paper>,
    pub recommendations: Vec<&'a Paper>,
}

/// Multi-line card for one paper.
pub fn paper_card(paper: &Paper, favorite: bool) -> String {
    let marker = if favorite { "*" } else { " " };
    let mut card = format!("{marker} [{}] {}\n", paper.id, paper.title);
    card.push_str(&format!(
        "    {} ({}) | {} citations | rating {:.1}\n",
        paper.authors.join(", "),
        paper.year,
        paper.citations,
        paper.rating
    ));
    card.push_str(&format!("    {} \u{2022} {}\n", paper.journal, paper.category));
    if !paper.keywords.is_empty() {
        card.push_str(&format!("    keywords: {}\n", paper.keywords.join(", ")));
    }
    card
}

/// One-line entry for the recommendation list.
pub fn recommendation_line(paper: &Paper) -> String {
    format!(
        "  [{}] {} - {} ({}) | rating {:.1} | {} citations",
        paper.id,
        paper.title,
        paper.lead_author(),
        paper.year,
        paper.rating,
        paper.citations
    )
}

/// `name (count)` rows, one per line.
pub fn counted_list<'a>(rows: impl IntoIterator<Item = (&'a str, usize)>) -> String {
    rows.into_iter()
        .map(|(name, count)| format!("{name} ({count})\n"))
        .collect()
}
