//! Scholar CLI
//!
//! Search, filter, and bookmark papers from a fixed catalog, and list
//! keyword-based recommendations.

mod cli;
mod render;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use scholar_core::{
    Action, AdvancedCriteria, BrowserConfig, BrowserState, FavoriteSet, POPULAR_KEYWORDS,
};
use scholar_domain::{Catalog, CategorySelector};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, SearchArgs};
use render::SearchOutput;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, origin) = BrowserConfig::load_with_origin(cli.config.as_deref())?;

    // Setup logging (stderr, so --json output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    origin.log();

    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = Arc::new(load_catalog(catalog_path)?);
    let state =
        BrowserState::new(catalog).with_recommendation_limit(config.recommendation_limit);

    match cli.command {
        Command::Search(args) => run_search(state, &args, &config, cli.json),
        Command::Recommend { favorites } => run_recommend(state, favorites, cli.json),
        Command::Categories => run_categories(&state, cli.json),
        Command::Keywords => run_keywords(&state, cli.json),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, scholar_domain::CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

fn with_favorites(state: BrowserState, favorites: Vec<String>) -> BrowserState {
    let favorites: FavoriteSet = favorites.into_iter().collect();
    favorites
        .iter()
        .fold(state, |state, id| state.apply(Action::ToggleFavorite(id.to_string())))
}

fn run_search(
    state: BrowserState,
    args: &SearchArgs,
    config: &BrowserConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = state.apply(args.query_action());

    if let Some(name) = &args.category {
        match CategorySelector::parse(name) {
            Some(selector) => state = state.apply(Action::SelectCategory(selector)),
            None => tracing::warn!("Unknown category {:?}, showing all", name),
        }
    }

    if args.has_advanced() {
        let mut advanced = state.criteria().advanced.clone().unwrap_or_default();
        if advanced.year_range.is_none() && (args.from.is_some() || args.to.is_some()) {
            advanced.year_range = Some(config.default_year_range);
        }
        if let Some(from) = &args.from {
            advanced = advanced.with_year_from(from);
        }
        if let Some(to) = &args.to {
            advanced = advanced.with_year_to(to);
        }
        if let Some(min) = &args.min_citations {
            advanced = advanced.with_min_citations(min);
        }
        for keyword in &args.keywords {
            if !advanced.keywords.contains(keyword) {
                advanced = advanced.with_keyword_toggled(keyword);
            }
        }
        state = state.apply(Action::ApplyAdvanced(advanced));
    }

    let state = with_favorites(state, args.favorites.clone());
    let visible = state.visible();
    let recommendations = state.recommendations();

    if json {
        let output = SearchOutput {
            summary: state.summary(),
            papers: visible,
            recommendations,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for paper in &visible {
        println!("{}", render::paper_card(paper, state.is_favorite(&paper.id)));
    }
    println!("{}", state.summary().results_label());

    if !state.favorites().is_empty() {
        print_recommendations(&recommendations);
    }
    Ok(())
}

fn run_recommend(
    state: BrowserState,
    favorites: Vec<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = with_favorites(state, favorites);
    for id in state.favorites().iter() {
        if !state.catalog().contains(id) {
            tracing::warn!("Favorite {} is not in the catalog", id);
        }
    }
    let recommendations = state.recommendations();

    if json {
        let output = SearchOutput {
            summary: state.summary(),
            papers: Vec::new(),
            recommendations,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_recommendations(&recommendations);
    Ok(())
}

fn print_recommendations(recommendations: &[&scholar_domain::Paper]) {
    println!();
    println!("Recommended");
    if recommendations.is_empty() {
        println!("  Bookmark papers to get personalized recommendations");
    }
    for paper in recommendations {
        println!("{}", render::recommendation_line(paper));
    }
}

fn run_categories(state: &BrowserState, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let papers = state.catalog().papers();
    let rows: Vec<(&str, usize)> = CategorySelector::options()
        .into_iter()
        .map(|selector| {
            let count = papers.iter().filter(|p| selector.matches(p.category)).count();
            (selector.display_name(), count)
        })
        .collect();

    print_counts(rows, json)
}

fn run_keywords(state: &BrowserState, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let papers = state.catalog().papers();
    let rows: Vec<(&str, usize)> = POPULAR_KEYWORDS
        .iter()
        .map(|&keyword| {
            let criteria = AdvancedCriteria::default().with_keyword_toggled(keyword);
            (keyword, criteria.apply(papers).len())
        })
        .collect();

    print_counts(rows, json)
}

fn print_counts(rows: Vec<(&str, usize)>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = rows
            .into_iter()
            .map(|(name, count)| (name.to_string(), count.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        print!("{}", render::counted_list(rows));
    }
    Ok(())
}
