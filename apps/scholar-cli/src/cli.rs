//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use scholar_core::{has_filter_tokens, Action};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scholar", version, about = "Browse an in-memory catalog of academic papers")]
pub struct Cli {
    /// Config file (defaults to <config dir>/scholar/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON catalog to load instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the catalog and show matching papers
    Search(SearchArgs),
    /// Recommend papers related to a set of favorites
    Recommend {
        /// Favorite paper id (repeatable)
        #[arg(long = "favorite", short = 'f', required = true)]
        favorites: Vec<String>,
    },
    /// List category selectors with paper counts
    Categories,
    /// List the popular keyword palette with paper counts
    Keywords,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search text. With `cat:`, `year:`, `cites:`, or `kw:` tokens it is parsed
    /// as a filter expression (whitespace collapsed, quotes group words);
    /// otherwise it is matched literally
    pub query: Vec<String>,

    /// Category name, or "all"
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Earliest publication year (non-numeric input is ignored)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest publication year (non-numeric input is ignored)
    #[arg(long)]
    pub to: Option<String>,

    /// Minimum citation count (non-numeric input is ignored)
    #[arg(long)]
    pub min_citations: Option<String>,

    /// Required keyword (repeatable)
    #[arg(long = "keyword", short = 'k')]
    pub keywords: Vec<String>,

    /// Favorite paper id (repeatable); enables recommendations
    #[arg(long = "favorite", short = 'f')]
    pub favorites: Vec<String>,
}

impl SearchArgs {
    /// The positional words as one filter expression.
    pub fn expression(&self) -> String {
        self.query.join(" ")
    }

    /// The action for the positional words: a literal search unless they
    /// contain filter tokens.
    pub fn query_action(&self) -> Action {
        let expression = self.expression();
        if has_filter_tokens(&expression) {
            Action::ApplyExpression(expression)
        } else {
            Action::Search(expression)
        }
    }

    /// Whether any advanced-filter flag was given.
    pub fn has_advanced(&self) -> bool {
        self.from.is_some()
            || self.to.is_some()
            || self.min_citations.is_some()
            || !self.keywords.is_empty()
    }
}
