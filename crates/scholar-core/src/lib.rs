//! scholar-core: Filtering, recommendation, and browsing state.
//!
//! Every engine here is a pure, total function over a borrowed paper list:
//! - `filter`: free-text query and category selector (stable subset)
//! - `criteria`: year range, minimum citations, required keywords
//! - `expression`: single search-box syntax combining all of the above
//! - `recommend`: keyword co-occurrence with the favorites set
//! - `favorites`: insertion-ordered bookmark set with a pure toggle
//! - `state`: reducer-style owner of the current view
//!
//! `config` loads user settings from TOML.

pub mod config;
pub mod criteria;
pub mod expression;
pub mod favorites;
pub mod filter;
pub mod keywords;
pub mod recommend;
pub mod state;

pub use config::*;
pub use criteria::*;
pub use expression::*;
pub use favorites::*;
pub use filter::*;
pub use keywords::*;
pub use recommend::*;
pub use state::*;
