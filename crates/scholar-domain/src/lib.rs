//! Academic paper domain types for scholar
//!
//! This crate provides the record model shared by the browsing engines:
//! - Paper: A single catalog entry (title, authors, venue, keywords, ...)
//! - Category / CategorySelector: The closed subject set and the "all" sentinel
//! - Validation: Field checks run while a catalog is loaded
//! - Catalog: The immutable record list loaded once at startup

pub mod catalog;
pub mod category;
pub mod paper;
pub mod validation;

pub use catalog::*;
pub use category::*;
pub use paper::*;
pub use validation::*;
