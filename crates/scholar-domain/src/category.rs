//! Subject categories and the category selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject category of a paper. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Physics,
    Mathematics,
    Biology,
    Chemistry,
    Medicine,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Self::ComputerScience,
        Self::Physics,
        Self::Mathematics,
        Self::Biology,
        Self::Chemistry,
        Self::Medicine,
    ];

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Physics => "Physics",
            Self::Mathematics => "Mathematics",
            Self::Biology => "Biology",
            Self::Chemistry => "Chemistry",
            Self::Medicine => "Medicine",
        }
    }

    /// Parse from a display name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Category restriction applied by the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategorySelector {
    /// The "all" sentinel: no restriction.
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    /// Sentinel name for [`CategorySelector::All`].
    pub const ALL_NAME: &'static str = "all";

    /// Parse a selector string.
    ///
    /// `"all"` (any case) or an empty string is the sentinel; otherwise the
    /// input must name a category. Unknown names return `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(Self::ALL_NAME) {
            return Some(Self::All);
        }
        Category::from_name(input).map(Self::Only)
    }

    /// Whether a paper in `category` passes this selector.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Every selector in menu order, sentinel first.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }

    /// Display name; the sentinel renders as `"all"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_NAME,
            Self::Only(category) => category.display_name(),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
