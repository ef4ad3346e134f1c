//! Task categories and the category selector used by the feed.

use super::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used by the selector to match every category.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Fixed set of marketplace task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Moving help.
    Moving,
    /// Cleaning.
    Cleaning,
    /// Delivery and errands.
    Delivery,
    /// Furniture assembly.
    Assembly,
    /// Gardening and yard work.
    Gardening,
    /// Painting.
    Painting,
    /// Pet care.
    #[serde(rename = "Pet Care")]
    PetCare,
    /// Technical help.
    #[serde(rename = "Tech Help")]
    TechHelp,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 8] = [
        Self::Moving,
        Self::Cleaning,
        Self::Delivery,
        Self::Assembly,
        Self::Gardening,
        Self::Painting,
        Self::PetCare,
        Self::TechHelp,
    ];

    /// Returns the display name, which is also the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Moving => "Moving",
            Self::Cleaning => "Cleaning",
            Self::Delivery => "Delivery",
            Self::Assembly => "Assembly",
            Self::Gardening => "Gardening",
            Self::Painting => "Painting",
            Self::PetCare => "Pet Care",
            Self::TechHelp => "Tech Help",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseCategoryError(value.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection applied to the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every category is shown.
    #[default]
    All,
    /// Only tasks of the given category are shown.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` when a task with the given category passes the filter.
    ///
    /// Task categories are compared verbatim against the display name.
    #[must_use]
    pub fn matches(self, task_category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => task_category == category.as_str(),
        }
    }

    /// Returns the selector label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl TryFrom<&str> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(ALL_CATEGORIES_LABEL) {
            return Ok(Self::All);
        }
        Category::try_from(value).map(Self::Only)
    }
}
