//! Quote types
//!
//! Defines the quote record and the category filter selection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Stable identity, generated when the quote is created
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The quote itself. Also used as fallback identity when reconciling
    /// records that were created elsewhere.
    pub text: String,
    /// Category label
    pub category: String,
}

impl Quote {
    /// Create a new quote with a fresh id
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category: category.into(),
        }
    }

    /// Both fields carry something other than whitespace
    pub fn is_well_formed(&self) -> bool {
        !self.text.trim().is_empty() && !self.category.trim().is_empty()
    }
}

/// The category filter chosen in the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// Every category
    #[default]
    All,
    /// Only quotes with exactly this category
    Category(String),
}

impl FilterSelection {
    /// Sentinel value for "no filter"
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL {
            FilterSelection::All
        } else {
            FilterSelection::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => Self::ALL,
            FilterSelection::Category(category) => category,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(category) => quote.category == *category,
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for FilterSelection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// A category that would collide with the "all" filter sentinel
pub fn is_reserved_category(category: &str) -> bool {
    category.trim() == FilterSelection::ALL
}

/// Built-in quotes used when nothing valid is stored yet
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new("Your limitation—it's only your imagination.", "Inspiration"),
        Quote::new(
            "Push yourself, because no one else is going to do it for you.",
            "Discipline",
        ),
        Quote::new("Dream it. Wish it. Do it.", "Action"),
    ]
}
