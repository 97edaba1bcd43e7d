//! Category index
//!
//! Derives the category list shown in the filter selector.

use std::collections::HashSet;

use crate::types::{FilterSelection, Quote};

/// Distinct categories in first-seen order
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = HashSet::new();
    quotes
        .iter()
        .filter(|q| seen.insert(q.category.as_str()))
        .map(|q| q.category.clone())
        .collect()
}

/// Options for the filter selector: the "all" sentinel, then every category
pub fn filter_options(quotes: &[Quote]) -> Vec<String> {
    std::iter::once(FilterSelection::ALL.to_string())
        .chain(distinct_categories(quotes))
        .collect()
}

pub fn has_category(quotes: &[Quote], category: &str) -> bool {
    quotes.iter().any(|q| q.category == category)
}

/// Whether `filter` can currently be selected
pub fn is_selectable(quotes: &[Quote], filter: &FilterSelection) -> bool {
    match filter {
        FilterSelection::All => true,
        FilterSelection::Category(category) => has_category(quotes, category),
    }
}
