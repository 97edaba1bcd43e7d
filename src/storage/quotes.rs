//! Quote persistence
//!
//! Saves the quote collection and the selected filter under two independent
//! keys of a [`KeyValueStore`].

use std::sync::Arc;

use crate::storage::transfer::parse_document;
use crate::storage::{KeyValueStore, StorageError};
use crate::types::{FilterSelection, Quote};

/// Key holding the serialized collection. Bump the suffix to make an
/// incompatible format change; old data is then simply ignored.
pub const QUOTES_KEY: &str = "quotes_v1.json";

/// Key holding the last selected filter
pub const FILTER_KEY: &str = "selected_filter";

/// Reads and writes the quote collection
#[derive(Clone)]
pub struct QuotePersistence {
    backend: Arc<dyn KeyValueStore>,
}

impl QuotePersistence {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Save the whole collection
    pub fn save(&self, quotes: &[Quote]) -> Result<(), StorageError> {
        let json = serde_json::to_string(quotes)?;
        self.backend.set(QUOTES_KEY, &json)?;
        tracing::debug!("Saved {} quotes", quotes.len());
        Ok(())
    }

    /// Load the stored collection
    ///
    /// Returns `None` when nothing is stored, or when the stored data cannot be
    /// read or has an unexpected shape.
    pub fn load(&self) -> Option<Vec<Quote>> {
        let raw = match self.backend.get(QUOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No stored quotes found");
                return None;
            }
            Err(e) => {
                tracing::error!("Failed to read stored quotes: {}", e);
                return None;
            }
        };

        match parse_document(&raw) {
            Ok(quotes) => {
                tracing::debug!("Loaded {} quotes from storage", quotes.len());
                Some(quotes)
            }
            Err(e) => {
                tracing::warn!("Stored quotes had unexpected shape; ignoring: {}", e);
                None
            }
        }
    }

    pub fn save_filter(&self, filter: &FilterSelection) -> Result<(), StorageError> {
        self.backend.set(FILTER_KEY, filter.as_str())
    }

    /// Last selected filter, `All` if absent or unreadable
    pub fn load_filter(&self) -> FilterSelection {
        match self.backend.get(FILTER_KEY) {
            Ok(Some(raw)) => FilterSelection::parse(&raw),
            Ok(None) => FilterSelection::All,
            Err(e) => {
                tracing::warn!("Failed to read stored filter: {}", e);
                FilterSelection::All
            }
        }
    }
}
