//! Quote store
//!
//! Sole owner of the quote collection and the selected filter. Every mutation
//! writes through to [`QuotePersistence`]; a failed write is logged and the
//! in-memory state stays authoritative.

use std::collections::HashSet;

use uuid::Uuid;

use crate::quotes::categories;
use crate::quotes::QuoteError;
use crate::storage::quotes::QuotePersistence;
use crate::types::{is_reserved_category, seed_quotes, FilterSelection, Quote};

pub struct QuoteStore {
    quotes: Vec<Quote>,
    filter: FilterSelection,
    /// Index of the quote shown last in this session
    last_shown: Option<usize>,
    persistence: QuotePersistence,
}

impl QuoteStore {
    /// Open the store from persisted data, falling back to the seed quotes
    pub fn open(persistence: QuotePersistence) -> Self {
        let quotes = persistence.load().unwrap_or_else(|| {
            tracing::info!("Starting from built-in quotes");
            seed_quotes()
        });

        let mut filter = persistence.load_filter();
        if !categories::is_selectable(&quotes, &filter) {
            tracing::warn!("Stored filter '{}' no longer exists, showing all", filter);
            filter = FilterSelection::All;
        }

        tracing::info!("Quote store opened with {} quotes", quotes.len());

        Self {
            quotes,
            filter,
            last_shown: None,
            persistence,
        }
    }

    /// Add a quote typed by the user
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::Validation(
                "both the quote and the category are required".to_string(),
            ));
        }
        if is_reserved_category(category) {
            return Err(QuoteError::Validation(format!(
                "'{}' is reserved for the show-all filter",
                category
            )));
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.persist();
        Ok(quote)
    }

    /// Current collection in insertion order
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Swap the entire collection
    pub fn replace(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
        self.last_shown = None;
        self.reconcile_filter();
        self.persist();
    }

    /// Append a validated batch without reconciliation
    ///
    /// Quotes whose id is already taken get a fresh one so ids stay unique.
    /// Returns the appended quotes, in order, with their final ids.
    pub fn extend(&mut self, quotes: Vec<Quote>) -> Vec<Quote> {
        let mut taken: HashSet<Uuid> = self.quotes.iter().map(|q| q.id).collect();
        let start = self.quotes.len();

        for mut quote in quotes {
            if !taken.insert(quote.id) {
                quote.id = Uuid::new_v4();
                taken.insert(quote.id);
            }
            self.quotes.push(quote);
        }

        self.persist();
        self.quotes[start..].to_vec()
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    /// Select a filter; a category filter must name an existing category
    pub fn set_filter(&mut self, filter: FilterSelection) -> Result<(), QuoteError> {
        if !categories::is_selectable(&self.quotes, &filter) {
            return Err(QuoteError::Validation(format!(
                "unknown category '{}'",
                filter
            )));
        }

        self.filter = filter;
        if let Err(e) = self.persistence.save_filter(&self.filter) {
            tracing::warn!("Failed to save selected filter: {}", e);
        }
        Ok(())
    }

    pub fn last_shown(&self) -> Option<usize> {
        self.last_shown
    }

    pub fn set_last_shown(&mut self, index: usize) {
        self.last_shown = Some(index);
    }

    fn reconcile_filter(&mut self) {
        if !categories::is_selectable(&self.quotes, &self.filter) {
            tracing::info!("Filter '{}' no longer matches any quote, showing all", self.filter);
            self.filter = FilterSelection::All;
            if let Err(e) = self.persistence.save_filter(&self.filter) {
                tracing::warn!("Failed to save selected filter: {}", e);
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.quotes) {
            tracing::warn!("Failed to save quotes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::quotes::QUOTES_KEY;
    use crate::storage::{KeyValueStore, MemoryStore, StorageError};
    use std::sync::Arc;

    /// Backend whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn open_memory() -> (Arc<MemoryStore>, QuoteStore) {
        let backend = Arc::new(MemoryStore::new());
        let store = QuoteStore::open(QuotePersistence::new(backend.clone()));
        (backend, store)
    }

    #[test]
    fn test_open_falls_back_to_seed() {
        let (_, store) = open_memory();
        assert_eq!(store.len(), seed_quotes().len());
        assert_eq!(store.filter(), &FilterSelection::All);
    }

    #[test]
    fn test_open_ignores_invalid_storage() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(QUOTES_KEY, r#"{"not":"an array"}"#).unwrap();
        let store = QuoteStore::open(QuotePersistence::new(backend));
        assert_eq!(store.len(), seed_quotes().len());
    }

    #[test]
    fn test_add_trims_and_persists() {
        let (backend, mut store) = open_memory();
        let quote = store.add("  Keep going.  ", " Grit ").unwrap();
        assert_eq!(quote.text, "Keep going.");
        assert_eq!(quote.category, "Grit");
        assert_eq!(store.all().last(), Some(&quote));

        let reopened = QuoteStore::open(QuotePersistence::new(backend));
        assert_eq!(reopened.all(), store.all());
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let (_, mut store) = open_memory();
        let before = store.len();
        assert!(matches!(store.add("   ", "Grit"), Err(QuoteError::Validation(_))));
        assert!(matches!(store.add("Text", ""), Err(QuoteError::Validation(_))));
        assert!(matches!(store.add("Text", " all "), Err(QuoteError::Validation(_))));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let (_, mut store) = open_memory();
        let before = store.len();
        store.add("Same", "X").unwrap();
        store.add("Same", "X").unwrap();
        assert_eq!(store.len(), before + 2);
    }

    #[test]
    fn test_replace_resets_missing_filter() {
        let (backend, mut store) = open_memory();
        store.add("A", "Solo").unwrap();
        store.set_filter(FilterSelection::parse("Solo")).unwrap();

        store.replace(vec![Quote::new("A", "server")]);
        assert_eq!(store.filter(), &FilterSelection::All);
        assert_eq!(
            QuotePersistence::new(backend).load_filter(),
            FilterSelection::All
        );
    }

    #[test]
    fn test_set_filter_requires_existing_category() {
        let (_, mut store) = open_memory();
        assert!(store.set_filter(FilterSelection::parse("Motivation")).is_ok());
        assert!(matches!(
            store.set_filter(FilterSelection::parse("Nope")),
            Err(QuoteError::Validation(_))
        ));
        assert_eq!(store.filter(), &FilterSelection::parse("Motivation"));
    }

    #[test]
    fn test_filter_restored_on_open() {
        let (backend, mut store) = open_memory();
        store.set_filter(FilterSelection::parse("Action")).unwrap();
        let reopened = QuoteStore::open(QuotePersistence::new(backend));
        assert_eq!(reopened.filter(), &FilterSelection::parse("Action"));
    }

    #[test]
    fn test_extend_keeps_ids_unique() {
        let (_, mut store) = open_memory();
        let existing = store.all()[0].clone();
        let added = store.extend(vec![existing.clone(), Quote::new("New", "X")]);

        assert_eq!(added.len(), 2);
        assert_ne!(added[0].id, existing.id);
        assert_eq!(added[1].text, "New");
        assert_eq!(store.all().last(), added.last());
        let ids: HashSet<Uuid> = store.all().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), store.len());
        assert_eq!(store.all()[store.len() - 2].text, existing.text);
    }

    #[test]
    fn test_write_failures_do_not_abort() {
        let mut store = QuoteStore::open(QuotePersistence::new(Arc::new(ReadOnlyStore)));
        let before = store.len();
        store.add("Still here", "X").unwrap();
        store.set_filter(FilterSelection::parse("X")).unwrap();
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.filter(), &FilterSelection::parse("X"));
    }
}
