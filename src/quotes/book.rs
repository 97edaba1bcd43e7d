//! Quote book
//!
//! The core facade used by the UI. Owns the [`QuoteStore`] behind an async
//! mutex so every mutation path (add, import, merge, filter change) is
//! serialized, and publishes user-facing [`Notification`]s on a broadcast
//! channel.

use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::{broadcast, Mutex};

use crate::quotes::{categories, merge, selection, QuoteError, QuoteStore};
use crate::storage::quotes::QuotePersistence;
use crate::storage::settings::AppSettings;
use crate::storage::transfer;
use crate::storage::{FileStore, StorageError};
use crate::sync::{
    fetch_remote_quotes, HttpRemoteSource, RemoteSource, SyncGuard, SyncOutcome, SyncReport,
};
use crate::types::{FilterSelection, Notification, Quote};

const NOTIFICATION_CAPACITY: usize = 64;

pub struct QuoteBook {
    store: Mutex<QuoteStore>,
    remote: Arc<dyn RemoteSource>,
    sync_guard: SyncGuard,
    notifier: broadcast::Sender<Notification>,
}

impl QuoteBook {
    pub fn new(store: QuoteStore, remote: Arc<dyn RemoteSource>) -> Self {
        let (notifier, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            store: Mutex::new(store),
            remote,
            sync_guard: SyncGuard::new(),
            notifier,
        }
    }

    /// Open the book described by `settings`: file-backed storage and the
    /// HTTP remote source
    pub fn open(settings: &AppSettings) -> Result<Self, StorageError> {
        let dir = settings.quotes_dir()?;
        tracing::info!("Opening quote book in {}", dir.display());

        let persistence = QuotePersistence::new(Arc::new(FileStore::new(dir)));
        let remote = HttpRemoteSource::from_settings(settings);
        Ok(Self::new(QuoteStore::open(persistence), Arc::new(remote)))
    }

    /// Receive notifications published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    fn notify(&self, notification: Notification) {
        if self.notifier.send(notification).is_err() {
            tracing::trace!("No notification subscribers");
        }
    }

    /// Random quote for `filter`, never the same one twice in a row
    pub async fn displayable_quote(&self, filter: &FilterSelection) -> Option<Quote> {
        let mut store = self.store.lock().await;
        let picked = {
            let mut rng = rand::thread_rng();
            selection::pick_quote(store.all(), filter, store.last_shown(), &mut rng)
        };
        remember(&mut store, picked)
    }

    /// Same as [`displayable_quote`](Self::displayable_quote) with a caller-supplied RNG
    pub async fn displayable_quote_with<R: Rng + ?Sized>(
        &self,
        filter: &FilterSelection,
        rng: &mut R,
    ) -> Option<Quote> {
        let mut store = self.store.lock().await;
        let picked = selection::pick_quote(store.all(), filter, store.last_shown(), rng);
        remember(&mut store, picked)
    }

    pub async fn add_quote(&self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let result = self.store.lock().await.add(text, category);
        match &result {
            Ok(quote) => {
                tracing::info!("Added quote in category '{}'", quote.category);
                self.notify(Notification::success(format!(
                    "New quote added to {}",
                    quote.category
                )));
            }
            Err(e) => self.notify(Notification::error(format!(
                "Could not add quote: {}",
                e
            ))),
        }
        result
    }

    /// Filter options: "all" followed by every distinct category
    pub async fn list_categories(&self) -> Vec<String> {
        categories::filter_options(self.store.lock().await.all())
    }

    /// Snapshot of the collection
    pub async fn quotes(&self) -> Vec<Quote> {
        self.store.lock().await.all().to_vec()
    }

    pub async fn filter(&self) -> FilterSelection {
        self.store.lock().await.filter().clone()
    }

    pub async fn set_filter(&self, filter: FilterSelection) -> Result<(), QuoteError> {
        self.store.lock().await.set_filter(filter)
    }

    /// Validate and append every quote of `raw`, or none of them
    ///
    /// Returns the appended quotes in document order. The last one counts as
    /// shown, so the caller can display it without a repeat following it.
    pub async fn import_document(&self, raw: &str) -> Result<Vec<Quote>, QuoteError> {
        let parsed = transfer::parse_document(raw).map_err(QuoteError::from);
        self.finish_import(parsed).await
    }

    pub async fn import_from_file(&self, path: &Path) -> Result<Vec<Quote>, QuoteError> {
        let parsed = transfer::read_document(path)
            .await
            .map_err(QuoteError::from);
        self.finish_import(parsed).await
    }

    async fn finish_import(
        &self,
        parsed: Result<Vec<Quote>, QuoteError>,
    ) -> Result<Vec<Quote>, QuoteError> {
        match parsed {
            Ok(quotes) => {
                let imported = {
                    let mut store = self.store.lock().await;
                    let imported = store.extend(quotes);
                    if !imported.is_empty() {
                        let last = store.len() - 1;
                        store.set_last_shown(last);
                    }
                    imported
                };
                tracing::info!("Imported {} quotes", imported.len());
                self.notify(Notification::success(format!(
                    "Imported {} quotes",
                    imported.len()
                )));
                Ok(imported)
            }
            Err(e) => {
                tracing::warn!("Import rejected: {}", e);
                self.notify(Notification::error(format!("Import failed: {}", e)));
                Err(e)
            }
        }
    }

    pub async fn export_document(&self) -> Result<String, QuoteError> {
        let quotes = self.quotes().await;
        Ok(transfer::export_document(&quotes)?)
    }

    pub async fn export_to_file(&self, path: &Path) -> Result<usize, QuoteError> {
        let quotes = self.quotes().await;
        match transfer::write_document(path, &quotes).await {
            Ok(()) => {
                self.notify(Notification::success(format!(
                    "Exported {} quotes to {}",
                    quotes.len(),
                    path.display()
                )));
                Ok(quotes.len())
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.notify(Notification::error(format!("Export failed: {}", e)));
                Err(e.into())
            }
        }
    }

    pub fn is_syncing(&self) -> bool {
        self.sync_guard.is_in_flight()
    }

    /// Fetch remote quotes and merge them in
    ///
    /// Returns [`SyncOutcome::Skipped`] right away while another sync is in
    /// flight. The store is not locked during the fetch, so local edits made
    /// meanwhile are merged against, not overwritten.
    pub async fn trigger_sync(&self) -> SyncOutcome {
        let Some(_permit) = self.sync_guard.try_acquire() else {
            return SyncOutcome::Skipped;
        };

        let batch = fetch_remote_quotes(self.remote.as_ref()).await;
        if let Some(error) = batch.error {
            self.notify(Notification::warning(format!("Sync failed: {}", error)));
            return SyncOutcome::Completed(SyncReport {
                error: Some(error.to_string()),
                ..SyncReport::default()
            });
        }

        let outcome = {
            let mut store = self.store.lock().await;
            let outcome = merge(store.all(), &batch.quotes);
            if !outcome.events.is_empty() {
                store.replace(outcome.quotes.clone());
            }
            outcome
        };

        for event in &outcome.events {
            self.notify(Notification::info(event.describe()));
        }

        let report = SyncReport {
            fetched: batch.quotes.len(),
            added: outcome.added(),
            conflicts: outcome.conflicts(),
            error: None,
        };
        tracing::info!(
            "Sync complete: {} fetched, {} new, {} conflicts",
            report.fetched,
            report.added,
            report.conflicts
        );
        self.notify(Notification::success(format!(
            "Sync complete: {} new, {} conflicts resolved",
            report.added, report.conflicts
        )));

        SyncOutcome::Completed(report)
    }
}

fn remember(store: &mut QuoteStore, picked: Option<(usize, Quote)>) -> Option<Quote> {
    picked.map(|(index, quote)| {
        store.set_last_shown(index);
        quote
    })
}
