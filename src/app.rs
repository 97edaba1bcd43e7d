//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use crate::quotes::{QuoteBook, QuoteStore};
use crate::storage::quotes::QuotePersistence;
use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::MemoryStore;
use crate::sync::{run_periodic_sync, HttpRemoteSource};
use crate::types::{FilterSelection, Notification, Quote};
use crate::ui::Layout;

/// Toasts kept on screen at once
const MAX_VISIBLE_NOTIFICATIONS: usize = 4;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub book: Arc<QuoteBook>,
    pub settings: Signal<AppSettings>,
    pub current_quote: Signal<Option<Quote>>,
    pub categories: Signal<Vec<String>>,
    pub filter: Signal<FilterSelection>,
    pub quote_count: Signal<usize>,
    pub notifications: Signal<Vec<Notification>>,
    pub is_syncing: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let book = match QuoteBook::open(&settings) {
            Ok(book) => book,
            Err(e) => {
                tracing::error!("Quote storage unavailable, changes will not be saved: {}", e);
                let persistence = QuotePersistence::new(Arc::new(MemoryStore::new()));
                QuoteBook::new(
                    QuoteStore::open(persistence),
                    Arc::new(HttpRemoteSource::from_settings(&settings)),
                )
            }
        };
        tracing::info!("AppState initialized");

        Self {
            book: Arc::new(book),
            settings: Signal::new(settings),
            current_quote: Signal::new(None),
            categories: Signal::new(vec![FilterSelection::ALL.to_string()]),
            filter: Signal::new(FilterSelection::All),
            quote_count: Signal::new(0),
            notifications: Signal::new(Vec::new()),
            is_syncing: Signal::new(false),
        }
    }

    /// Pull categories, filter and count from the book
    pub async fn refresh(mut self) {
        let categories = self.book.list_categories().await;
        let filter = self.book.filter().await;
        let count = self.book.quotes().await.len();
        self.categories.set(categories);
        self.filter.set(filter);
        self.quote_count.set(count);
        self.is_syncing.set(self.book.is_syncing());
    }

    /// Show a random quote for the current filter
    pub async fn show_random(mut self) {
        let filter = self.filter.peek().clone();
        let quote = self.book.displayable_quote(&filter).await;
        self.current_quote.set(quote);
    }

    pub fn push_notification(&mut self, notification: Notification) {
        let mut notifications = self.notifications.write();
        notifications.push(notification);
        let overflow = notifications.len().saturating_sub(MAX_VISIBLE_NOTIFICATIONS);
        notifications.drain(..overflow);
    }

    pub fn dismiss_notification(&mut self, id: uuid::Uuid) {
        self.notifications.write().retain(|n| n.id != id);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    // Initial render data
    {
        let app_state = app_state.clone();
        use_hook(move || {
            spawn(async move {
                app_state.clone().refresh().await;
                app_state.show_random().await;
            });
        });
    }

    // Book notifications -> toasts, and refresh after every change
    {
        let app_state = app_state.clone();
        use_hook(move || {
            let mut receiver = app_state.book.subscribe();
            spawn(async move {
                let mut app_state = app_state;
                loop {
                    match receiver.recv().await {
                        Ok(notification) => {
                            app_state.push_notification(notification);
                            app_state.clone().refresh().await;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("Dropped {} notifications", skipped);
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            });
        });
    }

    // Periodic remote sync
    {
        let app_state = app_state.clone();
        use_hook(move || {
            let settings = app_state.settings.peek().clone();
            if settings.auto_sync {
                let book = app_state.book.clone();
                spawn(run_periodic_sync(book, settings.sync_interval()));
            } else {
                tracing::info!("Automatic sync disabled");
            }
        });
    }

    rsx! {
        Layout {}
    }
}
