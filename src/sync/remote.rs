//! Remote quote source
//!
//! The remote endpoint answers a GET with a JSON array of objects carrying at
//! least a `title` string. Only the first `fetch_limit` entries are used, each
//! becoming a quote in one fixed category.

use async_trait::async_trait;
use serde_json::Value;

use crate::storage::settings::AppSettings;
use crate::sync::SyncError;
use crate::types::Quote;

/// Anything that can hand out a batch of remote quotes
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError>;
}

/// HTTP-backed remote source
pub struct HttpRemoteSource {
    client: reqwest::Client,
    url: String,
    fetch_limit: usize,
    category: String,
}

impl HttpRemoteSource {
    pub fn with_timeout(
        url: impl Into<String>,
        fetch_limit: usize,
        category: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(concat!("QuoteDeck/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            url: url.into(),
            fetch_limit,
            category: category.into(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::with_timeout(
            settings.remote_url.clone(),
            settings.fetch_limit,
            settings.remote_category.trim(),
            settings.request_timeout(),
        )
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError> {
        tracing::debug!("Fetching remote quotes from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SyncError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;

        let items = body
            .as_array()
            .ok_or_else(|| SyncError::Parse("expected a JSON array".to_string()))?;

        Ok(map_remote_items(items, self.fetch_limit, &self.category))
    }
}

/// Turn the first `limit` remote entries into quotes
///
/// Titles are trimmed; entries without a non-empty string `title` are skipped.
pub fn map_remote_items(items: &[Value], limit: usize, category: &str) -> Vec<Quote> {
    items
        .iter()
        .take(limit)
        .filter_map(|item| item.get("title").and_then(Value::as_str))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(|title| Quote::new(title, category))
        .collect()
}

/// Quotes from one fetch attempt
#[derive(Debug, Default)]
pub struct RemoteBatch {
    pub quotes: Vec<Quote>,
    /// Set when the fetch failed; `quotes` is then empty
    pub error: Option<SyncError>,
}

/// Fetch from `source` without ever failing
///
/// A failed fetch is logged and yields an empty batch.
pub async fn fetch_remote_quotes(source: &dyn RemoteSource) -> RemoteBatch {
    match source.fetch_quotes().await {
        Ok(quotes) => {
            tracing::info!("Fetched {} remote quotes", quotes.len());
            RemoteBatch {
                quotes,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!("Failed to fetch remote quotes: {}", e);
            RemoteBatch {
                quotes: Vec::new(),
                error: Some(e),
            }
        }
    }
}
