//! Remote synchronization
//!
//! Fetches quotes from a remote endpoint, guards against overlapping syncs and
//! drives the periodic sync timer.

pub mod guard;
pub mod remote;
pub mod scheduler;

pub use guard::{SyncGuard, SyncPermit};
pub use remote::{fetch_remote_quotes, HttpRemoteSource, RemoteBatch, RemoteSource};
pub use scheduler::{run_periodic_sync, spawn_periodic_sync};

use thiserror::Error;

/// Sync errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server answered HTTP {0}")]
    Status(u16),
    #[error("Unexpected response: {0}")]
    Parse(String),
}

/// Counters for one completed sync
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Quotes received from the remote source
    pub fetched: usize,
    /// Remote quotes appended locally
    pub added: usize,
    /// Local quotes whose category was overwritten
    pub conflicts: usize,
    /// Fetch failure, if any; the sync then merged nothing
    pub error: Option<String>,
}

/// Result of a sync trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed(SyncReport),
    /// Another sync was still in flight
    Skipped,
}
