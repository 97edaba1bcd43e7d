//! QuoteDeck Library
//!
//! Core library for the QuoteDeck desktop application: quote storage,
//! category filtering, import/export and periodic remote synchronization.

pub mod app;
pub mod quotes;
pub mod storage;
pub mod sync;
pub mod types;
pub mod ui;
