//! Quote core
//!
//! The owned quote store, the merge engine used by remote sync, category
//! indexing, random selection and the [`QuoteBook`] facade used by the UI.

pub mod book;
pub mod categories;
pub mod merge;
pub mod selection;
pub mod store;

pub use book::QuoteBook;
pub use merge::{merge, MergeEvent, MergeOutcome};
pub use store::QuoteStore;

use thiserror::Error;

use crate::storage::transfer::DocumentError;
use crate::storage::StorageError;

/// Errors from quote operations
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<DocumentError> for QuoteError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::Parse(e) => QuoteError::Parse(e.to_string()),
            DocumentError::Invalid(msg) => QuoteError::Validation(msg),
            DocumentError::Io(e) => QuoteError::Storage(StorageError::Io(e)),
        }
    }
}
