//! Transfer documents
//!
//! Export and import of quote collections as a pretty-printed JSON array of
//! `{id, text, category}` objects. The same shape check backs loading from
//! storage, so a document is either accepted whole or rejected whole.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::types::{is_reserved_category, Quote};

/// Default file name offered for exports
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Errors raised while reading a quote document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid document: {0}")]
    Invalid(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize quotes as a pretty-printed JSON document
pub fn export_document(quotes: &[Quote]) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// Parse and validate a quote document
///
/// Every entry must be an object with non-empty string `text` and `category`;
/// both are trimmed, and the category may not be the "all" filter sentinel.
/// `id` is optional; when present it must be a UUID string.
pub fn parse_document(raw: &str) -> Result<Vec<Quote>, DocumentError> {
    let value: Value = serde_json::from_str(raw)?;
    let entries = value.as_array().ok_or_else(|| {
        DocumentError::Invalid("expected a JSON array of quote objects".to_string())
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| quote_from_value(index, entry))
        .collect()
}

fn quote_from_value(index: usize, entry: &Value) -> Result<Quote, DocumentError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| DocumentError::Invalid(format!("entry {} is not an object", index)))?;

    let text = required_string(obj, "text", index)?;
    let category = required_string(obj, "category", index)?;
    if is_reserved_category(&category) {
        return Err(DocumentError::Invalid(format!(
            "entry {} uses the reserved category '{}'",
            index, category
        )));
    }

    let id = match obj.get("id") {
        None | Some(Value::Null) => Uuid::new_v4(),
        Some(Value::String(raw)) => Uuid::parse_str(raw).map_err(|_| {
            DocumentError::Invalid(format!("entry {} has an invalid id '{}'", index, raw))
        })?,
        Some(_) => {
            return Err(DocumentError::Invalid(format!(
                "entry {} has a non-string id",
                index
            )))
        }
    };

    Ok(Quote { id, text, category })
}

fn required_string(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    index: usize,
) -> Result<String, DocumentError> {
    match obj.get(field).and_then(Value::as_str).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        Some(_) => Err(DocumentError::Invalid(format!(
            "entry {} has an empty '{}'",
            index, field
        ))),
        None => Err(DocumentError::Invalid(format!(
            "entry {} needs a string '{}'",
            index, field
        ))),
    }
}

/// Write an export document to disk
pub async fn write_document(path: &Path, quotes: &[Quote]) -> Result<(), DocumentError> {
    let json = export_document(quotes)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, json).await?;
    tracing::info!("Exported {} quotes to {}", quotes.len(), path.display());
    Ok(())
}

/// Read and validate a document from disk
pub async fn read_document(path: &Path) -> Result<Vec<Quote>, DocumentError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_document(&raw)
}
