//! Per-user JSON store decoder.
//!
//! The store is a JSON array of objects:
//!   {"id": "...", "name": "...", "amount": "12.50", "category": "food",
//!    "type": "negative", "date": "2024-01-10T12:00:00.000Z"}
//! A missing store means "no transactions yet".

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tally_core::TransactionRecord;
use tracing::debug;

use crate::error::{IngestError, IngestResult};
use crate::normalize::Normalizer;
use crate::types::StoredTransaction;

/// Decode a store blob. Fails on the first invalid record.
pub fn decode_store(json: &str, normalizer: &Normalizer) -> IngestResult<Vec<TransactionRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let raw: Vec<StoredTransaction> = serde_json::from_str(json)?;
    let records = raw
        .iter()
        .map(|t| {
            normalizer.record(
                &t.id,
                &t.name,
                &t.amount.to_string(),
                &t.category,
                &t.kind,
                &t.date,
            )
        })
        .collect::<IngestResult<Vec<_>>>()?;

    debug!(count = records.len(), "decoded transaction store");
    Ok(records)
}

/// Read and decode a store file; a missing file is an empty store
pub fn load_store(path: impl AsRef<Path>, normalizer: &Normalizer) -> IngestResult<Vec<TransactionRecord>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(json) => decode_store(&json, normalizer),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no transaction store yet");
            Ok(Vec::new())
        }
        Err(source) => Err(IngestError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
