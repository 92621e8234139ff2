//! Data-quality checks run after decoding.
//!
//! These conditions never stop aggregation; they are reported so the caller
//! can surface a recoverable notice.

use serde::Serialize;
use tally_core::{CategoryCatalog, TransactionRecord};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownCategory {
    pub record_id: String,
    pub category_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataQualityReport {
    pub unknown_categories: Vec<UnknownCategory>,
}

impl DataQualityReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_categories.is_empty()
    }
}

/// Flag records whose category key is missing from `catalog`
pub fn check_categories(records: &[TransactionRecord], catalog: &CategoryCatalog) -> DataQualityReport {
    let unknown_categories: Vec<UnknownCategory> = records
        .iter()
        .filter(|r| !catalog.contains(&r.category_key))
        .map(|r| UnknownCategory {
            record_id: r.id.clone(),
            category_key: r.category_key.clone(),
        })
        .collect();

    if !unknown_categories.is_empty() {
        warn!(count = unknown_categories.len(), "records reference categories outside the catalog");
    }

    DataQualityReport { unknown_categories }
}
