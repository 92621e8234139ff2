use std::path::PathBuf;
use tally_core::RecordError;
use thiserror::Error;

/// Why a stored record set could not be turned into validated records
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode transaction store: {0}")]
    Json(#[from] serde_json::Error),

    #[error("read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("amount pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("record {id}: invalid amount {value:?}")]
    InvalidAmount { id: String, value: String },

    #[error("record {id}: invalid date {value:?}")]
    InvalidDate { id: String, value: String },

    #[error("record {id}: {source}")]
    Record {
        id: String,
        #[source]
        source: RecordError,
    },
}

pub type IngestResult<T> = Result<T, IngestError>;
