//! Error taxonomy shared by the record model and the aggregators.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised while building records or aggregating them.
///
/// Empty inputs are never an error; they surface as `None` or empty results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record {id}: amount {amount} is negative (direction belongs in the kind)")]
    NegativeAmount { id: String, amount: Decimal },

    #[error("unknown transaction kind: {0:?}")]
    UnknownKind(String),

    #[error("invalid reference month: {0:?} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("duplicate category key in catalog: {0}")]
    DuplicateCategory(String),

    #[error("amount overflow while summing {0}")]
    Overflow(&'static str),
}

pub type RecordResult<T> = Result<T, RecordError>;
