//! Transaction record types consumed by the aggregators

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RecordError, RecordResult};

/// Direction of a transaction: income or expense
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "debit")]
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = RecordError;

    /// Accepts the canonical names plus the labels older stores used
    /// (`positive`/`negative`, `up`/`down`, `income`/`expense`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" | "positive" | "income" | "up" => Ok(TransactionKind::Credit),
            "debit" | "negative" | "expense" | "down" => Ok(TransactionKind::Debit),
            _ => Err(RecordError::UnknownKind(s.to_string())),
        }
    }
}

/// A single income or expense entry for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Opaque, externally assigned identifier
    pub id: String,
    /// Display label, never interpreted
    pub title: String,
    pub kind: TransactionKind,
    /// Always >= 0; the sign lives in `kind`
    pub amount: Decimal,
    /// Key into the category catalog (may be unknown to it)
    pub category_key: String,
    /// Local wall-clock timestamp
    pub date: NaiveDateTime,
}

impl TransactionRecord {
    /// Create a record, rejecting negative amounts
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        category_key: impl Into<String>,
        date: NaiveDateTime,
    ) -> RecordResult<Self> {
        let id = id.into();
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(RecordError::NegativeAmount { id, amount });
        }
        Ok(Self {
            id,
            title: title.into(),
            kind,
            amount,
            category_key: category_key.into(),
            date,
        })
    }

    /// Same as [`TransactionRecord::new`] for a record dated at midnight
    pub fn on_day(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        category_key: impl Into<String>,
        day: NaiveDate,
    ) -> RecordResult<Self> {
        Self::new(id, title, kind, amount, category_key, day.and_time(NaiveTime::MIN))
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    /// Amount with the direction applied: credits positive, debits negative
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }

    /// Re-check the amount invariant on a record that may have been built
    /// field-by-field (e.g. deserialized directly).
    pub fn validate(&self) -> RecordResult<()> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(RecordError::NegativeAmount {
                id: self.id.clone(),
                amount: self.amount,
            });
        }
        Ok(())
    }
}
