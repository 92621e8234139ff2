//! Field-level validation shared by every source format.
//!
//! Amounts accept an optional thousands separator (`1,234.56`) and must be
//! non-negative. Dates accept RFC 3339 (converted to the configured zone), a
//! naive `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tally_core::{TransactionKind, TransactionRecord};

use crate::error::{IngestError, IngestResult};

/// Validates raw fields and assembles [`TransactionRecord`]s
#[derive(Debug, Clone)]
pub struct Normalizer {
    amount_re: Regex,
    tz: Tz,
}

impl Normalizer {
    pub fn new(tz: Tz) -> IngestResult<Self> {
        let amount_re = Regex::new(r"^-?(\d{1,3}(,\d{3})+|\d+)(\.\d+)?$")?;
        Ok(Self { amount_re, tz })
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn amount(&self, id: &str, raw: &str) -> IngestResult<Decimal> {
        let invalid = || IngestError::InvalidAmount {
            id: id.to_string(),
            value: raw.to_string(),
        };
        let s = raw.trim();
        if self.amount_re.is_match(s) {
            return Decimal::from_str(&s.replace(',', "")).map_err(|_| invalid());
        }
        // JSON numbers may arrive in exponent form
        Decimal::from_scientific(s).map_err(|_| invalid())
    }

    pub fn date(&self, id: &str, raw: &str) -> IngestResult<NaiveDateTime> {
        let s = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&self.tz).naive_local());
        }
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(ndt);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::MIN))
            .map_err(|_| IngestError::InvalidDate {
                id: id.to_string(),
                value: raw.to_string(),
            })
    }

    /// Validate every field and build the record
    pub fn record(
        &self,
        id: &str,
        title: &str,
        amount: &str,
        category: &str,
        kind: &str,
        date: &str,
    ) -> IngestResult<TransactionRecord> {
        let record_err = |source| IngestError::Record {
            id: id.to_string(),
            source,
        };
        let kind = TransactionKind::from_str(kind).map_err(record_err)?;
        let amount = self.amount(id, amount)?;
        let date = self.date(id, date)?;
        TransactionRecord::new(id, title.trim(), kind, amount, category.trim(), date).map_err(record_err)
    }
}
