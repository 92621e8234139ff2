//! Reference month: the calendar month a category breakdown is computed for.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RecordError, RecordResult};

/// A calendar month of a calendar year (not a rolling window), serialized as
/// `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    /// `month` is 1-based
    pub fn new(year: i32, month: u32) -> RecordResult<Self> {
        // Both ends must map to a representable date.
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(RecordError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move by `months` calendar months (negative goes back)
    pub fn shift(&self, months: i32) -> RecordResult<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12))
            .map_err(|_| RecordError::InvalidMonth(format!("{self} {months:+} months")))?;
        let month = index.rem_euclid(12) as u32 + 1;
        Self::new(year, month)
    }

    pub fn next(&self) -> RecordResult<Self> {
        self.shift(1)
    }

    pub fn prev(&self) -> RecordResult<Self> {
        self.shift(-1)
    }

    /// True when `ts` falls on any day of this month
    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        ts.year() == self.year && ts.month() == self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human label such as "January, 2024"
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B, %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReferenceMonth {
    type Err = RecordError;

    /// Parses `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidMonth(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ReferenceMonth {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReferenceMonth> for String {
    fn from(m: ReferenceMonth) -> Self {
        m.to_string()
    }
}
