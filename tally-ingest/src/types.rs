use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use std::fmt;

/// Amount as found in a store: text (`"1,234.50"`) or a bare JSON number.
///
/// Numbers keep their source text; going through `f64` would round amounts
/// past fifteen significant digits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(String),
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <Box<RawValue>>::deserialize(deserializer)?;
        let text = raw.get().trim();
        if text.starts_with('"') {
            serde_json::from_str(text).map(RawAmount::Text).map_err(D::Error::custom)
        } else if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            Ok(RawAmount::Number(text.to_string()))
        } else {
            Err(D::Error::custom(format!("amount must be a string or a number, got {text}")))
        }
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Text(s) => f.write_str(s),
            RawAmount::Number(n) => f.write_str(n),
        }
    }
}

/// One element of the per-user JSON store, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    pub amount: RawAmount,
    pub category: String,
    /// `positive`/`negative` (or any alias `TransactionKind` accepts)
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub date: String,
}

/// One row of a CSV export: `id,title,amount,category,kind,date`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CsvRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub date: String,
}

impl CsvRow {
    pub fn is_blank(&self) -> bool {
        [&self.id, &self.title, &self.amount, &self.category, &self.kind, &self.date]
            .iter()
            .all(|f| f.trim().is_empty())
    }
}
