//! Transaction list rows for the overview, in stored order.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{CategoryCatalog, TransactionKind, TransactionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    pub kind: TransactionKind,
    /// Credits positive, debits negative
    pub signed_amount: Decimal,
    /// Catalog display name, or the raw key when the catalog lacks it
    pub category: String,
    pub color: Option<String>,
    pub date: NaiveDateTime,
}

pub fn list_transactions(records: &[TransactionRecord], catalog: &CategoryCatalog) -> Vec<TransactionRow> {
    records
        .iter()
        .map(|r| {
            let def = catalog.get(&r.category_key);
            TransactionRow {
                id: r.id.clone(),
                title: r.title.clone(),
                kind: r.kind,
                signed_amount: r.signed_amount(),
                category: def.map_or_else(|| r.category_key.clone(), |c| c.name.clone()),
                color: def.map(|c| c.color.clone()),
                date: r.date,
            }
        })
        .collect()
}
