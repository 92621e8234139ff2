//! Monthly per-category expense breakdown.
//!
//! Percentages are rounded to the nearest whole percent, midpoints away from
//! zero, with the same rule for every entry. No residual is redistributed, so
//! the emitted percents may miss 100 by at most half a point per entry.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;
use tally_core::{CategoryCatalog, RecordError, RecordResult, ReferenceMonth, TransactionRecord};
use tracing::{debug, warn};

use crate::highlights::checked_total;

/// Share of one category in the month's expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummaryEntry {
    pub category_key: String,
    pub name: String,
    pub color: String,
    pub total: Decimal,
    /// Whole percent in 0..=100
    pub percent: Decimal,
}

/// Result of [`summarize_categories`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub month: ReferenceMonth,
    /// Sum of every debit in the month, attributed or not
    pub grand_total: Decimal,
    /// Part of `grand_total` whose category is missing from the catalog
    pub unattributed_total: Decimal,
    /// Catalog order, only categories with spend > 0
    pub entries: Vec<CategorySummaryEntry>,
}

impl CategorySummary {
    fn empty(month: ReferenceMonth) -> Self {
        Self {
            month,
            grand_total: Decimal::ZERO,
            unattributed_total: Decimal::ZERO,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn percent_sum(&self) -> Decimal {
        self.entries.iter().map(|e| e.percent).sum()
    }
}

fn whole_percent(part: Decimal, whole: Decimal) -> RecordResult<Decimal> {
    part.checked_div(whole)
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(RecordError::Overflow("category percent"))
}

/// Break down the debits of `month` by catalog category.
///
/// A month without debits yields an empty summary and no division happens.
/// Debits whose category is unknown to the catalog count toward the grand
/// total but produce no entry.
pub fn summarize_categories(
    records: &[TransactionRecord],
    month: ReferenceMonth,
    catalog: &CategoryCatalog,
) -> RecordResult<CategorySummary> {
    let filtered: Vec<&TransactionRecord> = records
        .iter()
        .filter(|r| r.is_debit() && month.contains(&r.date))
        .collect();

    let grand_total = checked_total(filtered.iter().copied(), "monthly expenses")?;
    if grand_total.is_zero() {
        debug!(%month, "no expenses in month");
        return Ok(CategorySummary::empty(month));
    }

    let mut by_key: HashMap<&str, Decimal> = HashMap::new();
    for r in &filtered {
        let slot = by_key.entry(r.category_key.as_str()).or_insert(Decimal::ZERO);
        *slot = slot
            .checked_add(r.amount)
            .ok_or(RecordError::Overflow("category total"))?;
    }

    let mut entries = Vec::new();
    let mut attributed = Decimal::ZERO;
    for category in catalog.iter() {
        let total = match by_key.get(category.key.as_str()) {
            Some(total) if *total > Decimal::ZERO => *total,
            _ => continue,
        };
        attributed += total;
        entries.push(CategorySummaryEntry {
            category_key: category.key.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
            total,
            percent: whole_percent(total, grand_total)?,
        });
    }

    let unattributed_total = grand_total - attributed;
    if !unattributed_total.is_zero() {
        let unknown: Vec<&str> = by_key
            .keys()
            .copied()
            .filter(|k| !catalog.contains(k))
            .collect();
        warn!(%month, %unattributed_total, ?unknown, "expenses with categories outside the catalog");
    }

    debug!(%month, debits = filtered.len(), categories = entries.len(), %grand_total, "category summary computed");

    Ok(CategorySummary {
        month,
        grand_total,
        unattributed_total,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tally_core::{CategoryDefinition, TransactionKind};

    fn debit(id: &str, amount: Decimal, cat: &str, y: i32, m: u32, d: u32) -> TransactionRecord {
        TransactionRecord::on_day(
            id,
            id,
            TransactionKind::Debit,
            amount,
            cat,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
        .unwrap()
    }

    fn jan() -> ReferenceMonth {
        ReferenceMonth::new(2024, 1).unwrap()
    }

    #[test]
    fn test_whole_percent_rounds_half_away_from_zero() {
        assert_eq!(whole_percent(dec!(1), dec!(8)).unwrap(), dec!(13)); // 12.5
        assert_eq!(whole_percent(dec!(1), dec!(3)).unwrap(), dec!(33));
        assert_eq!(whole_percent(dec!(2), dec!(3)).unwrap(), dec!(67));
    }

    #[test]
    fn test_very_large_debit_does_not_overflow_percent() {
        let records = vec![debit("1", Decimal::MAX, "food", 2024, 1, 9)];
        let s = summarize_categories(&records, jan(), &CategoryCatalog::builtin()).unwrap();
        assert_eq!(s.grand_total, Decimal::MAX);
        assert_eq!(s.entries[0].percent, dec!(100));
    }

    #[test]
    fn test_output_follows_catalog_order() {
        let records = vec![
            debit("1", dec!(10), "studies", 2024, 1, 3),
            debit("2", dec!(10), "purchases", 2024, 1, 4),
            debit("3", dec!(10), "food", 2024, 1, 5),
        ];
        let s = summarize_categories(&records, jan(), &CategoryCatalog::builtin()).unwrap();
        let keys: Vec<_> = s.entries.iter().map(|e| e.category_key.as_str()).collect();
        assert_eq!(keys, ["purchases", "food", "studies"]);
    }

    #[test]
    fn test_credits_are_ignored() {
        let mut salary = debit("s", dec!(5000), "salary", 2024, 1, 5);
        salary.kind = TransactionKind::Credit;
        let records = vec![salary, debit("f", dec!(20), "food", 2024, 1, 6)];
        let s = summarize_categories(&records, jan(), &CategoryCatalog::builtin()).unwrap();
        assert_eq!(s.grand_total, dec!(20));
        assert_eq!(s.entries.len(), 1);
        assert_eq!(s.entries[0].percent, dec!(100));
    }

    #[test]
    fn test_zero_amount_category_omitted() {
        let records = vec![
            debit("1", dec!(0), "car", 2024, 1, 3),
            debit("2", dec!(40), "food", 2024, 1, 4),
        ];
        let s = summarize_categories(&records, jan(), &CategoryCatalog::builtin()).unwrap();
        assert!(s.entries.iter().all(|e| e.category_key != "car"));
    }

    #[test]
    fn test_all_zero_month_is_empty() {
        let records = vec![debit("1", dec!(0), "car", 2024, 1, 3)];
        let s = summarize_categories(&records, jan(), &CategoryCatalog::builtin()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_display_metadata_copied_from_catalog() {
        let catalog = CategoryCatalog::new(vec![CategoryDefinition::new(
            "food",
            "Eating out",
            "#ABCDEF",
        )])
        .unwrap();
        let records = vec![debit("1", dec!(12.34), "food", 2024, 1, 3)];
        let s = summarize_categories(&records, jan(), &catalog).unwrap();
        assert_eq!(s.entries[0].name, "Eating out");
        assert_eq!(s.entries[0].color, "#ABCDEF");
        assert_eq!(s.entries[0].total, dec!(12.34));
    }
}
