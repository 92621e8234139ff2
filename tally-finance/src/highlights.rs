//! Highlight aggregator: entries, expenses and balance for the overview.
//!
//! Every record lands in exactly one of the two accumulators. The balance is
//! always `entries - expenses`, even when one side is zero.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tally_core::{latest_of_kind, RecordError, RecordResult, TransactionKind, TransactionRecord};
use tracing::debug;

/// Which of the three overview cards a highlight belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Entries,
    Expenses,
    Balance,
}

/// Date information attached to a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ActivityLabel {
    /// Nothing of this kind has been recorded yet
    NoTransactions,
    /// Most recent transaction of the kind
    LastOn { date: NaiveDateTime },
    /// From the start of the period up to the latest expense
    Window { from: NaiveDate, through: NaiveDateTime },
}

impl ActivityLabel {
    fn last_on(date: Option<NaiveDateTime>) -> Self {
        match date {
            Some(date) => ActivityLabel::LastOn { date },
            None => ActivityLabel::NoTransactions,
        }
    }

    fn window_through(date: Option<NaiveDateTime>) -> Self {
        match date.and_then(|d| d.date().with_day(1).map(|from| (from, d))) {
            Some((from, through)) => ActivityLabel::Window { from, through },
            None => ActivityLabel::NoTransactions,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ActivityLabel::NoTransactions)
    }
}

impl fmt::Display for ActivityLabel {
    /// Day-of-month rendering: "5 January", "1 to 10 January"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLabel::NoTransactions => f.write_str("No transactions yet"),
            ActivityLabel::LastOn { date } => write!(f, "{} {}", date.day(), date.format("%B")),
            ActivityLabel::Window { from, through } => {
                write!(f, "{} to {} {}", from.day(), through.day(), through.format("%B"))
            }
        }
    }
}

/// One overview card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub total: Decimal,
    pub last_transaction: ActivityLabel,
}

impl Highlight {
    /// Caption as shown under the card total
    pub fn caption(&self, kind: HighlightKind) -> String {
        match (&self.last_transaction, kind) {
            (ActivityLabel::NoTransactions, _) => self.last_transaction.to_string(),
            (label, HighlightKind::Entries) => format!("Last entry on {label}"),
            (label, HighlightKind::Expenses) => format!("Last expense on {label}"),
            (label, HighlightKind::Balance) => label.to_string(),
        }
    }
}

/// Entries, expenses and balance for one user's full record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSummary {
    pub entries: Highlight,
    pub expenses: Highlight,
    pub balance: Highlight,
}

impl HighlightSummary {
    pub fn get(&self, kind: HighlightKind) -> &Highlight {
        match kind {
            HighlightKind::Entries => &self.entries,
            HighlightKind::Expenses => &self.expenses,
            HighlightKind::Balance => &self.balance,
        }
    }
}

/// Sum amounts, failing on a negative amount or on overflow.
pub(crate) fn checked_total<'a, I>(records: I, what: &'static str) -> RecordResult<Decimal>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    records.into_iter().try_fold(Decimal::ZERO, |acc, r| {
        r.validate()?;
        acc.checked_add(r.amount).ok_or(RecordError::Overflow(what))
    })
}

/// Compute the overview highlights.
///
/// Fails only on input that would corrupt a total: a negative amount or a
/// sum that does not fit in a decimal.
pub fn summarize_highlights(records: &[TransactionRecord]) -> RecordResult<HighlightSummary> {
    let entries_total = checked_total(records.iter().filter(|r| r.is_credit()), "entries")?;
    let expenses_total = checked_total(records.iter().filter(|r| r.is_debit()), "expenses")?;
    let balance_total = entries_total
        .checked_sub(expenses_total)
        .ok_or(RecordError::Overflow("balance"))?;

    let last_entry = latest_of_kind(records, TransactionKind::Credit);
    let last_expense = latest_of_kind(records, TransactionKind::Debit);

    debug!(
        records = records.len(),
        %entries_total,
        %expenses_total,
        "highlights computed"
    );

    Ok(HighlightSummary {
        entries: Highlight {
            total: entries_total,
            last_transaction: ActivityLabel::last_on(last_entry),
        },
        expenses: Highlight {
            total: expenses_total,
            last_transaction: ActivityLabel::last_on(last_expense),
        },
        balance: Highlight {
            total: balance_total,
            last_transaction: ActivityLabel::window_through(last_expense),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rec(kind: TransactionKind, amount: Decimal, d: u32) -> TransactionRecord {
        TransactionRecord::on_day(
            format!("tx-{d}"),
            "t",
            kind,
            amount,
            "food",
            NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_labels_render_day_of_month() {
        let records = vec![
            rec(TransactionKind::Credit, dec!(1000), 5),
            rec(TransactionKind::Debit, dec!(300), 10),
        ];
        let h = summarize_highlights(&records).unwrap();
        assert_eq!(h.entries.caption(HighlightKind::Entries), "Last entry on 5 January");
        assert_eq!(h.expenses.caption(HighlightKind::Expenses), "Last expense on 10 January");
        assert_eq!(h.balance.caption(HighlightKind::Balance), "1 to 10 January");
    }

    #[test]
    fn test_balance_window_follows_expenses_not_entries() {
        let records = vec![
            rec(TransactionKind::Credit, dec!(50), 20),
            rec(TransactionKind::Debit, dec!(5), 3),
        ];
        let h = summarize_highlights(&records).unwrap();
        match h.balance.last_transaction {
            ActivityLabel::Window { from, through } => {
                assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
                assert_eq!(through.date(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
            }
            other => panic!("expected window, got {other:?}"),
        }
    }

    #[test]
    fn test_only_credits_leaves_expense_and_balance_sentinel() {
        let records = vec![rec(TransactionKind::Credit, dec!(80), 2)];
        let h = summarize_highlights(&records).unwrap();
        assert_eq!(h.expenses.last_transaction, ActivityLabel::NoTransactions);
        assert_eq!(h.balance.last_transaction, ActivityLabel::NoTransactions);
        assert_eq!(h.balance.total, dec!(80));
        assert_eq!(h.expenses.caption(HighlightKind::Expenses), "No transactions yet");
    }

    #[test]
    fn test_sentinel_survives_serialization() {
        let h = summarize_highlights(&[]).unwrap();
        let v = serde_json::to_value(h).unwrap();
        assert_eq!(v["entries"]["last_transaction"]["state"], "no_transactions");
        assert_eq!(v["balance"]["total"], "0");
    }

    #[test]
    fn test_negative_amount_fails_fast() {
        let mut bad = rec(TransactionKind::Debit, dec!(1), 4);
        bad.amount = dec!(-10);
        let err = summarize_highlights(&[bad]).unwrap_err();
        assert!(matches!(err, RecordError::NegativeAmount { .. }));
    }

    #[test]
    fn test_overflow_fails_fast() {
        let records = vec![
            rec(TransactionKind::Credit, Decimal::MAX, 1),
            rec(TransactionKind::Credit, Decimal::MAX, 2),
        ];
        assert_eq!(
            summarize_highlights(&records).unwrap_err(),
            RecordError::Overflow("entries")
        );
    }
}
