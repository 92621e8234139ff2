//! Latest-date selection over a possibly empty subset of records.

use chrono::NaiveDateTime;

use crate::record::{TransactionKind, TransactionRecord};

/// Maximum of `dates`, or `None` when there are none.
///
/// Ties collapse to the shared value; which record produced it is not
/// observable.
pub fn latest_date<I, T>(dates: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    dates.into_iter().max()
}

/// Latest timestamp among records of `kind`
pub fn latest_of_kind(records: &[TransactionRecord], kind: TransactionKind) -> Option<NaiveDateTime> {
    latest_date(records.iter().filter(|r| r.kind == kind).map(|r| r.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn rec(id: &str, kind: TransactionKind, y: i32, m: u32, d: u32) -> TransactionRecord {
        TransactionRecord::on_day(
            id,
            id,
            kind,
            dec!(10),
            "food",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_is_none() {
        let none: Option<NaiveDateTime> = latest_date(Vec::new());
        assert!(none.is_none());
        assert!(latest_of_kind(&[], TransactionKind::Debit).is_none());
    }

    #[test]
    fn test_picks_true_maximum_regardless_of_order() {
        let records = vec![
            rec("a", TransactionKind::Debit, 2024, 1, 10),
            rec("b", TransactionKind::Debit, 2024, 3, 2),
            rec("c", TransactionKind::Debit, 2023, 12, 31),
        ];
        let latest = latest_of_kind(&records, TransactionKind::Debit).unwrap();
        assert_eq!(latest.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_filters_by_kind() {
        let records = vec![
            rec("in", TransactionKind::Credit, 2024, 5, 1),
            rec("out", TransactionKind::Debit, 2024, 1, 1),
        ];
        assert!(latest_of_kind(&records[1..], TransactionKind::Credit).is_none());
        assert_eq!(
            latest_of_kind(&records, TransactionKind::Debit).unwrap().date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_ties_yield_shared_value() {
        let records = vec![
            rec("a", TransactionKind::Credit, 2024, 2, 2),
            rec("b", TransactionKind::Credit, 2024, 2, 2),
        ];
        assert_eq!(
            latest_of_kind(&records, TransactionKind::Credit),
            Some(records[0].date)
        );
    }
}
