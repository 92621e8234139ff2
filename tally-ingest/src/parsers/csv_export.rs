//! CSV export parser.
//!
//! Expected header:
//!   id,title,amount,category,kind,date
//! Blank rows are skipped; any other invalid row aborts the import.

use std::io::Read;
use std::path::Path;
use tally_core::TransactionRecord;
use tracing::{debug, warn};

use crate::error::{IngestError, IngestResult};
use crate::normalize::Normalizer;
use crate::types::CsvRow;

pub fn parse_csv_reader<R: Read>(rdr: R, normalizer: &Normalizer) -> IngestResult<Vec<TransactionRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut out = Vec::new();
    for (line, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        if row.is_blank() {
            warn!(row = line + 1, "skipping blank CSV row");
            continue;
        }
        // Rows without an id get a positional one so errors stay traceable
        let id = if row.id.is_empty() {
            format!("row-{}", line + 1)
        } else {
            row.id.clone()
        };
        out.push(normalizer.record(&id, &row.title, &row.amount, &row.category, &row.kind, &row.date)?);
    }

    debug!(count = out.len(), "parsed CSV export");
    Ok(out)
}

/// Parse a CSV export file
pub fn parse_csv(path: impl AsRef<Path>, normalizer: &Normalizer) -> IngestResult<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_reader(file, normalizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tally_core::TransactionKind;

    fn normalizer() -> Normalizer {
        Normalizer::new(chrono_tz::UTC).unwrap()
    }

    #[test]
    fn test_parse_csv_basic() {
        let text = "\
id,title,amount,category,kind,date
t1,Paycheck,\"2,500.00\",salary,credit,2024-01-05
t2,Lunch,18.90,food,debit,2024-01-06T12:30:00Z
,,,,,
t3,Gas,60,car,negative,2024-01-07
";
        let records = parse_csv_reader(text.as_bytes(), &normalizer()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].amount, dec!(2500.00));
        assert_eq!(records[0].kind, TransactionKind::Credit);
        assert_eq!(records[1].title, "Lunch");
        assert_eq!(records[2].id, "t3");
        assert_eq!(records[2].kind, TransactionKind::Debit);
    }

    #[test]
    fn test_invalid_row_aborts_with_context() {
        let text = "\
id,title,amount,category,kind,date
t1,Lunch,abc,food,debit,2024-01-06
";
        let err = parse_csv_reader(text.as_bytes(), &normalizer()).unwrap_err();
        assert!(matches!(err, IngestError::InvalidAmount { ref id, .. } if id == "t1"));
    }

    #[test]
    fn test_missing_id_gets_row_number() {
        let text = "\
id,title,amount,category,kind,date
,Lunch,10,food,debit,not-a-date
";
        let err = parse_csv_reader(text.as_bytes(), &normalizer()).unwrap_err();
        assert!(err.to_string().contains("row-1"), "got: {err}");
    }

    #[test]
    fn test_parse_csv_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "id,title,amount,category,kind,date").unwrap();
        writeln!(f, "a,Book,45.00,studies,debit,2024-03-02").unwrap();
        let records = parse_csv(f.path(), &normalizer()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category_key, "studies");
    }
}
