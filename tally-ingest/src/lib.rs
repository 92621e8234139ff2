//! tally-ingest: decode stored transactions (JSON store, CSV export) into
//! validated records, and report data-quality issues.

pub mod error;
pub mod normalize;
pub mod parsers;
pub mod quality;
pub mod types;

pub use error::{IngestError, IngestResult};
pub use normalize::Normalizer;
pub use parsers::csv_export::{parse_csv, parse_csv_reader};
pub use parsers::json_store::{decode_store, load_store};
pub use quality::{check_categories, DataQualityReport, UnknownCategory};
pub use types::{CsvRow, RawAmount, StoredTransaction};
