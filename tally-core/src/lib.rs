//! tally-core: record, category and month types shared by the tally engine

pub mod category;
pub mod error;
pub mod latest;
pub mod month;
pub mod record;

pub use category::{CategoryCatalog, CategoryDefinition};
pub use error::{RecordError, RecordResult};
pub use latest::{latest_date, latest_of_kind};
pub use month::ReferenceMonth;
pub use record::{TransactionKind, TransactionRecord};
