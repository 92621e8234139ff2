//! tally-finance: highlight aggregator, monthly category summarizer and
//! transaction list view.
//!
//! Everything here is a pure function of its arguments; callers recompute on
//! every refresh.

pub mod category_summary;
pub mod highlights;
pub mod listing;

pub use category_summary::{summarize_categories, CategorySummary, CategorySummaryEntry};
pub use highlights::{summarize_highlights, ActivityLabel, Highlight, HighlightKind, HighlightSummary};
pub use listing::{list_transactions, TransactionRow};
