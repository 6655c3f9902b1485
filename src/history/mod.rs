//! Session history and reports.
//!
//! Finished timer periods are recorded to the local database; the live
//! timer state itself is never persisted.

pub mod record;
pub mod report;
pub mod store;

pub use record::SessionRecord;
pub use report::{Report, ReportPeriod};
pub use store::HistoryStore;
