//! Session history command.

use crate::cli::args::{HistoryArgs, OutputFormat};
use crate::engine::SessionKind;
use crate::error::TomataError;
use crate::history::HistoryStore;
use crate::output::format_history;

/// Show recent sessions.
///
/// # Errors
///
/// Returns an error if the kind filter is unknown or the query fails.
pub fn history(args: &HistoryArgs, format: OutputFormat) -> Result<String, TomataError> {
    let store = HistoryStore::open()?;

    let records = match &args.kind {
        Some(k) => {
            let kind = SessionKind::parse(k)
                .ok_or_else(|| TomataError::Config(format!("Unknown session kind: {k}")))?;
            store.recent_by_kind(kind, args.limit)?
        }
        None => store.recent(args.limit)?,
    };

    format_history(&records, format)
}
