//! Focus report command.

use crate::cli::args::{OutputFormat, ReportArgs};
use crate::error::TomataError;
use crate::history::{HistoryStore, Report, ReportPeriod};
use crate::output::format_report;

/// Generate a focus report.
///
/// # Errors
///
/// Returns an error if the history query fails.
pub fn report(args: &ReportArgs, format: OutputFormat) -> Result<String, TomataError> {
    let store = HistoryStore::open()?;
    let period = ReportPeriod::parse(&args.period);
    let report = Report::generate(&store, period)?;

    format_report(&report, format)
}
