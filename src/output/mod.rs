//! Output formatting for tomata.
//!
//! This module provides formatters for displaying session history and
//! reports in pretty and JSON formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TomataError;
use crate::history::{Report, SessionRecord};

pub use json::*;
pub use pretty::*;

/// Format session records based on output format.
///
/// # Errors
///
/// Returns `TomataError::Parse` if JSON serialization fails.
pub fn format_history(
    records: &[SessionRecord],
    format: OutputFormat,
) -> Result<String, TomataError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format a report based on output format.
///
/// # Errors
///
/// Returns `TomataError::Parse` if JSON serialization fails.
pub fn format_report(report: &Report, format: OutputFormat) -> Result<String, TomataError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}
