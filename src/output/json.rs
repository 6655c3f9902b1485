//! JSON output formatting for tomata.

use serde::Serialize;
use serde_json::json;

use crate::error::TomataError;
use crate::history::SessionRecord;

/// Format session records as JSON.
///
/// # Errors
///
/// Returns `TomataError::Parse` if JSON serialization fails.
pub fn format_history_json(records: &[SessionRecord]) -> Result<String, TomataError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `TomataError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TomataError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SessionKind;
    use chrono::Utc;

    fn make_record(kind: SessionKind, completed: bool) -> SessionRecord {
        let now = Utc::now();
        SessionRecord::new(kind, now, now, 1500, completed)
    }

    #[test]
    fn test_format_history_json_empty() {
        let records: Vec<SessionRecord> = vec![];
        let result = format_history_json(&records).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_history_json_fields() {
        let records = vec![make_record(SessionKind::Work, true)];
        let result = format_history_json(&records).unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"kind\": \"work\""));
        assert!(result.contains("\"completed\": true"));
        assert!(result.contains("\"duration_seconds\": 1500"));
    }

    #[test]
    fn test_format_history_json_kind_names() {
        let records = vec![
            make_record(SessionKind::ShortBreak, true),
            make_record(SessionKind::LongBreak, true),
        ];
        let result = format_history_json(&records).unwrap();

        assert!(result.contains("\"short_break\""));
        assert!(result.contains("\"long_break\""));
    }

    #[test]
    fn test_to_json_generic() {
        let record = make_record(SessionKind::Work, false);
        let result = to_json(&record).unwrap();

        assert!(result.contains("\"kind\": \"work\""));
        assert!(result.contains("\"completed\": false"));
    }
}
