//! Pretty (human-readable) output formatting for tomata.

use chrono::Duration;
use colored::Colorize;

use crate::core::duration::{format_duration, render_progress_bar};
use crate::engine::SessionKind;
use crate::history::{Report, SessionRecord};

/// Format session records as a table.
#[must_use]
pub fn format_history_pretty(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return "No sessions recorded.\n\nStart one with: tomata timer".to_string();
    }

    let mut output = Vec::new();
    output.push("Session History".bold().to_string());
    output.push("═".repeat(56));
    output.push(format!(
        "{:<12} {:<7} {:<13} {:>9}   {}",
        "Date", "Start", "Kind", "Duration", "Status"
    ));
    output.push("─".repeat(56));

    for record in records {
        let date = record.started_at_local().format("%Y-%m-%d").to_string();
        let start = record.started_at_local().format("%H:%M").to_string();
        let kind = match record.kind {
            SessionKind::Work => "Work",
            SessionKind::ShortBreak => "Short break",
            SessionKind::LongBreak => "Long break",
        };
        let duration = format!("{}m", record.duration_minutes());
        let status = if record.completed {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };

        output.push(format!(
            "{date:<12} {start:<7} {kind:<13} {duration:>9}   {status}"
        ));
    }

    output.join("\n")
}

/// Format a report for display.
#[must_use]
pub fn format_report_pretty(report: &Report) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Focus Report: {}", report.period).bold().to_string());
    lines.push("═".repeat(50));
    lines.push(String::new());

    lines.push("Summary".to_string());
    lines.push("─".repeat(40));
    lines.push(format!(
        "  Total focus time:    {}",
        format_duration(Duration::minutes(report.total_work_minutes))
    ));
    lines.push(format!(
        "  Completed sessions:  {}",
        report.completed_work_sessions
    ));
    lines.push(format!(
        "  Abandoned sessions:  {}",
        report.abandoned_work_sessions
    ));
    lines.push(format!("  Completed breaks:    {}", report.completed_breaks));
    lines.push(format!(
        "  Average session:     {:.0} minutes",
        report.avg_session_minutes
    ));
    lines.push(format!(
        "  Longest session:     {} minutes",
        report.longest_session_minutes
    ));
    lines.push(format!("  Current streak:      {} days", report.streak_days));

    if report.total_work_minutes > 0 {
        lines.push(String::new());
        lines.push("By Day of Week".to_string());
        lines.push("─".repeat(40));

        let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let max_day = report
            .by_day_of_week
            .iter()
            .max()
            .copied()
            .unwrap_or(1)
            .max(1);

        #[allow(clippy::cast_precision_loss)]
        for (i, day) in days.iter().enumerate() {
            let minutes = report.by_day_of_week[i];
            let bar = render_progress_bar(minutes as f64 / max_day as f64, 20);
            lines.push(format!("  {day} {minutes:>4}m {bar}"));
        }
    }

    if !report.daily.is_empty() {
        lines.push(String::new());
        lines.push("Recent Days".to_string());
        lines.push("─".repeat(40));

        for day in report.daily.iter().take(7) {
            lines.push(format!(
                "  {} {:>4}m ({} sessions)",
                day.date, day.minutes, day.sessions
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_record(kind: SessionKind, completed: bool) -> SessionRecord {
        let now = Utc::now();
        SessionRecord::new(kind, now - Duration::minutes(25), now, 1500, completed)
    }

    fn empty_report() -> Report {
        Report {
            period: "This Week".to_string(),
            total_work_minutes: 0,
            completed_work_sessions: 0,
            abandoned_work_sessions: 0,
            completed_breaks: 0,
            avg_session_minutes: 0.0,
            longest_session_minutes: 0,
            by_day_of_week: [0; 7],
            daily: vec![],
            streak_days: 0,
        }
    }

    #[test]
    fn test_format_history_pretty_empty() {
        let output = format_history_pretty(&[]);
        assert!(output.contains("No sessions recorded"));
    }

    #[test]
    fn test_format_history_pretty_rows() {
        let records = vec![
            make_record(SessionKind::Work, true),
            make_record(SessionKind::ShortBreak, false),
        ];
        let output = format_history_pretty(&records);

        assert!(output.contains("Session History"));
        assert!(output.contains("Work"));
        assert!(output.contains("Short break"));
        assert!(output.contains("25m"));
    }

    #[test]
    fn test_format_report_pretty_empty() {
        let output = format_report_pretty(&empty_report());

        assert!(output.contains("Focus Report: This Week"));
        assert!(output.contains("Total focus time"));
        // No day-of-week section without any focus time
        assert!(!output.contains("By Day of Week"));
    }

    #[test]
    fn test_format_report_pretty_with_data() {
        let mut report = empty_report();
        report.total_work_minutes = 75;
        report.completed_work_sessions = 3;
        report.by_day_of_week[0] = 75;
        report.daily.push(crate::history::report::DailyFocus {
            date: "2024-06-01".to_string(),
            minutes: 75,
            sessions: 3,
        });

        let output = format_report_pretty(&report);

        assert!(output.contains("By Day of Week"));
        assert!(output.contains("Recent Days"));
        assert!(output.contains("2024-06-01"));
    }
}
