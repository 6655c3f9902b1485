//! Focus reports.
//!
//! Aggregates recorded periods into productivity summaries.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::SessionRecord;
use super::store::HistoryStore;
use crate::error::TomataError;

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    AllTime,
}

impl ReportPeriod {
    /// Get the start and end timestamps for this period.
    #[must_use]
    pub fn date_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        let today = now.date_naive();

        let start_date = match self {
            Self::Today => today,
            Self::Week => today - Duration::days(6),
            Self::Month => today - Duration::days(29),
            Self::AllTime => NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(today),
        };

        let start = start_date
            .and_hms_opt(0, 0, 0)
            .map_or(now, |t| DateTime::from_naive_utc_and_offset(t, Utc));

        (start, now)
    }

    /// Parse a period from user input; unknown strings fall back to `Week`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" | "t" | "d" => Self::Today,
            "month" | "m" | "30d" => Self::Month,
            "all" | "alltime" | "all-time" => Self::AllTime,
            _ => Self::Week,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Aggregated focus data for a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report period name
    pub period: String,
    /// Total completed work time in minutes
    pub total_work_minutes: i64,
    /// Number of completed work periods
    pub completed_work_sessions: i64,
    /// Number of abandoned work periods
    pub abandoned_work_sessions: i64,
    /// Number of completed breaks
    pub completed_breaks: i64,
    /// Average completed work period length in minutes
    pub avg_session_minutes: f64,
    /// Longest completed work period in minutes
    pub longest_session_minutes: i64,
    /// Work minutes by day of week (Monday first)
    pub by_day_of_week: [i64; 7],
    /// Daily breakdown, newest first
    pub daily: Vec<DailyFocus>,
    /// Consecutive days (ending today or yesterday) with completed work
    pub streak_days: i64,
}

/// Work done on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFocus {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Total work minutes
    pub minutes: i64,
    /// Completed work period count
    pub sessions: i64,
}

impl Report {
    /// Generate a report for the given period.
    ///
    /// # Errors
    ///
    /// Returns an error if the history query fails.
    #[allow(clippy::cast_precision_loss)]
    pub fn generate(store: &HistoryStore, period: ReportPeriod) -> Result<Self, TomataError> {
        let (start, end) = period.date_range();
        let records = store.range(start, end)?;

        let work: Vec<&SessionRecord> = records.iter().filter(|r| !r.kind.is_break()).collect();
        let completed: Vec<&&SessionRecord> = work.iter().filter(|r| r.completed).collect();
        let abandoned_count = work.iter().filter(|r| !r.completed).count() as i64;
        let completed_breaks = records
            .iter()
            .filter(|r| r.kind.is_break() && r.completed)
            .count() as i64;

        let total_work_minutes: i64 = completed.iter().map(|r| r.duration_minutes()).sum();
        let completed_count = completed.len() as i64;

        let avg_session_minutes = if completed_count > 0 {
            total_work_minutes as f64 / completed_count as f64
        } else {
            0.0
        };

        let longest_session_minutes = completed
            .iter()
            .map(|r| r.duration_minutes())
            .max()
            .unwrap_or(0);

        let mut by_day_of_week = [0_i64; 7];
        for record in &completed {
            let weekday = record.started_at.weekday().num_days_from_monday() as usize;
            by_day_of_week[weekday] += record.duration_minutes();
        }

        let mut daily_map: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
        for record in &completed {
            let date = record.started_at.date_naive();
            let entry = daily_map.entry(date).or_insert((0, 0));
            entry.0 += record.duration_minutes();
            entry.1 += 1;
        }

        let mut daily: Vec<DailyFocus> = daily_map
            .into_iter()
            .map(|(date, (minutes, sessions))| DailyFocus {
                date: date.to_string(),
                minutes,
                sessions,
            })
            .collect();
        daily.sort_by(|a, b| b.date.cmp(&a.date));

        let streak_days = calculate_streak(&completed);

        Ok(Self {
            period: period.display_name().to_string(),
            total_work_minutes,
            completed_work_sessions: completed_count,
            abandoned_work_sessions: abandoned_count,
            completed_breaks,
            avg_session_minutes,
            longest_session_minutes,
            by_day_of_week,
            daily,
            streak_days,
        })
    }

    /// Get total hours.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_hours(&self) -> f64 {
        self.total_work_minutes as f64 / 60.0
    }
}

/// Count consecutive days with completed work, ending today or yesterday.
fn calculate_streak(records: &[&&SessionRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }

    let today = Local::now().date_naive();

    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.started_at.date_naive()).collect();
    dates.sort_unstable();
    dates.dedup();

    let mut check_date = today;
    if !dates.contains(&today) {
        check_date = today - Duration::days(1);
        if !dates.contains(&check_date) {
            return 0;
        }
    }

    let mut streak = 0;
    while dates.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }

    streak
}
