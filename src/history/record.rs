//! A recorded timer period.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::SessionKind;

/// One finished timer period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// What kind of period this was
    pub kind: SessionKind,
    /// When the period started
    pub started_at: DateTime<Utc>,
    /// When the period ended
    pub ended_at: DateTime<Utc>,
    /// Seconds actually spent in the period
    pub duration_seconds: i64,
    /// Whether the period ran to completion (false = abandoned)
    pub completed: bool,
}

impl SessionRecord {
    /// Create a new, unpersisted record.
    #[must_use]
    pub const fn new(
        kind: SessionKind,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        duration_seconds: i64,
        completed: bool,
    ) -> Self {
        Self {
            id: None,
            kind,
            started_at,
            ended_at,
            duration_seconds,
            completed,
        }
    }

    /// Get the start time in the local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at.with_timezone(&Local)
    }

    /// Minutes spent in the period, rounded down.
    #[must_use]
    pub const fn duration_minutes(&self) -> i64 {
        self.duration_seconds / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let now = Utc::now();
        let record = SessionRecord::new(SessionKind::Work, now, now, 1500, true);

        assert!(record.id.is_none());
        assert_eq!(record.kind, SessionKind::Work);
        assert_eq!(record.duration_minutes(), 25);
        assert!(record.completed);
    }

    #[test]
    fn test_duration_minutes_floors() {
        let now = Utc::now();
        let record = SessionRecord::new(SessionKind::Work, now, now, 119, false);
        assert_eq!(record.duration_minutes(), 1);
    }
}
