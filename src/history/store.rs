//! Session history storage.
//!
//! Persists finished timer periods to the local database.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use super::record::SessionRecord;
use crate::engine::SessionKind;
use crate::error::TomataError;
use crate::storage::Database;

/// Storage for finished timer periods.
pub struct HistoryStore {
    db: Database,
}

impl HistoryStore {
    /// Open the store against the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, TomataError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a record, filling in its database ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, record: &mut SessionRecord) -> Result<(), TomataError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO sessions (kind, started_at, ended_at, duration_seconds, completed)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.kind.as_str(),
                record.started_at.to_rfc3339(),
                record.ended_at.to_rfc3339(),
                record.duration_seconds,
                record.completed,
            ],
        )
        .map_err(|e| TomataError::Database(format!("Failed to insert session: {e}")))?;

        record.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get the most recent records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, TomataError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, started_at, ended_at, duration_seconds, completed
                  FROM sessions
                  ORDER BY started_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| TomataError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_record)
            .map_err(|e| TomataError::Database(format!("Failed to query sessions: {e}")))?;

        collect_records(rows)
    }

    /// Get the most recent records of one kind, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_by_kind(
        &self,
        kind: SessionKind,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, TomataError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, started_at, ended_at, duration_seconds, completed
                  FROM sessions
                  WHERE kind = ?1
                  ORDER BY started_at DESC
                  LIMIT ?2",
            )
            .map_err(|e| TomataError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params![kind.as_str(), limit], row_to_record)
            .map_err(|e| TomataError::Database(format!("Failed to query sessions: {e}")))?;

        collect_records(rows)
    }

    /// Get records for a date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SessionRecord>, TomataError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, started_at, ended_at, duration_seconds, completed
                  FROM sessions
                  WHERE started_at >= ?1 AND started_at < ?2
                  ORDER BY started_at DESC",
            )
            .map_err(|e| TomataError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([start.to_rfc3339(), end.to_rfc3339()], row_to_record)
            .map_err(|e| TomataError::Database(format!("Failed to query sessions: {e}")))?;

        collect_records(rows)
    }

    /// Total completed work time in seconds for a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn total_work_seconds(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, TomataError> {
        let conn = self.db.connection();

        let total: i64 = conn
            .query_row(
                r"SELECT COALESCE(SUM(duration_seconds), 0)
                  FROM sessions
                  WHERE started_at >= ?1 AND started_at < ?2
                    AND completed = 1
                    AND kind = 'work'",
                [start.to_rfc3339(), end.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| TomataError::Database(format!("Failed to query total time: {e}")))?;

        Ok(total)
    }

    /// Delete all records (for testing).
    #[cfg(test)]
    pub fn delete_all(&self) -> Result<(), TomataError> {
        let conn = self.db.connection();

        conn.execute("DELETE FROM sessions", [])
            .map_err(|e| TomataError::Database(format!("Failed to delete sessions: {e}")))?;

        Ok(())
    }
}

/// Convert a database row to a `SessionRecord`.
fn row_to_record(row: &Row<'_>) -> Result<SessionRecord, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let kind_str: String = row.get(1)?;
    let started_at_str: String = row.get(2)?;
    let ended_at_str: String = row.get(3)?;
    let duration_seconds: i64 = row.get(4)?;
    let completed: bool = row.get(5)?;

    let started_at = parse_timestamp(&started_at_str);
    let ended_at = parse_timestamp(&ended_at_str);

    Ok(SessionRecord {
        id: Some(id),
        kind: SessionKind::parse(&kind_str).unwrap_or(SessionKind::Work),
        started_at,
        ended_at,
        duration_seconds,
        completed,
    })
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn collect_records<I>(rows: I) -> Result<Vec<SessionRecord>, TomataError>
where
    I: Iterator<Item = Result<SessionRecord, rusqlite::Error>>,
{
    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| TomataError::Database(e.to_string()))?);
    }
    Ok(records)
}
