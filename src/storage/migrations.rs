//! Database migrations for tomata.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::TomataError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
///
/// # Errors
///
/// Returns an error if the version pragma cannot be read.
pub fn get_version(conn: &Connection) -> Result<i32, TomataError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TomataError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), TomataError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TomataError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub fn run(conn: &Connection) -> Result<(), TomataError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), TomataError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TomataError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates the `sessions` table: one row per finished timer period.
fn migrate_v1(conn: &Connection) -> Result<(), TomataError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL,
            duration_seconds INTEGER NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_started
        ON sessions(started_at);

        CREATE INDEX IF NOT EXISTS idx_sessions_kind
        ON sessions(kind);
        ",
    )
    .map_err(|e| TomataError::Database(format!("Migration v1 failed: {e}")))
}
