use rusqlite::{Connection, Result};

/// Initialize the database schema.
/// Ensures the `work_log_entries` table and its indexes exist.
/// Idempotent: safe to run against an existing populated file.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS work_log_entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            log_date   TEXT NOT NULL,          -- YYYY-MM-DD
            summary    TEXT NOT NULL,
            detail     TEXT NOT NULL,
            created_at TEXT NOT NULL,          -- RFC 3339 UTC
            updated_at TEXT NOT NULL           -- RFC 3339 UTC
        );

        CREATE INDEX IF NOT EXISTS idx_work_log_entries_log_date
            ON work_log_entries(log_date);
        CREATE INDEX IF NOT EXISTS idx_work_log_entries_updated_at
            ON work_log_entries(updated_at);
        ",
    )?;
    Ok(())
}
