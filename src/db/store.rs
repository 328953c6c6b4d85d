use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use crate::models::WorkLogEntry;
use crate::utils::date::month_bounds;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};
use std::fs;
use std::path::{Path, PathBuf};

const SELECT_COLUMNS: &str =
    "SELECT id, log_date, summary, detail, created_at, updated_at FROM work_log_entries";

/// Handle over the work-log database.
///
/// Holds one long-lived connection; the application controller replaces the
/// whole store when the user points it at a different database file.
#[derive(Debug)]
pub struct WorkLogStore {
    conn: Connection,
    path: PathBuf,
}

impl WorkLogStore {
    /// Open (or create) the store at `path` and ensure the schema exists.
    /// Creates the containing directory when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::StorageInit(format!("{}: {e}", dir.display())))?;
        }

        let conn = Connection::open(&path)
            .map_err(|e| AppError::StorageInit(format!("{}: {e}", path.display())))?;
        init_db(&conn).map_err(|e| AppError::StorageInit(format!("{}: {e}", path.display())))?;

        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a new entry and return its assigned id.
    /// The summary is trimmed before storage; the caller guarantees it is
    /// not empty.
    pub fn add(&self, log_date: NaiveDate, summary: &str, detail: &str) -> AppResult<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO work_log_entries (log_date, summary, detail, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![date_to_sql(log_date), summary.trim(), detail, now, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrite date/summary/detail of the entry matching `id` and refresh
    /// `updated_at`. Silent no-op when the id does not exist, so stale edits
    /// against a deleted row are simply dropped.
    pub fn update(
        &self,
        id: i64,
        log_date: NaiveDate,
        summary: &str,
        detail: &str,
    ) -> AppResult<()> {
        self.conn.execute(
            "UPDATE work_log_entries
             SET log_date = ?1, summary = ?2, detail = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                date_to_sql(log_date),
                summary.trim(),
                detail,
                Utc::now().to_rfc3339(),
                id
            ],
        )?;
        Ok(())
    }

    /// Hard delete; no-op when the id does not exist.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM work_log_entries WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Entries filed under the given calendar day, most recently touched first.
    pub fn get_by_date(&self, date: NaiveDate) -> AppResult<Vec<WorkLogEntry>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE log_date = ?1 ORDER BY updated_at DESC"
        ))?;
        let rows = stmt.query_map([date_to_sql(date)], row_to_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Entries within the calendar month containing `month`, first day
    /// through last day inclusive.
    pub fn get_by_month(&self, month: NaiveDate) -> AppResult<Vec<WorkLogEntry>> {
        let (start, end) = month_bounds(month);
        let mut stmt = self.conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE log_date >= ?1 AND log_date <= ?2
             ORDER BY log_date ASC, updated_at DESC"
        ))?;
        let rows = stmt.query_map([date_to_sql(start), date_to_sql(end)], row_to_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Entries with `log_date` in `[start, end]` inclusive, in export order.
    pub fn get_by_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<WorkLogEntry>> {
        if end < start {
            return Err(AppError::InvalidRange { start, end });
        }
        let mut stmt = self.conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE log_date >= ?1 AND log_date <= ?2
             ORDER BY log_date ASC, updated_at ASC"
        ))?;
        let rows = stmt.query_map([date_to_sql(start), date_to_sql(end)], row_to_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Substring match over summary and detail, newest day first.
    /// Uses SQLite's default LIKE collation, i.e. ASCII case-insensitive.
    /// A blank keyword returns an empty list without querying.
    pub fn search(&self, keyword: &str) -> AppResult<Vec<WorkLogEntry>> {
        let kw = keyword.trim();
        if kw.is_empty() {
            return Ok(Vec::new());
        }
        let pattern = format!("%{kw}%");
        let mut stmt = self.conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE summary LIKE ?1 OR detail LIKE ?1
             ORDER BY log_date DESC, updated_at DESC"
        ))?;
        let rows = stmt.query_map([pattern], row_to_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Distinct days within the month carrying at least one entry.
    /// Used to mark a calendar view; no ordering guarantee.
    pub fn logged_dates_in_month(&self, month: NaiveDate) -> AppResult<Vec<NaiveDate>> {
        let (start, end) = month_bounds(month);
        let mut stmt = self.conn.prepare_cached(
            "SELECT DISTINCT log_date FROM work_log_entries
             WHERE log_date >= ?1 AND log_date <= ?2",
        )?;
        let rows = stmt.query_map([date_to_sql(start), date_to_sql(end)], |row| {
            let value: String = row.get(0)?;
            parse_sql_date(0, &value)
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn date_to_sql(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn parse_sql_date(idx: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn parse_sql_timestamp(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<WorkLogEntry> {
    let log_date: String = row.get(1)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;
    Ok(WorkLogEntry {
        id: row.get(0)?,
        log_date: parse_sql_date(1, &log_date)?,
        summary: row.get(2)?,
        detail: row.get(3)?,
        created_at: parse_sql_timestamp(4, &created_at)?,
        updated_at: parse_sql_timestamp(5, &updated_at)?,
    })
}
