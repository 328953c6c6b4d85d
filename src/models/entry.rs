use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One journaled note: a dated summary plus free-form multi-line detail.
///
/// `id` uniquely and permanently identifies the entry; `created_at` is set
/// once at insert and never changes, while `updated_at` is refreshed on
/// every update.
#[derive(Debug, Clone, Serialize)]
pub struct WorkLogEntry {
    pub id: i64,
    pub log_date: NaiveDate,
    pub summary: String,
    pub detail: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
