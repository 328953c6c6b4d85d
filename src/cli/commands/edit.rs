use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Overwrite date/summary/detail of an existing entry.
/// Editing an id that no longer exists is a silent no-op, matching the
/// fire-and-forget semantics the GUI shell relies on for stale edits.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_str,
        summary,
        detail,
    } = cmd
    {
        if summary.trim().is_empty() {
            return Err(AppError::EmptySummary);
        }

        let log_date =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let store = WorkLogStore::open(&cfg.database)?;
        store.update(*id, log_date, summary, detail)?;

        success(format!("Entry #{id} saved."));
    }
    Ok(())
}
