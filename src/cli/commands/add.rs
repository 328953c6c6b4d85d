use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new log entry for a day (default: today).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        summary,
        date: date_str,
        detail,
    } = cmd
    {
        // Summary validation lives here; the store does not re-validate.
        if summary.trim().is_empty() {
            return Err(AppError::EmptySummary);
        }

        let log_date = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let store = WorkLogStore::open(&cfg.database)?;
        let id = store.add(log_date, summary, detail)?;

        success(format!("Entry #{id} added for {log_date}."));
    }
    Ok(())
}
