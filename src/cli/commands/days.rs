use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Print the days of a month that carry at least one entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { month } = cmd {
        let month_start = match month {
            Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?,
            None => date::today(),
        };

        let store = WorkLogStore::open(&cfg.database)?;
        let mut dates = store.logged_dates_in_month(month_start)?;

        if dates.is_empty() {
            println!("No logged days in {}.", month_start.format("%Y-%m"));
            return Ok(());
        }

        dates.sort();
        for d in dates {
            println!("{d}");
        }
    }
    Ok(())
}
