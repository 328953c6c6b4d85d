use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkLogEntry;
use crate::utils::date;

/// List entries for a single day (YYYY-MM-DD) or a whole month (YYYY-MM).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, details } = cmd {
        let store = WorkLogStore::open(&cfg.database)?;

        let (label, entries) = match period {
            None => {
                let today = date::today();
                (today.to_string(), store.get_by_date(today)?)
            }
            Some(p) => {
                if let Some(d) = date::parse_date(p) {
                    (p.clone(), store.get_by_date(d)?)
                } else if let Some(m) = date::parse_month(p) {
                    (p.clone(), store.get_by_month(m)?)
                } else {
                    return Err(AppError::InvalidDate(p.clone()));
                }
            }
        };

        if entries.is_empty() {
            println!("No entries for {label}.");
            return Ok(());
        }

        print_entries(&entries, *details);
    }
    Ok(())
}

pub(crate) fn print_entries(entries: &[WorkLogEntry], details: bool) {
    for e in entries {
        println!("[{}] {}  {}", e.id, e.log_date, e.summary);
        if details && !e.detail.trim().is_empty() {
            let detail = e.detail.replace('\r', "");
            for line in detail.split('\n') {
                println!("      {line}");
            }
        }
    }
}
