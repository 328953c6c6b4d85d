use crate::cli::commands::list::print_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::AppResult;

/// Search entries by keyword across summary and detail.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { keyword, details } = cmd {
        let store = WorkLogStore::open(&cfg.database)?;
        let entries = store.search(keyword)?;

        if entries.is_empty() {
            println!("No entries matching '{}'.", keyword.trim());
            return Ok(());
        }

        print_entries(&entries, *details);
    }
    Ok(())
}
