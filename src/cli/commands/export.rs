use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        from,
        to,
        details,
        force,
    } = cmd
    {
        let start = date::parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
        let end = date::parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;

        let store = WorkLogStore::open(&cfg.database)?;
        ExportLogic::export(&store, *format, file, start, end, *details, *force)?;
    }
    Ok(())
}
