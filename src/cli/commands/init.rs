use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::WorkLogStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (unless running in test mode)
///  - the SQLite database with its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing worklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let store = WorkLogStore::open(&cfg.database)?;
    success(format!(
        "Database initialized at {}",
        store.path().display()
    ));

    Ok(())
}
