use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// CLI application to record dated work-log entries backed by SQLite
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-log recorder: jot dated entries, browse and search them, export ranges to Markdown or plain text",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Add a new log entry
    Add {
        /// Entry summary (single line)
        summary: String,

        /// Day the entry is filed under (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Free-form multi-line detail
        #[arg(long = "detail", default_value = "")]
        detail: String,
    },

    /// Edit an existing entry by id
    Edit {
        /// Id of the entry to edit
        id: i64,

        /// New day (YYYY-MM-DD)
        date: String,

        /// New summary
        summary: String,

        /// New detail
        #[arg(long = "detail", default_value = "")]
        detail: String,
    },

    /// Delete an entry by id
    Del {
        /// Id of the entry to delete
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List entries for a day or a month
    List {
        /// Day (YYYY-MM-DD) or month (YYYY-MM) to list (default: today)
        period: Option<String>,

        /// Also print entry details
        #[arg(long = "details")]
        details: bool,
    },

    /// Search entries by keyword in summary and detail
    Search {
        /// Keyword to look for (substring match)
        keyword: String,

        /// Also print entry details
        #[arg(long = "details")]
        details: bool,
    },

    /// Show the days of a month carrying at least one entry
    Days {
        /// Month to inspect (YYYY-MM, default: current month)
        month: Option<String>,
    },

    /// Export a date range to Markdown or plain text
    Export {
        /// Output document flavor
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file path")]
        file: String,

        #[arg(long = "from", help = "Range start (YYYY-MM-DD)")]
        from: String,

        #[arg(long = "to", help = "Range end (YYYY-MM-DD)")]
        to: String,

        #[arg(long = "details", help = "Include entry details in the document")]
        details: bool,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
