use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rroster
/// CLI application to track a collaborator roster with SQLite
#[derive(Parser)]
#[command(
    name = "rroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple roster CLI: register collaborators, track away periods and dismissal dates using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a new collaborator
    Add {
        /// Collaborator name (must be unique)
        name: String,
    },

    /// List the roster in display order (active first, then away)
    List {
        #[arg(long = "active", help = "Show only active collaborators")]
        active: bool,

        #[arg(long = "away", help = "Show only away collaborators", conflicts_with = "active")]
        away: bool,
    },

    /// Mark a collaborator as away (or back on duty with --clear)
    Away {
        /// Collaborator id
        id: i64,

        #[arg(long = "clear", help = "Clear the away flag instead of setting it")]
        clear: bool,
    },

    /// Record a dismissal date for a collaborator
    Dismiss {
        /// Collaborator id
        id: i64,

        /// Dismissal date (YYYY-MM-DD, defaults to now)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Print the dismissal report for active collaborators
    Report {
        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "copy", help = "Copy the report to the system clipboard")]
        copy: bool,

        /// Also write the report to a file
        #[arg(long = "file", value_name = "FILE")]
        file: Option<String>,
    },

    /// Export the roster
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the destination file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
