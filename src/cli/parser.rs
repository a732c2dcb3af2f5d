use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to track employee work hours with SQLite
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee work hours: an entry list plus a per-user monthly calendar",
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

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a time entry to the list tracker
    Add {
        /// Employee name
        name: String,

        /// Date of the worked hours (YYYY-MM-DD)
        date: String,

        /// Hours worked
        hours: String,

        /// Task description
        task: String,
    },

    /// List all time entries
    List,

    /// Delete a time entry by its list position
    Del {
        /// Entry index as shown by `list` (1-based)
        index: usize,
    },

    /// Delete all time entries
    Clear,

    /// Log in to the calendar tracker (remembered across invocations)
    Login {
        /// Username to log in as
        username: String,
    },

    /// Log out of the calendar tracker
    Logout,

    /// Show the hours calendar for the logged-in user
    Cal {
        #[arg(long = "month", help = "Jump to a month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long = "next", conflicts_with = "month", help = "Move to the next month")]
        next: bool,

        #[arg(
            long = "prev",
            conflicts_with_all = ["month", "next"],
            help = "Move to the previous month"
        )]
        prev: bool,
    },

    /// Record hours for one day of the current calendar month
    Set {
        /// Day of month
        day: u32,

        /// Hours worked (stored as typed; defaults to `default_hours` from
        /// the configuration when omitted)
        hours: Option<String>,
    },

    /// Export the entry list to a file
    Export {
        #[arg(long = "format", value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "out", help = "Output file path")]
        out: String,

        #[arg(long = "force", help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
