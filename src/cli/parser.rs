use crate::export::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftboard
/// Operational dashboard over shift state-duration records stored in SQLite
#[derive(Parser)]
#[command(
    name = "shiftboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter shift state records by client, endpoint, shift day and period; show reasons and the states timeline",
    long_about = None
)]
pub struct Cli {
    /// Override database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the records table name
    #[arg(global = true, long = "table")]
    pub table: Option<String>,

    /// Debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Inspect the records database (read-only)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// List the valid choices for the next filter stage
    Options {
        #[arg(long, help = "Client name")]
        client: Option<String>,

        #[arg(long, help = "Endpoint name (requires --client)")]
        endpoint: Option<String>,

        #[arg(
            long = "shift-day",
            value_name = "YYYY-MM-DD",
            help = "Shift day (requires --client and --endpoint)"
        )]
        shift_day: Option<String>,
    },

    /// Confirm a complete selection and show the dashboard
    View {
        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long = "shift-day", value_name = "YYYY-MM-DD")]
        shift_day: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Period begin: 'YYYY-MM-DD HH:MM[:SS]', or HH:MM[:SS] on the shift day"
        )]
        begin: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Period end: 'YYYY-MM-DD HH:MM[:SS]', or HH:MM[:SS] on the shift day"
        )]
        end: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Timeline series to emphasise (comma separated); others are dimmed"
        )]
        states: Vec<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE", help = "Write json/csv output to FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive session: pick each stage from numbered lists
    Browse,
}
