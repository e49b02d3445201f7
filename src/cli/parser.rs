use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldlogger
/// CLI tool to inspect trip duty logs and render daily log sheets
#[derive(Parser)]
#[command(
    name = "eldlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect trip duty logs and render FMCSA-style driver's daily log sheets",
    long_about = None
)]
pub struct Cli {
    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and output directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List duty timelines and duration summaries from a log file
    List {
        /// JSON file with the trip's daily logs (as returned by the API)
        file: String,

        #[arg(long, help = "Show a single day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(
            long = "segments",
            help = "Also print the normalized segment timeline for each day"
        )]
        segments: bool,
    },

    /// Render daily log sheets to PDF
    Render {
        /// JSON file with the trip's daily logs (as returned by the API)
        file: String,

        #[arg(long, help = "Render a single day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(
            long,
            value_name = "PATH",
            help = "Output file (single day) or directory; defaults to the configured output dir"
        )]
        out: Option<String>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export per-day duration summaries in various formats
    Export {
        /// JSON file with the trip's daily logs (as returned by the API)
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, help = "Export a single day (YYYY-MM-DD)")]
        date: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
