use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for sheetlog
/// Read a travel logbook from a spreadsheet and print it as Markdown
#[derive(Parser)]
#[command(
    name = "sheetlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read a travel logbook from a spreadsheet and render each day as Markdown",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.sheetlog/sheetlog.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the configuration as YAML")]
        print_config: bool,
    },

    /// Print every past logbook entry
    List {
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        #[arg(long, help = "Template name in the templates directory, or 'builtin'")]
        template: Option<String>,
    },

    /// Print the entry for one day
    Show {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Template name in the templates directory, or 'builtin'")]
        template: Option<String>,
    },

    /// Manage the fetch cache
    Cache {
        #[arg(long = "clear", help = "Forget the cached worksheet for the configured source")]
        clear: bool,
    },
}
