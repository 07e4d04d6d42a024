//! sheetlog library root.
//! Exposes the CLI parser, the high-level run() function and the logbook
//! pipeline: source → cache → parser → store → renderer.

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod render;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Cache { .. } => cli::commands::cache::handle(&cli.command, cfg),
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // a missing .env is fine; variables may come from the real environment
    dotenvy::dotenv().ok();

    init_logging();

    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
