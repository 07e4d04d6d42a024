use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::STANDARD_HEADER;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration directory and writes a default
/// configuration file. An existing file is left alone.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init(cli.config.as_deref())?;

    success(format!("Config file: {}", path.display()));
    info("Set `spreadsheet_key` (google) or `csv_path` (csv) before running `list`.");
    info(format!("Expected worksheet columns: {}", STANDARD_HEADER.join(", ")));
    Ok(())
}
