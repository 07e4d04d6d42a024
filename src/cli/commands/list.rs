use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::logbook::Logbook;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::render::EntryRenderer;
use crate::ui::messages::{entry_header, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { format, template } = cmd {
        let logbook = Logbook::from_config(cfg)?;

        if logbook.is_empty() {
            warning("No logbook entries found.");
            return Ok(());
        }

        match format {
            OutputFormat::Json => {
                let entries: Vec<&Entry> = logbook.entries().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Markdown => {
                let name = template.as_deref().unwrap_or(&cfg.template);
                let renderer = EntryRenderer::new(&cfg.templates_path(), name)?;

                for (i, entry) in logbook.entries().enumerate() {
                    entry_header(i, &entry.iso_date);
                    println!("{}", renderer.render(entry)?);
                }
            }
        }
    }
    Ok(())
}
