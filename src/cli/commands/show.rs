use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logbook::Logbook;
use crate::errors::{AppError, AppResult};
use crate::render::EntryRenderer;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date, template } = cmd {
        if parse_date(date).is_none() {
            return Err(AppError::InvalidDate(date.clone()));
        }

        let logbook = Logbook::from_config(cfg)?;
        let entry = logbook.entry(date)?;

        let name = template.as_deref().unwrap_or(&cfg.template);
        let renderer = EntryRenderer::new(&cfg.templates_path(), name)?;
        print!("{}", renderer.render(entry)?);
    }
    Ok(())
}
