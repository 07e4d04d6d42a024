use crate::cache::FetchCache;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cache { clear: true } = cmd {
        let source = cfg.source_backend()?;
        let cache = FetchCache::new(cfg.cache_path(), cfg.cache_ttl);

        if cache.clear(&source.source_id(), &cfg.worksheet)? {
            success(format!("Cleared cached '{}' rows", cfg.worksheet));
        } else {
            info("Nothing cached for the configured source.");
        }
    }
    Ok(())
}
