//! Logbook orchestration: fetch (cached) → header → parse → filter → store.

use crate::cache::FetchCache;
use crate::config::Config;
use crate::core::parser::{normalize_header, parse_row};
use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::source::{Grid, SourceBackend};
use serde::{Deserialize, Serialize};

/// What to do with a row whose date cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRowPolicy {
    /// Log a warning and keep loading.
    #[default]
    Skip,
    /// Abort the whole load with the row's error.
    Fail,
}

#[derive(Debug, Default)]
pub struct Logbook {
    header: Vec<String>,
    store: EntryStore,
}

impl Logbook {
    /// Fetch and load the worksheet described by the configuration.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let source = cfg.source_backend()?;
        let cache = FetchCache::new(cfg.cache_path(), cfg.cache_ttl);
        Self::fetch(&source, &cfg.worksheet, &cache, cfg.on_invalid_row)
    }

    /// Fetch the worksheet through the cache and load it.
    pub fn fetch(
        source: &SourceBackend,
        worksheet: &str,
        cache: &FetchCache,
        policy: InvalidRowPolicy,
    ) -> AppResult<Self> {
        let rows = cache.memoize(&source.source_id(), worksheet, || source.fetch(worksheet))?;
        Self::load(&rows, policy)
    }

    /// Build a logbook from a raw grid whose first row is the header.
    pub fn load(rows: &Grid, policy: InvalidRowPolicy) -> AppResult<Self> {
        let mut logbook = Logbook::default();

        let Some((header_row, data)) = rows.split_first() else {
            log::info!("Worksheet is empty, no entries loaded");
            return Ok(logbook);
        };
        logbook.header = normalize_header(header_row);

        for (i, row) in data.iter().enumerate() {
            // worksheet row numbers are 1-based and include the header
            let row_no = i + 2;
            match parse_row(&logbook.header, row) {
                Ok(entry) if entry.is_valid_entry() => logbook.store.insert(entry),
                Ok(entry) => log::debug!("Ignoring future entry {}", entry.iso_date),
                Err(source) if policy == InvalidRowPolicy::Fail => {
                    return Err(AppError::Parse {
                        row: row_no,
                        source,
                    });
                }
                Err(source) => log::warn!("Skipped invalid entry in row {row_no}: {source}"),
            }
        }

        log::debug!(
            "Total entries checked: {}, stored: {}",
            data.len(),
            logbook.store.len()
        );
        Ok(logbook)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Every stored entry; each call starts a fresh traversal.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.store.iter()
    }

    pub fn entry(&self, iso_date: &str) -> AppResult<&Entry> {
        self.store.get(iso_date).inspect_err(|_| {
            log::warn!("No logbook entry for {iso_date}");
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
