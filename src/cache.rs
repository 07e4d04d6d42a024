//! On-disk memoization of fetched worksheets with a time-to-live.

use crate::errors::{AppError, AppResult};
use crate::source::Grid;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct CachedGrid {
    fetched_at: DateTime<Utc>,
    source_id: String,
    worksheet: String,
    rows: Grid,
}

#[derive(Debug, Clone)]
pub struct FetchCache {
    dir: PathBuf,
    ttl: Duration,
}

impl FetchCache {
    /// A `ttl_secs` of zero disables caching: every call fetches.
    pub fn new(dir: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    fn file_for(&self, source_id: &str, worksheet: &str) -> PathBuf {
        let name: String = format!("{source_id}__{worksheet}")
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    /// Return the grid cached for `(source_id, worksheet)` if it is younger
    /// than the TTL, otherwise run `fetch` and store its result.
    pub fn memoize<F>(&self, source_id: &str, worksheet: &str, fetch: F) -> AppResult<Grid>
    where
        F: FnOnce() -> AppResult<Grid>,
    {
        self.memoize_at(source_id, worksheet, Utc::now(), fetch)
    }

    /// `memoize` with an explicit clock reading.
    pub fn memoize_at<F>(
        &self,
        source_id: &str,
        worksheet: &str,
        now: DateTime<Utc>,
        fetch: F,
    ) -> AppResult<Grid>
    where
        F: FnOnce() -> AppResult<Grid>,
    {
        let path = self.file_for(source_id, worksheet);

        if let Some(cached) = self.read(&path, source_id, worksheet) {
            if now - cached.fetched_at < self.ttl {
                log::info!("Using cached rows for {source_id}/{worksheet}");
                return Ok(cached.rows);
            }
            log::debug!("Cached rows for {source_id}/{worksheet} expired");
        }

        let rows = fetch()?;

        let entry = CachedGrid {
            fetched_at: now,
            source_id: source_id.to_string(),
            worksheet: worksheet.to_string(),
            rows,
        };
        if let Err(e) = self.write(&path, &entry) {
            log::warn!("Could not write cache file {}: {e}", path.display());
        }

        Ok(entry.rows)
    }

    fn read(&self, path: &Path, source_id: &str, worksheet: &str) -> Option<CachedGrid> {
        let raw = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<CachedGrid>(&raw) {
            Ok(c) if c.source_id == source_id && c.worksheet == worksheet => Some(c),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Ignoring unreadable cache file {}: {e}", path.display());
                None
            }
        }
    }

    fn write(&self, path: &Path, entry: &CachedGrid) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(entry)?;
        fs::write(path, json).map_err(|e| AppError::Cache(e.to_string()))
    }

    /// Drop the cached grid. Returns whether anything was removed.
    pub fn clear(&self, source_id: &str, worksheet: &str) -> AppResult<bool> {
        let path = self.file_for(source_id, worksheet);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| AppError::Cache(e.to_string()))?;
        Ok(true)
    }
}
