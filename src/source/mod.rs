//! Row sources. Each backend turns a worksheet name into a raw cell grid.

mod google;
mod local;

pub use google::{GoogleSheetsSource, ServiceAccountKey};
pub use local::CsvSource;

use crate::errors::AppResult;

/// Raw worksheet cells, row-major, header first.
pub type Grid = Vec<Vec<String>>;

#[derive(Debug, Clone)]
pub enum SourceBackend {
    GoogleSheets(GoogleSheetsSource),
    Csv(CsvSource),
}

impl SourceBackend {
    /// Stable identifier used as the cache key prefix.
    pub fn source_id(&self) -> String {
        match self {
            SourceBackend::GoogleSheets(s) => format!("google-{}", s.key()),
            SourceBackend::Csv(s) => format!("csv-{}", s.path().display()),
        }
    }

    pub fn fetch(&self, worksheet: &str) -> AppResult<Grid> {
        log::info!("Fetching worksheet '{worksheet}' from {}", self.source_id());
        match self {
            SourceBackend::GoogleSheets(s) => s.fetch(worksheet),
            SourceBackend::Csv(s) => s.fetch(worksheet),
        }
    }
}
