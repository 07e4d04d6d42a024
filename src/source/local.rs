use super::Grid;
use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

/// Worksheets exported as CSV files.
///
/// `path` is either a single file, or a directory holding one
/// `<worksheet>.csv` per worksheet.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_for(&self, worksheet: &str) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(format!("{worksheet}.csv"))
        } else {
            self.path.clone()
        }
    }

    pub fn fetch(&self, worksheet: &str) -> AppResult<Grid> {
        let file = self.file_for(worksheet);
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&file)
            .map_err(|e| AppError::Fetch(format!("{}: {e}", file.display())))?;

        let mut rows = Grid::new();
        for record in rdr.records() {
            let record = record.map_err(|e| AppError::Fetch(format!("{}: {e}", file.display())))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}
