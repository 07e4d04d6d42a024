use crate::core::logbook::InvalidRowPolicy;
use crate::errors::{AppError, AppResult};
use crate::source::{CsvSource, GoogleSheetsSource, SourceBackend};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Which backend supplies the raw rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Google,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: SourceKind,
    #[serde(default)]
    pub spreadsheet_key: String,
    #[serde(default = "default_auth_file")]
    pub auth_file: String,
    #[serde(default)]
    pub csv_path: String,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    /// Seconds a fetched grid stays fresh.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub on_invalid_row: InvalidRowPolicy,
}

fn default_source() -> SourceKind {
    SourceKind::Google
}
fn default_auth_file() -> String {
    "service.json".to_string()
}
fn default_worksheet() -> String {
    "entries".to_string()
}
fn default_cache_dir() -> String {
    Config::config_dir()
        .join("cache")
        .to_string_lossy()
        .to_string()
}
fn default_cache_ttl() -> u64 {
    3600
}
fn default_templates_dir() -> String {
    "templates".to_string()
}
fn default_template() -> String {
    crate::render::BUILTIN_TEMPLATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            spreadsheet_key: String::new(),
            auth_file: default_auth_file(),
            csv_path: String::new(),
            worksheet: default_worksheet(),
            cache_dir: default_cache_dir(),
            cache_ttl: default_cache_ttl(),
            templates_dir: default_templates_dir(),
            template: default_template(),
            on_invalid_row: InvalidRowPolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sheetlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sheetlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sheetlog.conf")
    }

    /// Load configuration from `path` (or the standard location), falling back
    /// to defaults when the file does not exist. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            log::debug!("No configuration at {}, using defaults", path.display());
            Config::default()
        };

        cfg.apply_env()?;
        Ok(cfg)
    }

    /// Variables from the environment (or a `.env` file) win over the file.
    fn apply_env(&mut self) -> AppResult<()> {
        if let Ok(dir) = env::var("CACHE_DIR") {
            self.cache_dir = dir;
        }
        if let Ok(ttl) = env::var("GSHEETS_CACHE") {
            self.cache_ttl = ttl
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("GSHEETS_CACHE is not a number: {ttl}")))?;
        }
        if let Ok(key) = env::var("SHEETLOG_SPREADSHEET_KEY") {
            self.spreadsheet_key = key;
        }
        if let Ok(auth) = env::var("SHEETLOG_AUTH_FILE") {
            self.auth_file = auth;
        }
        if let Ok(csv) = env::var("SHEETLOG_CSV") {
            self.source = SourceKind::Csv;
            self.csv_path = csv;
        }
        Ok(())
    }

    /// Write a default configuration file, refusing to clobber an existing one.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() {
            return Err(AppError::Config(format!(
                "configuration already exists: {}",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    pub fn cache_path(&self) -> PathBuf {
        expand_tilde(&self.cache_dir)
    }

    pub fn templates_path(&self) -> PathBuf {
        expand_tilde(&self.templates_dir)
    }

    /// Build the configured source backend.
    pub fn source_backend(&self) -> AppResult<SourceBackend> {
        match self.source {
            SourceKind::Google => {
                if self.spreadsheet_key.trim().is_empty() {
                    return Err(AppError::Config(
                        "spreadsheet_key is required for the google source".to_string(),
                    ));
                }
                Ok(SourceBackend::GoogleSheets(GoogleSheetsSource::new(
                    &self.spreadsheet_key,
                    expand_tilde(&self.auth_file),
                )))
            }
            SourceKind::Csv => {
                if self.csv_path.trim().is_empty() {
                    return Err(AppError::Config(
                        "csv_path is required for the csv source".to_string(),
                    ));
                }
                Ok(SourceBackend::Csv(CsvSource::new(expand_tilde(
                    &self.csv_path,
                ))))
            }
        }
    }
}
