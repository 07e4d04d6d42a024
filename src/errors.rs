//! Unified application error type.
//! Every module (source, cache, core, render, cli) returns AppError so the
//! binary can report failures in one place.

use crate::core::parser::ParseError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Row parsing
    // ---------------------------
    #[error("Invalid logbook row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: ParseError,
    },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("No logbook entry for {0}")]
    NoEntry(String),

    // ---------------------------
    // Source and cache
    // ---------------------------
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Cache error: {0}")]
    Cache(String),

    // ---------------------------
    // Rendering
    // ---------------------------
    #[error("Template error: {0}")]
    Template(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// The ISO date a failed lookup asked for, if this is a lookup miss.
    pub fn missing_date(&self) -> Option<&str> {
        match self {
            AppError::NoEntry(date) => Some(date),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
