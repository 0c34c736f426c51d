use crate::error::ScheduleError;
use std::io;
use thiserror::Error;

pub mod file;
pub mod text;

pub use file::{
    load_catalog_from_csv, load_catalog_from_json, load_catalog_from_text, read_catalog_csv,
    read_catalog_json,
};
pub use text::parse_catalog;

/// Failures while reading a catalog from text, CSV or JSON.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid catalog: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type ImportResult<T> = Result<T, ImportError>;
