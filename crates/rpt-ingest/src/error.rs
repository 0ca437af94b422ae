//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

use rpt_model::UnsupportedFormatError;

/// Errors that can occur while loading a report file into a DataFrame.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file kind is not one the load adapters handle.
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    /// The file has no tabular structure at all (no sheet or no header row).
    /// A table with headers but zero rows is not an error here.
    #[error("no tabular data in {path}")]
    Empty { path: PathBuf },

    /// The parser rejected the file contents.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl LoadError {
    pub(crate) fn parse(path: &std::path::Path, message: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, LoadError>;
