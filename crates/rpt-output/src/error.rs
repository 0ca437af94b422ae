//! Error types for table storage.

use std::path::PathBuf;
use thiserror::Error;

use rpt_model::UnsupportedFormatError;

/// Errors that can occur while writing a table to disk.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The destination kind is not one the store adapters handle.
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    /// Could not create the destination directory structure.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create the destination file.
    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The writer rejected the table contents.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl StoreError {
    pub(crate) fn write(path: &std::path::Path, message: impl ToString) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
