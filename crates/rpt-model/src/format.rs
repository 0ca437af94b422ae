//! File kinds understood by the load and store adapters.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::UnsupportedFormatError;

/// Tabular file formats the adapters can handle.
///
/// All three kinds are readable; only [`FileKind::Csv`] and [`FileKind::Xlsx`]
/// are writable (there is no JSON destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Csv,
    Xlsx,
    Json,
}

impl FileKind {
    /// Kinds accepted as a load source.
    pub const READABLE: [FileKind; 3] = [FileKind::Csv, FileKind::Xlsx, FileKind::Json];

    /// Kinds accepted as a store destination.
    pub const WRITABLE: [FileKind; 2] = [FileKind::Csv, FileKind::Xlsx];

    /// The canonical lowercase name, also used as the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Xlsx => "xlsx",
            FileKind::Json => "json",
        }
    }

    pub fn is_writable(self) -> bool {
        Self::WRITABLE.contains(&self)
    }

    /// Infer the kind from a path's extension. The error names the extension
    /// itself, not the whole path.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormatError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase()
            .parse()
    }
}

impl FromStr for FileKind {
    type Err = UnsupportedFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(FileKind::Csv),
            "xlsx" => Ok(FileKind::Xlsx),
            "json" => Ok(FileKind::Json),
            other => Err(UnsupportedFormatError::new(other, "csv, xlsx, json")),
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
