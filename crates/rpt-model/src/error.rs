//! Configuration-level error types shared across the workspace.

use thiserror::Error;

/// A source, destination, or file kind the adapters do not handle.
///
/// Raised instead of silently skipping the operation: an unknown kind in a
/// pipeline config or on a load path is a user mistake, not a no-op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported format '{kind}' (expected one of: {expected})")]
pub struct UnsupportedFormatError {
    /// The kind string as given (e.g. "parquet", "xls").
    pub kind: String,
    /// Comma-separated list of kinds valid in this position.
    pub expected: String,
}

impl UnsupportedFormatError {
    pub fn new(kind: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            expected: expected.into(),
        }
    }
}

/// Invalid or missing user-supplied configuration.
///
/// Covers both the pipeline YAML model (fields named by their path, e.g.
/// `pipeline.source.config.path`) and the merge selections (datasets and
/// merge-key columns chosen for a merge).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required config field is absent.
    #[error("missing required field '{path}'")]
    MissingField { path: String },

    /// A config field is present but invalid.
    #[error("invalid value for '{path}': {reason}")]
    InvalidField { path: String, reason: String },

    /// A dataset named in the merge selection is not loaded.
    #[error("dataset '{identity}' is not loaded")]
    UnknownDataset { identity: String },

    /// No merge-key column was chosen for a selected dataset.
    #[error("no merge key selected for dataset '{identity}'")]
    MissingMergeKey { identity: String },

    /// The chosen merge-key column does not exist in the dataset.
    #[error("merge key column '{column}' not found in dataset '{identity}'")]
    UnknownKeyColumn { identity: String, column: String },

    /// Failed to read or parse the config file itself.
    #[error("failed to load config {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl ConfigError {
    /// Shorthand for a missing-field error with a dotted YAML path.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Shorthand for an invalid-field error with a dotted YAML path.
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display_names_kind_and_expectation() {
        let err = UnsupportedFormatError::new("parquet", "csv, xlsx, json");
        assert_eq!(
            err.to_string(),
            "unsupported format 'parquet' (expected one of: csv, xlsx, json)"
        );
    }

    #[test]
    fn config_error_display_includes_field_path() {
        let err = ConfigError::missing("pipeline.source.config.path");
        assert_eq!(
            err.to_string(),
            "missing required field 'pipeline.source.config.path'"
        );
    }
}
