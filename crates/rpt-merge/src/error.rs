//! Error types for merge execution.

use thiserror::Error;

/// Errors raised while executing a merge plan.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A merge needs at least two datasets to join.
    #[error("select at least two datasets to merge (got {selected})")]
    NotEnoughDatasets { selected: usize },

    /// An identity from the selection order is not in the registry.
    #[error("dataset '{identity}' is not loaded")]
    UnknownDataset { identity: String },

    /// A selected dataset has no rows, so every join mode degenerates.
    #[error("dataset '{identity}' has no rows")]
    EmptyDataset { identity: String },

    /// Applying the rename plan to a dataset copy failed.
    #[error("failed to rename columns of '{identity}': {message}")]
    Rename { identity: String, message: String },

    /// The join engine rejected a chained join step.
    #[error("failed to join '{identity}' on the merge key: {message}")]
    Join { identity: String, message: String },
}

/// Result type for merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;
