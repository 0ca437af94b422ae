//! Error types for pipeline runs.

use thiserror::Error;

use rpt_ingest::LoadError;
use rpt_model::{ConfigError, UnsupportedFormatError};
use rpt_output::StoreError;

/// A SQL transformation step failed in the query engine.
///
/// Step indices are 1-based, matching the order steps appear in the config.
#[derive(Debug, Error)]
#[error("transformation step {step} failed: {message}")]
pub struct TransformError {
    pub step: usize,
    pub message: String,
}

/// Any failure during a pipeline run. Every variant is fatal for the run;
/// nothing is written to the destination once one occurs.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid pipeline config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] UnsupportedFormatError),

    #[error("failed to load source table: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("failed to store destination table: {0}")]
    Store(#[from] StoreError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
