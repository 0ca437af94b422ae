//! Shared primitives for the report ETL workspace.
//!
//! This crate is intentionally small: it holds the file-kind vocabulary used
//! by the load/store adapters and the configuration-level error types that the
//! other crates agree on. Table handling lives with the crates that own it.

mod error;
mod format;

pub use error::{ConfigError, UnsupportedFormatError};
pub use format::FileKind;
