//! CSV loading via the Polars reader.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{LoadError, Result};

/// Reads a CSV report into a DataFrame.
///
/// The first row is taken as the header; column dtypes are inferred from the
/// leading rows. A header-only file loads as a zero-row frame; whether that
/// is acceptable is the caller's call (a pipeline runs its steps over it, a
/// merge rejects it).
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    check_exists(path)?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::parse(path, e))?
        .finish()
        .map_err(|e| LoadError::parse(path, e))
}

pub(crate) fn check_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
