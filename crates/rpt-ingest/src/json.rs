//! JSON loading via the Polars reader.

use std::fs::File;
use std::num::NonZeroUsize;
use std::path::Path;

use polars::prelude::{DataFrame, JsonFormat, JsonReader, SerReader};

use crate::csv::check_exists;
use crate::error::{LoadError, Result};

/// Reads a JSON report (an array of flat objects) into a DataFrame.
///
/// An empty array loads as a zero-row frame; rejecting rowless tables is the
/// caller's decision, not the reader's.
pub fn read_json_table(path: &Path) -> Result<DataFrame> {
    check_exists(path)?;
    let file = File::open(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    JsonReader::new(file)
        .with_json_format(JsonFormat::Json)
        .infer_schema_len(NonZeroUsize::new(100))
        .finish()
        .map_err(|e| LoadError::parse(path, e))
}
