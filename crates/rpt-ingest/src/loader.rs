//! Kind-keyed load adapter dispatch.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use rpt_model::FileKind;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::{read_csv_table, read_excel_table, read_json_table};

/// Loads a table from `path` using the reader for `kind`.
pub fn load_table(path: &Path, kind: FileKind) -> Result<DataFrame> {
    debug!(path = %path.display(), kind = %kind, "loading table");
    match kind {
        FileKind::Csv => read_csv_table(path),
        FileKind::Xlsx => read_excel_table(path),
        FileKind::Json => read_json_table(path),
    }
}

/// Loads a file as a [`Dataset`], inferring the kind from the extension.
///
/// The dataset identity is the file name (`shopify.csv`), matching how users
/// refer to uploads when selecting datasets to merge.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let kind = FileKind::from_path(path)?;
    let identity = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let data = load_table(path, kind)?;
    Ok(Dataset::new(identity, data))
}
