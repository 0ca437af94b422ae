//! Kind-keyed store adapters.

use std::fs::File;
use std::path::Path;

use polars::prelude::{AnyValue, CsvWriter, DataFrame, SerWriter};
use rust_xlsxwriter::Workbook;
use tracing::info;

use rpt_model::{FileKind, UnsupportedFormatError};

use crate::error::{Result, StoreError};

/// Writes a table to `path` in the given kind, creating missing parent
/// directories first.
///
/// Only CSV and XLSX destinations exist; anything else is an
/// [`UnsupportedFormatError`]. Partially written files are not cleaned up on
/// failure, and created directories are never rolled back.
pub fn store_table(df: &DataFrame, path: &Path, kind: FileKind) -> Result<()> {
    if !kind.is_writable() {
        return Err(StoreError::UnsupportedFormat(UnsupportedFormatError::new(
            kind.as_str(),
            "csv, xlsx",
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    match kind {
        FileKind::Csv => write_csv(df, path)?,
        FileKind::Xlsx => write_xlsx(df, path)?,
        FileKind::Json => unreachable!("json is rejected above"),
    }
    info!(path = %path.display(), rows = df.height(), "table stored");
    Ok(())
}

fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| StoreError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    // CsvWriter needs a mutable frame; clone is cheap (columns are shared).
    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut out)
        .map_err(|e| StoreError::write(path, e))
}

fn write_xlsx(df: &DataFrame, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (index, name) in df.get_column_names().iter().enumerate() {
        worksheet
            .write_string(0, index as u16, name.as_str())
            .map_err(|e| StoreError::write(path, e))?;
    }
    for (col_index, column) in df.get_columns().iter().enumerate() {
        for row_index in 0..df.height() {
            let row = (row_index + 1) as u32;
            let col = col_index as u16;
            let value = column
                .get(row_index)
                .map_err(|e| StoreError::write(path, e))?;
            match value {
                AnyValue::Null => {}
                AnyValue::Boolean(v) => {
                    worksheet
                        .write_boolean(row, col, v)
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::String(v) => {
                    worksheet
                        .write_string(row, col, v)
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::StringOwned(v) => {
                    worksheet
                        .write_string(row, col, v.as_str())
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::Float64(v) => {
                    worksheet
                        .write_number(row, col, v)
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::Float32(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::Int64(v) => {
                    worksheet
                        .write_number(row, col, v as f64)
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::Int32(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::Int16(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::Int8(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                // SQL aggregations come back unsigned (COUNT(*) is an index
                // type), so these must stay numeric cells.
                AnyValue::UInt64(v) => {
                    worksheet
                        .write_number(row, col, v as f64)
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::UInt32(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::UInt16(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                AnyValue::UInt8(v) => {
                    worksheet
                        .write_number(row, col, f64::from(v))
                        .map_err(|e| StoreError::write(path, e))?;
                }
                other => {
                    worksheet
                        .write_string(row, col, other.to_string())
                        .map_err(|e| StoreError::write(path, e))?;
                }
            }
        }
    }

    workbook.save(path).map_err(|e| StoreError::write(path, e))
}
