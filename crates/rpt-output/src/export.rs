//! Dated export of a merged report table.

use std::path::{Path, PathBuf};

use chrono::Local;
use polars::prelude::DataFrame;

use rpt_model::FileKind;

use crate::error::Result;
use crate::store::store_table;

/// The export file name for a merged report: `merged_report_<YYYYMMDD>.<ext>`.
pub fn merged_report_file_name(kind: FileKind) -> String {
    format!(
        "merged_report_{}.{}",
        Local::now().format("%Y%m%d"),
        kind.as_str()
    )
}

/// Writes a merged table into `out_dir` under the dated export name.
///
/// Returns the path actually written. A failed export leaves any previously
/// exported file in place.
pub fn export_merged(df: &DataFrame, out_dir: &Path, kind: FileKind) -> Result<PathBuf> {
    let path = out_dir.join(merged_report_file_name(kind));
    store_table(df, &path, kind)?;
    Ok(path)
}
