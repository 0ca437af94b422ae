//! Result types passed from commands to summary printing.

use std::collections::BTreeMap;
use std::path::PathBuf;

use polars::prelude::DataFrame;

use rpt_model::ConfigError;

#[derive(Debug)]
pub struct MergeResult {
    /// Path of the exported merged report.
    pub output: PathBuf,
    /// The merged table, kept for the preview.
    pub table: DataFrame,
    /// Identities that merged, in join order.
    pub merged: Vec<String>,
    /// Files that failed to load and were skipped.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct RunResult {
    /// Destination path from the config.
    pub destination: PathBuf,
    /// Number of transformation steps applied.
    pub steps: usize,
    /// The final table, kept for the preview.
    pub table: DataFrame,
}

/// Parses repeated `<file-name>=<column>` selections into a key map.
pub fn parse_key_selections(selections: &[String]) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut keys = BTreeMap::new();
    for selection in selections {
        let Some((identity, column)) = selection.split_once('=') else {
            return Err(ConfigError::invalid(
                "--on",
                format!("'{selection}' is not of the form <file-name>=<column>"),
            ));
        };
        let identity = identity.trim();
        let column = column.trim();
        if identity.is_empty() || column.is_empty() {
            return Err(ConfigError::invalid(
                "--on",
                format!("'{selection}' is not of the form <file-name>=<column>"),
            ));
        }
        keys.insert(identity.to_string(), column.to_string());
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_column_pairs() {
        let keys = parse_key_selections(&[
            "shopify.csv=order_id".to_string(),
            "facebook_ads.csv = ad_order".to_string(),
        ])
        .unwrap();
        assert_eq!(keys.get("shopify.csv").unwrap(), "order_id");
        assert_eq!(keys.get("facebook_ads.csv").unwrap(), "ad_order");
    }

    #[test]
    fn rejects_selection_without_equals() {
        assert!(parse_key_selections(&["shopify.csv".to_string()]).is_err());
    }

    #[test]
    fn rejects_empty_column() {
        assert!(parse_key_selections(&["shopify.csv=".to_string()]).is_err());
    }
}
