//! The named dataset wrapper handed to merge planning.

use polars::prelude::DataFrame;

/// A loaded report table with its registry identity.
///
/// The identity derives from the source file name (e.g. `shopify.csv`) and is
/// what users refer to when selecting datasets and merge keys. The underlying
/// frame is never mutated by planning or merging; executors work on copies.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Registry identity, normally the source file name.
    pub identity: String,
    /// The table contents.
    pub data: DataFrame,
}

impl Dataset {
    pub fn new(identity: impl Into<String>, data: DataFrame) -> Self {
        Self {
            identity: identity.into(),
            data,
        }
    }

    /// Identity with the file extension stripped, used as the rename suffix
    /// for conflicting columns (`revenue` -> `revenue_shopify`).
    pub fn cleaned_identity(&self) -> &str {
        self.identity
            .split('.')
            .next()
            .unwrap_or(self.identity.as_str())
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.data.height()
    }
}
