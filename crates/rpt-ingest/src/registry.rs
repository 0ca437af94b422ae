//! The named dataset registry backing the merge path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::loader::load_dataset;

/// Datasets loaded for merging, keyed by identity.
///
/// Load actions are the only writers; planning and merging read. Loading a
/// batch of files is partial-failure tolerant: a file that cannot be read is
/// reported and skipped, the rest still load.
#[derive(Debug, Default)]
pub struct DatasetRegistry {
    datasets: BTreeMap<String, Dataset>,
}

/// Outcome of a batch load: which identities made it in, and which paths
/// failed with what.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<(PathBuf, LoadError)>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dataset, replacing any previous one with the same identity.
    pub fn insert(&mut self, dataset: Dataset) {
        self.datasets.insert(dataset.identity.clone(), dataset);
    }

    pub fn get(&self, identity: &str) -> Option<&Dataset> {
        self.datasets.get(identity)
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Load one file and register it under its file-name identity.
    pub fn load_file(&mut self, path: &Path) -> Result<String, LoadError> {
        let dataset = load_dataset(path)?;
        let identity = dataset.identity.clone();
        info!(
            identity = %identity,
            rows = dataset.row_count(),
            "loaded dataset"
        );
        self.insert(dataset);
        Ok(identity)
    }

    /// Load a batch of files, continuing past individual failures.
    pub fn load_files<'a>(&mut self, paths: impl IntoIterator<Item = &'a Path>) -> LoadReport {
        let mut report = LoadReport::default();
        for path in paths {
            match self.load_file(path) {
                Ok(identity) => report.loaded.push(identity),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping file");
                    report.failed.push((path.to_path_buf(), error));
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn batch_load_skips_bad_files_and_keeps_good_ones() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(dir.path(), "shopify.csv", "order_id,revenue\n1,10\n");
        let unsupported = write_csv(dir.path(), "notes.txt", "not a report\n");
        let missing = dir.path().join("gone.csv");

        let mut registry = DatasetRegistry::new();
        let report = registry.load_files([good.as_path(), unsupported.as_path(), missing.as_path()]);

        assert_eq!(report.loaded, vec!["shopify.csv".to_string()]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("shopify.csv").is_some());
    }

    #[test]
    fn reloading_replaces_the_previous_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_csv(dir.path(), "ads.csv", "campaign,spend\na,1\n");
        let mut registry = DatasetRegistry::new();
        registry.load_file(&first).unwrap();
        assert_eq!(registry.get("ads.csv").unwrap().row_count(), 1);

        write_csv(dir.path(), "ads.csv", "campaign,spend\na,1\nb,2\n");
        registry.load_file(&first).unwrap();
        assert_eq!(registry.get("ads.csv").unwrap().row_count(), 2);
    }
}
