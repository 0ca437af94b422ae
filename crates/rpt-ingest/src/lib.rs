//! Report ingestion for the marketing ETL.
//!
//! This crate turns report exports (CSV, XLSX, JSON) into Polars DataFrames
//! and keeps them in a named [`DatasetRegistry`] for the merge path.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rpt_ingest::DatasetRegistry;
//!
//! let mut registry = DatasetRegistry::new();
//! let report = registry.load_files([
//!     Path::new("reports/shopify.csv"),
//!     Path::new("reports/facebook_ads.xlsx"),
//! ]);
//! for (path, error) in &report.failed {
//!     eprintln!("skipped {}: {error}", path.display());
//! }
//! ```

mod csv;
mod dataset;
mod error;
mod excel;
mod json;
mod loader;
mod registry;

// === Error Types ===
pub use error::{LoadError, Result};

// === Readers ===
pub use csv::read_csv_table;
pub use excel::read_excel_table;
pub use json::read_json_table;

// === Datasets ===
pub use dataset::Dataset;
pub use loader::{load_dataset, load_table};
pub use registry::{DatasetRegistry, LoadReport};
