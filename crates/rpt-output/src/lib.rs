//! Table storage for the report ETL.
//!
//! Store adapters write Polars DataFrames to CSV or XLSX, creating any
//! missing destination directories. The merge path additionally gets a dated
//! `merged_report_<YYYYMMDD>` export helper.

mod error;
mod export;
mod store;

// === Error Types ===
pub use error::{Result, StoreError};

// === Writers ===
pub use export::{export_merged, merged_report_file_name};
pub use store::store_table;
