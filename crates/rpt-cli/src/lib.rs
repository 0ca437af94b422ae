//! CLI library components for the report ETL.

pub mod logging;
