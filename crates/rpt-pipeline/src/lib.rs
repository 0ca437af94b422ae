//! Declarative SQL pipelines over report tables.
//!
//! A pipeline is described by a YAML config: one source table, an ordered
//! list of SQL transformation steps, one destination table. The executor
//! loads the source, threads a single "current table" through the steps
//! (each step queries it as `raw_data`), and stores the final result.
//!
//! ```ignore
//! use rpt_pipeline::{load_pipeline_config, run_pipeline};
//!
//! let config = load_pipeline_config(Path::new("config/pipeline.yaml"))?;
//! run_pipeline(&config)?;
//! ```

mod config;
mod engine;
mod error;
mod executor;

// === Error Types ===
pub use error::{PipelineError, Result, TransformError};

// === Config Model ===
pub use config::{Endpoint, PipelineConfig, TransformStep, load_pipeline_config, parse_pipeline_config};

// === Engine & Executor ===
pub use engine::{LOGICAL_TABLE_NAME, apply_step, run_steps};
pub use executor::run_pipeline;
