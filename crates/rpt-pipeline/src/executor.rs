//! The pipeline executor: load, transform, store.

use polars::prelude::DataFrame;
use tracing::info;

use rpt_ingest::load_table;
use rpt_output::store_table;

use crate::config::PipelineConfig;
use crate::engine::run_steps;
use crate::error::Result;

/// Runs one pipeline end to end and returns the final table (useful for
/// summaries; the authoritative output is the destination file).
///
/// Stages run strictly in order: load the source by its kind, fold the SQL
/// steps over the table, then store the result, creating any missing
/// destination directories. The first failing stage aborts the run; nothing
/// is written to the destination and already-created directories are left as
/// they are. There are no retries.
pub fn run_pipeline(config: &PipelineConfig) -> Result<DataFrame> {
    let table = load_table(&config.source.path, config.source.kind)?;
    info!(
        source = %config.source.path.display(),
        kind = %config.source.kind,
        rows = table.height(),
        "source table loaded"
    );

    let table = run_steps(table, &config.steps)?;
    info!(steps = config.steps.len(), rows = table.height(), "transformations applied");

    store_table(&table, &config.destination.path, config.destination.kind)?;
    info!(
        destination = %config.destination.path.display(),
        kind = %config.destination.kind,
        "destination table stored"
    );
    Ok(table)
}
