//! The SQL transformation engine.
//!
//! Each step runs in a fresh `SQLContext` with exactly one table registered:
//! the current frame, under [`LOGICAL_TABLE_NAME`]. That makes the chaining
//! model explicit in the types: step i+1 can only ever query step i's output,
//! never the original source or an earlier intermediate.
//!
//! Step SQL is trusted as written. There is no sanitization or sandboxing;
//! the config author is on the same side of the trust boundary as the person
//! running the binary.

use polars::prelude::{DataFrame, IntoLazy, LazyFrame};
use polars::sql::SQLContext;
use tracing::debug;

use crate::config::TransformStep;
use crate::error::TransformError;

/// The fixed logical name a step's query sees the current table under.
pub const LOGICAL_TABLE_NAME: &str = "raw_data";

/// Runs one SQL step against the current table and returns the result as the
/// new current table. `step_index` is 1-based and only used for reporting.
pub fn apply_step(
    df: DataFrame,
    sql: &str,
    step_index: usize,
) -> Result<DataFrame, TransformError> {
    let mut ctx = SQLContext::new();
    ctx.register(LOGICAL_TABLE_NAME, df.lazy());
    ctx.execute(sql)
        .and_then(LazyFrame::collect)
        .map_err(|error| TransformError {
            step: step_index,
            message: error.to_string(),
        })
}

/// Folds [`apply_step`] over an ordered step list.
pub fn run_steps(df: DataFrame, steps: &[TransformStep]) -> Result<DataFrame, TransformError> {
    let mut current = df;
    for (index, step) in steps.iter().enumerate() {
        current = apply_step(current, &step.sql, index + 1)?;
        debug!(
            step = index + 1,
            rows = current.height(),
            columns = current.width(),
            "transformation step applied"
        );
    }
    Ok(current)
}
