//! Chained join execution over a computed merge plan.

use std::fmt;

use polars::prelude::{
    DataFrame, IntoLazy, JoinArgs, JoinCoalesce, JoinType, col,
};
use tracing::{debug, info};

use rpt_ingest::DatasetRegistry;

use crate::error::{MergeError, Result};
use crate::plan::MergePlan;

/// Join semantics applied uniformly across the whole merge chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinMode {
    /// Keep only keys present on both sides of each step.
    #[default]
    Inner,
    /// Keep every row of the accumulated left side.
    Left,
    /// Keep keys from either side of each step.
    Outer,
}

impl JoinMode {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinMode::Inner => "inner",
            JoinMode::Left => "left",
            JoinMode::Outer => "outer",
        }
    }

    fn join_type(self) -> JoinType {
        match self {
            JoinMode::Inner => JoinType::Inner,
            JoinMode::Left => JoinType::Left,
            JoinMode::Outer => JoinType::Full,
        }
    }
}

impl fmt::Display for JoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes a merge plan: rename copies, then fold joins left to right.
///
/// Each dataset is copied before its rename map is applied, so the registry's
/// originals survive the merge untouched. The fold joins on the standardized
/// key with the same `mode` at every step. Duplicate key values are not
/// deduplicated; a key appearing k times on one side and m times on the other
/// of a step contributes k*m rows, which is ordinary join semantics.
///
/// The returned frame is the caller's to export; a failed merge returns an
/// error and leaves any previously exported result alone.
pub fn execute_merge(
    registry: &DatasetRegistry,
    plan: &MergePlan,
    selection_order: &[String],
    mode: JoinMode,
) -> Result<DataFrame> {
    if selection_order.len() < 2 {
        return Err(MergeError::NotEnoughDatasets {
            selected: selection_order.len(),
        });
    }

    let mut renamed: Vec<(String, DataFrame)> = Vec::with_capacity(selection_order.len());
    for identity in selection_order {
        let dataset = registry
            .get(identity)
            .ok_or_else(|| MergeError::UnknownDataset {
                identity: identity.clone(),
            })?;
        let mut frame = dataset.data.clone();
        // Applied as one simultaneous rename: a target that equals another
        // column's pre-rename name must not trip a transient duplicate.
        let rename_map: std::collections::BTreeMap<&str, &str> =
            plan.renames_for(identity).collect();
        let new_names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| {
                rename_map
                    .get(name.as_str())
                    .map_or_else(|| name.to_string(), |to| (*to).to_string())
            })
            .collect();
        frame
            .set_column_names(new_names)
            .map_err(|error| MergeError::Rename {
                identity: identity.clone(),
                message: error.to_string(),
            })?;
        if frame.height() == 0 {
            return Err(MergeError::EmptyDataset {
                identity: identity.clone(),
            });
        }
        debug!(identity = %identity, rows = frame.height(), "dataset ready for join");
        renamed.push((identity.clone(), frame));
    }

    let key = plan.standardized_key.as_str();
    let mut frames = renamed.into_iter();
    let (_, mut merged) = frames
        .next()
        .ok_or(MergeError::NotEnoughDatasets { selected: 0 })?;
    for (identity, frame) in frames {
        let args = JoinArgs::new(mode.join_type()).with_coalesce(JoinCoalesce::CoalesceColumns);
        merged = merged
            .lazy()
            .join(frame.lazy(), [col(key)], [col(key)], args)
            .collect()
            .map_err(|error| MergeError::Join {
                identity,
                message: error.to_string(),
            })?;
    }

    info!(
        mode = %mode,
        rows = merged.height(),
        columns = merged.width(),
        "merge complete"
    );
    Ok(merged)
}
