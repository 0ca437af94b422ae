//! Conflict-aware merging of marketing-report datasets.
//!
//! Merging happens in two phases so the interesting logic stays inspectable:
//!
//! 1. [`plan_merge`] computes a [`MergePlan`]: every dataset's chosen key
//!    column maps to the standardized `merge_key`, and non-key column names
//!    shared between selected datasets get an identity suffix so nothing
//!    collides after the join.
//! 2. [`execute_merge`] applies the plan to copies of the datasets and folds
//!    a chained join over the selection order with a single [`JoinMode`].
//!
//! ```ignore
//! use rpt_merge::{JoinMode, execute_merge, plan_merge};
//!
//! let plan = plan_merge(&registry, &merge_keys, &order)?;
//! let merged = execute_merge(&registry, &plan, &order, JoinMode::Inner)?;
//! ```

mod error;
mod execute;
mod plan;

pub use error::{MergeError, Result};
pub use execute::{JoinMode, execute_merge};
pub use plan::{MergePlan, STANDARDIZED_KEY, plan_merge};
