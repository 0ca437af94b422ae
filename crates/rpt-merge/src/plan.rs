//! Merge planning: key standardization and column-conflict renames.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use rpt_ingest::DatasetRegistry;
use rpt_model::ConfigError;

/// The column name every dataset's chosen merge key is renamed to.
pub const STANDARDIZED_KEY: &str = "merge_key";

/// A computed rename plan for one merge action.
///
/// For each selected dataset the map holds only the columns that actually
/// change: the chosen key column (always mapped to [`STANDARDIZED_KEY`]) and
/// any non-key column whose name occurs in two or more of the selected
/// datasets, suffixed with the owning dataset's cleaned identity. Columns not
/// in the map pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub standardized_key: String,
    renames: BTreeMap<String, BTreeMap<String, String>>,
}

impl MergePlan {
    /// The rename map for one dataset; empty if the identity is unknown.
    pub fn renames_for(&self, identity: &str) -> impl Iterator<Item = (&str, &str)> {
        self.renames
            .get(identity)
            .into_iter()
            .flat_map(|map| map.iter().map(|(from, to)| (from.as_str(), to.as_str())))
    }

    /// Number of datasets covered by this plan.
    pub fn dataset_count(&self) -> usize {
        self.renames.len()
    }

    #[cfg(test)]
    pub(crate) fn rename_map(&self, identity: &str) -> Option<&BTreeMap<String, String>> {
        self.renames.get(identity)
    }
}

/// Computes a merge plan for the selected datasets.
///
/// `merge_keys` maps each selected identity to its chosen key column, and
/// `selection_order` fixes the join order. Planning validates the selection
/// against the registry before touching any columns:
///
/// - every identity in the order must be loaded and have a key chosen,
/// - the chosen key column must exist in that dataset,
/// - an identity may be selected only once.
///
/// The plan itself is deterministic and has no side effects; nothing in the
/// registry is modified.
pub fn plan_merge(
    registry: &DatasetRegistry,
    merge_keys: &BTreeMap<String, String>,
    selection_order: &[String],
) -> Result<MergePlan, ConfigError> {
    let mut seen = BTreeSet::new();
    for identity in selection_order {
        if !seen.insert(identity.as_str()) {
            return Err(ConfigError::invalid(
                "selection",
                format!("dataset '{identity}' selected more than once"),
            ));
        }
    }

    // Gather each dataset's non-key columns, tallying names across the whole
    // selection to find conflicts.
    let mut non_key_columns: Vec<(String, String, Vec<String>)> = Vec::new();
    let mut column_counts: BTreeMap<String, usize> = BTreeMap::new();
    for identity in selection_order {
        let dataset = registry
            .get(identity)
            .ok_or_else(|| ConfigError::UnknownDataset {
                identity: identity.clone(),
            })?;
        let key = merge_keys
            .get(identity)
            .ok_or_else(|| ConfigError::MissingMergeKey {
                identity: identity.clone(),
            })?;
        let columns = dataset.column_names();
        if !columns.iter().any(|column| column == key) {
            return Err(ConfigError::UnknownKeyColumn {
                identity: identity.clone(),
                column: key.clone(),
            });
        }
        let non_key: Vec<String> = columns.into_iter().filter(|column| column != key).collect();
        for column in &non_key {
            *column_counts.entry(column.clone()).or_insert(0) += 1;
        }
        non_key_columns.push((identity.clone(), dataset.cleaned_identity().to_string(), non_key));
    }

    let conflicting: BTreeSet<&str> = column_counts
        .iter()
        .filter(|(_, count)| **count >= 2)
        .map(|(name, _)| name.as_str())
        .collect();
    debug!(conflicts = conflicting.len(), "computed column conflicts");

    let mut renames = BTreeMap::new();
    for (identity, cleaned, non_key) in non_key_columns {
        let mut map = BTreeMap::new();
        // The key column is standardized, never suffixed, even if its name
        // collides with another dataset's non-key column.
        if let Some(key) = merge_keys.get(&identity) {
            map.insert(key.clone(), STANDARDIZED_KEY.to_string());
        }
        for column in non_key {
            if conflicting.contains(column.as_str()) {
                let renamed = format!("{column}_{cleaned}");
                map.insert(column, renamed);
            }
        }
        renames.insert(identity, map);
    }

    Ok(MergePlan {
        standardized_key: STANDARDIZED_KEY.to_string(),
        renames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use rpt_ingest::Dataset;

    fn registry() -> DatasetRegistry {
        let mut registry = DatasetRegistry::new();
        registry.insert(Dataset::new(
            "shopify.csv",
            df!(
                "order_id" => [1i64, 2, 3],
                "revenue" => [100.0, 200.0, 300.0],
                "country" => ["NL", "DE", "NL"],
            )
            .unwrap(),
        ));
        registry.insert(Dataset::new(
            "facebook_ads.csv",
            df!(
                "ad_order" => [2i64, 3, 4],
                "spend" => [10.0, 20.0, 30.0],
                "country" => ["NL", "DE", "BE"],
            )
            .unwrap(),
        ));
        registry.insert(Dataset::new(
            "google_ads.csv",
            df!(
                "gclid_order" => [1i64, 4],
                "clicks" => [12i64, 34],
            )
            .unwrap(),
        ));
        registry
    }

    fn keys(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(identity, key)| (identity.to_string(), key.to_string()))
            .collect()
    }

    fn order(identities: &[&str]) -> Vec<String> {
        identities.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn conflict_free_selection_renames_only_the_keys() {
        let registry = registry();
        let merge_keys = keys(&[("shopify.csv", "order_id"), ("google_ads.csv", "gclid_order")]);
        let selection = order(&["shopify.csv", "google_ads.csv"]);

        let plan = plan_merge(&registry, &merge_keys, &selection).unwrap();

        let shopify = plan.rename_map("shopify.csv").unwrap();
        assert_eq!(shopify.len(), 1);
        assert_eq!(shopify.get("order_id").unwrap(), STANDARDIZED_KEY);
        let google = plan.rename_map("google_ads.csv").unwrap();
        assert_eq!(google.len(), 1);
        assert_eq!(google.get("gclid_order").unwrap(), STANDARDIZED_KEY);
    }

    #[test]
    fn shared_non_key_columns_get_identity_suffixes() {
        let registry = registry();
        let merge_keys = keys(&[
            ("shopify.csv", "order_id"),
            ("facebook_ads.csv", "ad_order"),
            ("google_ads.csv", "gclid_order"),
        ]);
        let selection = order(&["shopify.csv", "facebook_ads.csv", "google_ads.csv"]);

        let plan = plan_merge(&registry, &merge_keys, &selection).unwrap();

        // "country" is in two datasets: suffixed in both, with cleaned identities.
        assert_eq!(
            plan.rename_map("shopify.csv").unwrap().get("country").unwrap(),
            "country_shopify"
        );
        assert_eq!(
            plan.rename_map("facebook_ads.csv")
                .unwrap()
                .get("country")
                .unwrap(),
            "country_facebook_ads"
        );
        // "revenue", "spend", and "clicks" are singletons: untouched.
        assert!(!plan.rename_map("shopify.csv").unwrap().contains_key("revenue"));
        assert!(!plan
            .rename_map("facebook_ads.csv")
            .unwrap()
            .contains_key("spend"));
        assert!(!plan.rename_map("google_ads.csv").unwrap().contains_key("clicks"));
    }

    #[test]
    fn key_column_is_standardized_even_when_its_name_conflicts() {
        let mut registry = DatasetRegistry::new();
        registry.insert(Dataset::new(
            "a.csv",
            df!("order" => [1i64], "x" => [1i64]).unwrap(),
        ));
        // "order" is b's non-key column, so it counts toward conflicts, but
        // a's key column must still map straight to the standardized key.
        registry.insert(Dataset::new(
            "b.csv",
            df!("id" => [1i64], "order" => [2i64]).unwrap(),
        ));
        let merge_keys = keys(&[("a.csv", "order"), ("b.csv", "id")]);
        let selection = order(&["a.csv", "b.csv"]);

        let plan = plan_merge(&registry, &merge_keys, &selection).unwrap();

        assert_eq!(
            plan.rename_map("a.csv").unwrap().get("order").unwrap(),
            STANDARDIZED_KEY
        );
        // b's "order" is only in one *non-key* column set, so it stays as is.
        assert!(!plan.rename_map("b.csv").unwrap().contains_key("order"));
    }

    #[test]
    fn unknown_dataset_in_selection_fails() {
        let registry = registry();
        let merge_keys = keys(&[("shopify.csv", "order_id"), ("tiktok.csv", "order")]);
        let selection = order(&["shopify.csv", "tiktok.csv"]);

        let err = plan_merge(&registry, &merge_keys, &selection).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDataset { identity } if identity == "tiktok.csv"));
    }

    #[test]
    fn missing_merge_key_fails() {
        let registry = registry();
        let merge_keys = keys(&[("shopify.csv", "order_id")]);
        let selection = order(&["shopify.csv", "facebook_ads.csv"]);

        let err = plan_merge(&registry, &merge_keys, &selection).unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingMergeKey { identity } if identity == "facebook_ads.csv")
        );
    }

    #[test]
    fn key_column_absent_from_dataset_fails() {
        let registry = registry();
        let merge_keys = keys(&[("shopify.csv", "order_nr"), ("facebook_ads.csv", "ad_order")]);
        let selection = order(&["shopify.csv", "facebook_ads.csv"]);

        let err = plan_merge(&registry, &merge_keys, &selection).unwrap_err();
        assert!(
            matches!(err, ConfigError::UnknownKeyColumn { column, .. } if column == "order_nr")
        );
    }

    #[test]
    fn duplicate_selection_fails() {
        let registry = registry();
        let merge_keys = keys(&[("shopify.csv", "order_id")]);
        let selection = order(&["shopify.csv", "shopify.csv"]);

        assert!(plan_merge(&registry, &merge_keys, &selection).is_err());
    }

    #[test]
    fn planning_is_deterministic() {
        let registry = registry();
        let merge_keys = keys(&[
            ("shopify.csv", "order_id"),
            ("facebook_ads.csv", "ad_order"),
        ]);
        let selection = order(&["shopify.csv", "facebook_ads.csv"]);

        let first = plan_merge(&registry, &merge_keys, &selection).unwrap();
        let second = plan_merge(&registry, &merge_keys, &selection).unwrap();
        assert_eq!(first, second);
    }
}
