//! Shopper-selected facet values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Facet key → selected values, scoped to one category view.
///
/// Only populated keys constrain results; a key never maps to an empty set.
/// Updates return a new selection so earlier snapshots stay valid for anyone
/// still reading them.
/// Serialized as a plain map. Keys with no values are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, BTreeSet<String>>",
    into = "BTreeMap<String, BTreeSet<String>>"
)]
pub struct FacetSelection(BTreeMap<String, BTreeSet<String>>);

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one value: deselect it when selected, select it otherwise.
    pub fn toggle(&self, facet_key: &str, value: &str) -> Self {
        let mut next = self.0.clone();
        let values = next.entry(facet_key.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            next.remove(facet_key);
        }
        Self(next)
    }

    /// Builder form of `toggle` that only ever selects.
    pub fn with(mut self, facet_key: &str, value: &str) -> Self {
        self.0
            .entry(facet_key.to_string())
            .or_default()
            .insert(value.to_string());
        self
    }

    pub fn is_selected(&self, facet_key: &str, value: &str) -> bool {
        self.0.get(facet_key).is_some_and(|values| values.contains(value))
    }

    pub fn values(&self, facet_key: &str) -> Option<&BTreeSet<String>> {
        self.0.get(facet_key)
    }

    /// Constraining keys and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| (key.as_str(), values))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Total number of selected values across all keys (the filter badge count).
    pub fn active_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }
}

impl FromIterator<(String, BTreeSet<String>)> for FacetSelection {
    fn from_iter<T: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().filter(|(_, values)| !values.is_empty()).collect())
    }
}

impl From<BTreeMap<String, BTreeSet<String>>> for FacetSelection {
    fn from(map: BTreeMap<String, BTreeSet<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl From<FacetSelection> for BTreeMap<String, BTreeSet<String>> {
    fn from(selection: FacetSelection) -> Self {
        selection.0
    }
}

/// Free-function form of [`FacetSelection::toggle`].
pub fn toggle_facet_value(selection: &FacetSelection, facet_key: &str, value: &str) -> FacetSelection {
    selection.toggle(facet_key, value)
}
