//! Shopper selections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Variant;

/// In-progress choice of at most one value per dimension.
///
/// A selection is also the query type for variant filtering: dimensions it
/// does not mention are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value chosen for a dimension.
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    /// Check if a dimension has a value.
    pub fn contains(&self, dimension: &str) -> bool {
        self.0.contains_key(dimension)
    }

    /// Set a dimension, returning the value it replaced.
    pub fn insert(
        &mut self,
        dimension: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(dimension.into(), value.into())
    }

    /// Remove a dimension, returning its value.
    pub fn remove(&mut self, dimension: &str) -> Option<String> {
        self.0.remove(dimension)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in dimension-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Check if a variant agrees with every entry.
    pub fn matches(&self, variant: &Variant) -> bool {
        self.iter()
            .all(|(dimension, value)| variant.attribute(dimension) == Some(value))
    }

    /// Check a variant against this selection with `dimension` pinned to
    /// `value`, whatever the selection currently holds for it.
    pub fn matches_with(&self, variant: &Variant, dimension: &str, value: &str) -> bool {
        variant.attribute(dimension) == Some(value)
            && self
                .iter()
                .filter(|(d, _)| *d != dimension)
                .all(|(d, v)| variant.attribute(d) == Some(v))
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
