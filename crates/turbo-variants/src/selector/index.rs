//! Dimension/value index over a product's variants.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Attributes, Product, Variant};
use crate::selector::Selection;

/// A named axis of variation and every value seen for it.
///
/// Values are unique and sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDimension {
    name: String,
    values: Vec<String>,
}

impl AttributeDimension {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Check if any variant carries this value.
    pub fn contains(&self, value: &str) -> bool {
        self.values
            .binary_search_by(|v| v.as_str().cmp(value))
            .is_ok()
    }
}

/// Variants of one product plus the dimensions derived from them.
///
/// Built once per product load and never mutated; a changed variant list
/// means a new index.
#[derive(Debug, Clone)]
pub struct VariantIndex {
    variants: Vec<Variant>,
    /// Sorted by name.
    dimensions: Vec<AttributeDimension>,
    /// Full attribute vector to variant positions, in catalog order.
    by_vector: HashMap<Attributes, Vec<usize>>,
}

impl VariantIndex {
    /// Derive dimensions and value sets from a variant list.
    ///
    /// Variants without attributes contribute no dimension data but stay
    /// listed.
    pub fn build(variants: Vec<Variant>) -> Self {
        let mut values: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for variant in &variants {
            for (dimension, value) in &variant.attributes {
                values.entry(dimension.as_str()).or_default().insert(value.as_str());
            }
        }

        let dimensions: Vec<AttributeDimension> = values
            .into_iter()
            .map(|(name, values)| AttributeDimension {
                name: name.to_string(),
                values: values.into_iter().map(str::to_string).collect(),
            })
            .collect();

        let mut by_vector: HashMap<Attributes, Vec<usize>> = HashMap::new();
        for (position, variant) in variants.iter().enumerate() {
            by_vector
                .entry(variant.attributes.clone())
                .or_default()
                .push(position);
        }

        let index = Self {
            variants,
            dimensions,
            by_vector,
        };

        for group in index.duplicate_groups() {
            let ids: Vec<&str> = group.iter().map(|v| v.id.as_str()).collect();
            warn!(
                variant_ids = ?ids,
                title = %group[0].title(),
                "duplicate attribute vector; first variant wins on resolve"
            );
        }

        debug!(
            variants = index.variants.len(),
            dimensions = index.dimensions.len(),
            "built variant index"
        );

        index
    }

    /// Build from a product's variant list.
    pub fn from_product(product: &Product) -> Self {
        Self::build(product.variants.clone())
    }

    /// Dimensions in name order.
    pub fn dimensions(&self) -> &[AttributeDimension] {
        &self.dimensions
    }

    /// Look up a dimension by name.
    pub fn dimension(&self, name: &str) -> Option<&AttributeDimension> {
        self.dimensions
            .binary_search_by(|d| d.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.dimensions[i])
    }

    /// Check if `value` is known for `dimension`.
    pub fn contains(&self, dimension: &str, value: &str) -> bool {
        self.dimension(dimension)
            .map(|d| d.contains(value))
            .unwrap_or(false)
    }

    /// Variants in catalog order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Every variant agreeing with all entries of `selection`, in catalog order.
    pub fn variants_matching(&self, selection: &Selection) -> Vec<&Variant> {
        self.variants
            .iter()
            .filter(|v| selection.matches(v))
            .collect()
    }

    /// Variants whose attribute vector equals `selection` exactly.
    ///
    /// For a selection covering every dimension this is the same set as
    /// [`variants_matching`](Self::variants_matching), found by a hash lookup.
    pub(crate) fn exact_matches(&self, selection: &Selection) -> Vec<&Variant> {
        self.by_vector
            .get(selection.as_map())
            .map(|positions| positions.iter().map(|&i| &self.variants[i]).collect())
            .unwrap_or_default()
    }

    /// Groups of variants sharing one attribute vector, ordered by first
    /// occurrence.
    ///
    /// Catalogs should not contain these; the resolver picks the first.
    pub fn duplicate_groups(&self) -> Vec<Vec<&Variant>> {
        let mut groups: Vec<&Vec<usize>> = self
            .by_vector
            .values()
            .filter(|positions| positions.len() > 1)
            .collect();
        groups.sort_by_key(|positions| positions[0]);
        groups
            .into_iter()
            .map(|positions| positions.iter().map(|&i| &self.variants[i]).collect())
            .collect()
    }
}
