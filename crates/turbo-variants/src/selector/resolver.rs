//! Selection resolver.
//!
//! Holds one shopper's in-progress selection for one product and answers
//! the questions a variant picker asks after every click: which values are
//! still choosable, is the selection complete, and which variant it names.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Variant;
use crate::error::{InvalidReason, VariantError};
use crate::selector::{Selection, VariantIndex};

/// Outcome of resolving the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Some dimensions have no value yet.
    Incomplete { missing: Vec<&'a str> },
    /// The selection is complete but no variant carries that combination.
    NoMatch,
    /// Exactly one variant matches.
    Unique(&'a Variant),
    /// Several variants share the combination; the first in catalog order
    /// is used.
    Ambiguous { first: &'a Variant, count: usize },
}

impl<'a> Resolution<'a> {
    /// The variant a cart should receive, if any.
    pub fn variant(&self) -> Option<&'a Variant> {
        match self {
            Resolution::Unique(v) => Some(*v),
            Resolution::Ambiguous { first, .. } => Some(*first),
            Resolution::Incomplete { .. } | Resolution::NoMatch => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::Ambiguous { .. })
    }
}

/// How a picker should render one value of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// Chosen, and some in-stock variant agrees with the rest of the selection.
    Selected,
    /// Chosen, but nothing with this value is in stock.
    SelectedUnavailable,
    /// Not chosen, and choosing it leads to stock.
    Available,
    /// Not chosen, and choosing it leads to nothing in stock.
    Unavailable,
}

impl OptionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionState::Selected => "selected",
            OptionState::SelectedUnavailable => "selected_unavailable",
            OptionState::Available => "available",
            OptionState::Unavailable => "unavailable",
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, OptionState::Selected | OptionState::SelectedUnavailable)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, OptionState::Selected | OptionState::Available)
    }
}

/// Per-session selection state bound to one [`VariantIndex`].
///
/// Not shared between shoppers; every session builds its own.
#[derive(Debug, Clone)]
pub struct SelectionResolver<'a> {
    index: &'a VariantIndex,
    selection: Selection,
}

impl<'a> SelectionResolver<'a> {
    /// Create a resolver with an empty selection.
    pub fn new(index: &'a VariantIndex) -> Self {
        Self {
            index,
            selection: Selection::new(),
        }
    }

    pub fn index(&self) -> &'a VariantIndex {
        self.index
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Choose `value` for `dimension`, replacing any earlier choice.
    ///
    /// Returns the resolved variant once the selection covers every
    /// dimension. Unknown dimensions or values fail with
    /// [`VariantError::InvalidAttribute`] and leave the selection untouched.
    pub fn set_attribute(
        &mut self,
        dimension: &str,
        value: &str,
    ) -> Result<Option<&'a Variant>, VariantError> {
        let known = self.index.dimension(dimension).ok_or_else(|| {
            VariantError::invalid_attribute(dimension, value, InvalidReason::UnknownDimension)
        })?;
        if !known.contains(value) {
            return Err(VariantError::invalid_attribute(
                dimension,
                value,
                InvalidReason::UnknownValue,
            ));
        }

        self.selection.insert(dimension, value);
        debug!(dimension, value, selected = self.selection.len(), "attribute selected");

        Ok(self.resolve())
    }

    /// Apply several choices in order.
    ///
    /// Stops at the first invalid pair; pairs before it stay applied.
    pub fn select_all<I, D, V>(&mut self, pairs: I) -> Result<Option<&'a Variant>, VariantError>
    where
        I: IntoIterator<Item = (D, V)>,
        D: AsRef<str>,
        V: AsRef<str>,
    {
        for (dimension, value) in pairs {
            self.set_attribute(dimension.as_ref(), value.as_ref())?;
        }
        Ok(self.resolve())
    }

    /// Remove the choice for `dimension`, if any.
    pub fn clear_attribute(&mut self, dimension: &str) {
        if let Some(previous) = self.selection.remove(dimension) {
            debug!(dimension, previous = %previous, "attribute cleared");
        }
    }

    /// Drop the whole selection.
    pub fn reset(&mut self) {
        self.selection.clear();
    }

    /// Check if choosing `value` for `dimension` leads to an in-stock variant.
    ///
    /// The current choice for `dimension` itself is ignored; every other
    /// choice is held fixed. Recomputed on every call.
    pub fn availability(&self, dimension: &str, value: &str) -> bool {
        self.index
            .variants()
            .iter()
            .any(|v| v.is_in_stock() && self.selection.matches_with(v, dimension, value))
    }

    /// Render state of one value.
    pub fn option_state(&self, dimension: &str, value: &str) -> OptionState {
        let selected = self.selection.get(dimension) == Some(value);
        match (selected, self.availability(dimension, value)) {
            (true, true) => OptionState::Selected,
            (true, false) => OptionState::SelectedUnavailable,
            (false, true) => OptionState::Available,
            (false, false) => OptionState::Unavailable,
        }
    }

    /// Check if every dimension has a value.
    ///
    /// Vacuously true for a product without dimensions.
    pub fn is_complete(&self) -> bool {
        self.index
            .dimensions()
            .iter()
            .all(|d| self.selection.contains(d.name()))
    }

    /// Dimensions still waiting for a value, in index order.
    pub fn missing_dimensions(&self) -> Vec<&'a str> {
        self.index
            .dimensions()
            .iter()
            .map(|d| d.name())
            .filter(|name| !self.selection.contains(name))
            .collect()
    }

    /// Classify the current selection.
    pub fn resolution(&self) -> Resolution<'a> {
        let missing = self.missing_dimensions();
        if !missing.is_empty() {
            return Resolution::Incomplete { missing };
        }

        let matches = self.index.exact_matches(&self.selection);
        match matches.as_slice() {
            [] => Resolution::NoMatch,
            [only] => Resolution::Unique(*only),
            [first, ..] => Resolution::Ambiguous {
                first: *first,
                count: matches.len(),
            },
        }
    }

    /// The variant named by a complete selection.
    ///
    /// When several variants share the selected combination the first in
    /// catalog order is returned. The duplicate is reported at WARN once, when
    /// the index is built; use [`resolution`](Self::resolution) to detect it.
    pub fn resolve(&self) -> Option<&'a Variant> {
        let resolution = self.resolution();
        if let Resolution::Ambiguous { first, count } = &resolution {
            debug!(
                variant_id = %first.id,
                count,
                "selection matches several variants; using the first"
            );
        }
        resolution.variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: &str, size: &str, color: &str, stock: u32) -> Variant {
        Variant::new(id, stock)
            .with_attribute("size", size)
            .with_attribute("color", color)
    }

    fn tee_index() -> VariantIndex {
        VariantIndex::build(vec![
            variant("1", "S", "Black", 0),
            variant("2", "S", "White", 5),
            variant("3", "M", "Black", 3),
        ])
    }

    #[test]
    fn test_set_unknown_dimension() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        let err = resolver.set_attribute("volume", "1L").unwrap_err();
        assert!(matches!(
            err,
            VariantError::InvalidAttribute {
                reason: InvalidReason::UnknownDimension,
                ..
            }
        ));
        assert!(resolver.selection().is_empty());
    }

    #[test]
    fn test_set_unknown_value_keeps_selection() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        resolver.set_attribute("size", "S").unwrap();

        let err = resolver.set_attribute("size", "XL").unwrap_err();
        assert!(matches!(
            err,
            VariantError::InvalidAttribute {
                reason: InvalidReason::UnknownValue,
                ..
            }
        ));
        assert_eq!(resolver.selection().get("size"), Some("S"));
    }

    #[test]
    fn test_partial_selection_resolves_nothing() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        assert_eq!(resolver.set_attribute("size", "M").unwrap(), None);
        assert_eq!(
            resolver.resolution(),
            Resolution::Incomplete {
                missing: vec!["color"]
            }
        );
    }

    #[test]
    fn test_complete_selection_resolves() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        resolver.set_attribute("size", "M").unwrap();
        let variant = resolver.set_attribute("color", "Black").unwrap().unwrap();
        assert_eq!(variant.id.as_str(), "3");
        assert!(resolver.is_complete());
    }

    #[test]
    fn test_out_of_stock_variant_still_resolves() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        let variant = resolver
            .select_all([("size", "S"), ("color", "Black")])
            .unwrap()
            .unwrap();
        assert_eq!(variant.id.as_str(), "1");
        assert_eq!(resolver.option_state("color", "Black"), OptionState::SelectedUnavailable);
    }

    #[test]
    fn test_complete_without_match() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        resolver.select_all([("size", "M"), ("color", "White")]).unwrap();
        assert!(resolver.is_complete());
        assert_eq!(resolver.resolution(), Resolution::NoMatch);
        assert_eq!(resolver.resolve(), None);
    }

    #[test]
    fn test_availability_ignores_queried_dimension() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        resolver.set_attribute("size", "M").unwrap();

        // size is pinned to the candidate, not to the current "M"
        assert!(resolver.availability("size", "S"));
        assert!(resolver.availability("color", "Black"));
        assert!(!resolver.availability("color", "White"));
    }

    #[test]
    fn test_availability_unknown_inputs() {
        let index = tee_index();
        let resolver = SelectionResolver::new(&index);
        assert!(!resolver.availability("size", "XL"));
        assert!(!resolver.availability("volume", "1L"));
    }

    #[test]
    fn test_option_states() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        resolver.set_attribute("size", "S").unwrap();

        assert_eq!(resolver.option_state("size", "S"), OptionState::Selected);
        assert_eq!(resolver.option_state("size", "M"), OptionState::Available);
        assert_eq!(resolver.option_state("color", "Black"), OptionState::Unavailable);
        assert_eq!(resolver.option_state("color", "White"), OptionState::Available);
    }

    #[test]
    fn test_clear_and_reset() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        resolver.select_all([("size", "S"), ("color", "White")]).unwrap();

        resolver.clear_attribute("color");
        resolver.clear_attribute("color");
        assert_eq!(resolver.missing_dimensions(), vec!["color"]);

        resolver.reset();
        assert!(resolver.selection().is_empty());
        assert_eq!(resolver.missing_dimensions(), vec!["color", "size"]);
    }

    #[test]
    fn test_select_all_stops_at_first_error() {
        let index = tee_index();
        let mut resolver = SelectionResolver::new(&index);
        let result = resolver.select_all([("size", "S"), ("color", "Red"), ("size", "M")]);
        assert!(result.is_err());
        assert_eq!(resolver.selection().get("size"), Some("S"));
        assert!(!resolver.selection().contains("color"));
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let index = VariantIndex::build(vec![
            variant("a", "S", "Black", 0),
            variant("b", "S", "Black", 4),
        ]);
        let mut resolver = SelectionResolver::new(&index);
        resolver.select_all([("size", "S"), ("color", "Black")]).unwrap();

        let resolution = resolver.resolution();
        assert!(resolution.is_ambiguous());
        assert_eq!(resolver.resolve().unwrap().id.as_str(), "a");
        // the second copy still counts for availability
        assert!(resolver.availability("color", "Black"));
    }

    #[test]
    fn test_duplicates_resolve_stably() {
        let index = VariantIndex::build(vec![
            variant("a", "S", "Black", 0),
            variant("b", "S", "Black", 4),
            variant("c", "M", "Black", 1),
        ]);
        let mut resolver = SelectionResolver::new(&index);
        resolver.select_all([("size", "S"), ("color", "Black")]).unwrap();

        // option states and views call resolve() repeatedly
        for _ in 0..3 {
            assert_eq!(resolver.resolve().unwrap().id.as_str(), "a");
        }
        match resolver.resolution() {
            Resolution::Ambiguous { first, count } => {
                assert_eq!(first.id.as_str(), "a");
                assert_eq!(count, 2);
            }
            other => panic!("expected ambiguous resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_no_dimensions() {
        let index = VariantIndex::build(Vec::new());
        let resolver = SelectionResolver::new(&index);
        assert!(resolver.is_complete());
        assert_eq!(resolver.resolve(), None);
    }

    #[test]
    fn test_attribute_free_variant_resolves_when_alone() {
        let index = VariantIndex::build(vec![Variant::new("only", 2)]);
        let resolver = SelectionResolver::new(&index);
        assert!(resolver.is_complete());
        assert_eq!(resolver.resolve().unwrap().id.as_str(), "only");
    }
}
