//! Renderer-facing snapshot of a selector.

use serde::Serialize;

use crate::catalog::{variant_stock_message, Product, Variant};
use crate::config::SelectorConfig;
use crate::ids::VariantId;
use crate::selector::{format_attribute_name, OptionState, SelectionResolver};

/// Everything a template needs to draw the variant picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorView {
    pub dimensions: Vec<DimensionView>,
    /// Present only once the selection is complete and matches a variant.
    pub selected: Option<VariantSummary>,
    pub complete: bool,
    pub missing: Vec<String>,
}

/// One dimension row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionView {
    pub name: String,
    pub display_name: String,
    pub options: Vec<OptionView>,
}

/// One value button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub state: OptionState,
    pub available: bool,
    pub selected: bool,
}

/// Details of the resolved variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantSummary {
    pub id: VariantId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub stock: u32,
    pub stock_message: String,
    /// Formatted price, only when it differs from the product base price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_index: Option<usize>,
}

impl VariantSummary {
    fn new(variant: &Variant, product: &Product, config: &SelectorConfig) -> Self {
        Self {
            id: variant.id.clone(),
            title: variant.title(),
            sku: variant.sku.clone(),
            stock: variant.stock,
            stock_message: variant_stock_message(variant.stock, config.show_stock_counts),
            price: variant
                .price
                .filter(|p| *p != product.base_price)
                .map(|p| p.display()),
            image_index: variant.image_index,
        }
    }
}

impl SelectorView {
    /// Snapshot the resolver's current state.
    pub fn build(
        resolver: &SelectionResolver<'_>,
        product: &Product,
        config: &SelectorConfig,
    ) -> Self {
        let dimensions = resolver
            .index()
            .dimensions()
            .iter()
            .map(|dimension| DimensionView {
                name: dimension.name().to_string(),
                display_name: format_attribute_name(dimension.name()),
                options: dimension
                    .values()
                    .iter()
                    .map(|value| {
                        let state = resolver.option_state(dimension.name(), value);
                        OptionView {
                            value: value.clone(),
                            state,
                            available: state.is_available(),
                            selected: state.is_selected(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            dimensions,
            selected: resolver
                .resolve()
                .map(|variant| VariantSummary::new(variant, product, config)),
            complete: resolver.is_complete(),
            missing: resolver
                .missing_dimensions()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Check if the picker has anything to show.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
