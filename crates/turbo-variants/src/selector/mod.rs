//! Variant selection engine.
//!
//! [`VariantIndex`] derives the dimensions of a product from its variants.
//! [`SelectionResolver`] tracks one shopper's choices against that index.
//! [`SelectorView`] packages the result for a renderer.

mod display;
mod index;
mod resolver;
mod selection;
mod view;

pub use display::format_attribute_name;
pub use index::{AttributeDimension, VariantIndex};
pub use resolver::{OptionState, Resolution, SelectionResolver};
pub use selection::Selection;
pub use view::{DimensionView, OptionView, SelectorView, VariantSummary};
