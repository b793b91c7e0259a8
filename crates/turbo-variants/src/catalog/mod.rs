//! Product catalog module.
//!
//! Contains the catalog record, validated products and variants, and stock
//! badges.

mod inventory;
mod product;

pub use inventory::{variant_stock_message, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD};
pub use product::{Attributes, PriceRange, Product, ProductRecord, Variant, VariantRecord};
