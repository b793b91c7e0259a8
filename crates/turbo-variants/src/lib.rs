//! Product variant selection for TurboCommerce.
//!
//! Given a product whose variants are combinations of attribute values
//! (size, color, volume, ...), this crate:
//!
//! - **Indexes** the dimensions and the values seen for each
//! - **Resolves** a shopper's selection to the variant it names
//! - **Reports availability** of every remaining value against live stock
//! - **Decides completeness**, i.e. when the selection can go to a cart
//!
//! Everything is synchronous and in memory. Build one [`VariantIndex`] per
//! product load and one [`SelectionResolver`] per shopper session.
//!
//! # Example
//!
//! ```rust
//! use turbo_variants::prelude::*;
//!
//! let json = r#"{
//!     "base_price": 20.0,
//!     "variants": [
//!         {"id": 1, "attributes": {"size": "S", "color": "Black"}, "stock": 0},
//!         {"id": 2, "attributes": {"size": "S", "color": "White"}, "stock": 5},
//!         {"id": 3, "attributes": {"size": "M", "color": "Black"}, "stock": 3}
//!     ]
//! }"#;
//! let product = Product::from_json(json, Currency::USD)?;
//! let index = VariantIndex::from_product(&product);
//! let mut resolver = SelectionResolver::new(&index);
//!
//! resolver.set_attribute("size", "S")?;
//! assert!(!resolver.availability("color", "Black"));
//! assert!(resolver.availability("color", "White"));
//!
//! let variant = resolver.set_attribute("color", "White")?;
//! assert_eq!(variant.map(|v| v.id.as_str()), Some("2"));
//! # Ok::<(), VariantError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod selector;

pub use config::SelectorConfig;
pub use error::{InvalidReason, VariantError};
pub use ids::*;
pub use money::{Currency, Money};
pub use selector::{SelectionResolver, VariantIndex};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SelectorConfig;
    pub use crate::error::{InvalidReason, VariantError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{PriceRange, Product, StockStatus, Variant};

    // Selector
    pub use crate::selector::{
        AttributeDimension, OptionState, Resolution, Selection, SelectionResolver, SelectorView,
        VariantIndex,
    };
}
