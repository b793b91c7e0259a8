//! Product and variant types.
//!
//! [`ProductRecord`] is the document handed over by the catalog service.
//! [`Product`] is the validated form the selector works with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::inventory::StockStatus;
use crate::error::VariantError;
use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};

/// Attribute vector of a variant: dimension name to value.
pub type Attributes = BTreeMap<String, String>;

/// Product document as delivered by the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    /// ISO currency code; the caller's default applies when absent.
    #[serde(default)]
    pub currency: Option<String>,
    pub base_price: f64,
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

/// Variant entry inside a [`ProductRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantRecord {
    pub id: VariantId,
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(default)]
    pub stock: i64,
    /// Price override; absent or zero inherits the base price.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Index into the product's image list.
    #[serde(default)]
    pub image_index: Option<usize>,
}

/// A product with its purchasable variants.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    /// Price used by variants without an override.
    pub base_price: Money,
    /// Variants in catalog order.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product with no variants.
    pub fn new(base_price: Money) -> Self {
        Self {
            id: None,
            name: None,
            base_price,
            variants: Vec::new(),
        }
    }

    /// Parse and validate a catalog JSON document.
    pub fn from_json(json: &str, default_currency: Currency) -> Result<Self, VariantError> {
        let record: ProductRecord = serde_json::from_str(json)?;
        Self::from_record(record, default_currency)
    }

    /// Validate a catalog record and convert its prices to [`Money`].
    pub fn from_record(
        record: ProductRecord,
        default_currency: Currency,
    ) -> Result<Self, VariantError> {
        let currency = match record.currency.as_deref() {
            Some(code) => Currency::from_code(code).ok_or_else(|| {
                VariantError::Validation(format!("unknown currency code: {}", code))
            })?,
            None => default_currency,
        };

        if !record.base_price.is_finite() || record.base_price < 0.0 {
            return Err(VariantError::Validation(format!(
                "base_price must be a non-negative number, got {}",
                record.base_price
            )));
        }
        let base_price = Money::from_decimal(record.base_price, currency);

        let variants = record
            .variants
            .into_iter()
            .map(|v| Variant::from_record(v, currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: record.id,
            name: record.name,
            base_price,
            variants,
        })
    }

    /// Add a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Check if this product has any variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Lowest and highest effective price across variants.
    ///
    /// A product without variants is priced at its base price.
    pub fn price_range(&self) -> PriceRange {
        let mut prices = self.variants.iter().map(|v| v.effective_price(self.base_price));
        match prices.next() {
            Some(first) => {
                let start = PriceRange {
                    min: first,
                    max: first,
                };
                prices.fold(start, |range, p| PriceRange {
                    min: range.min.min(p),
                    max: range.max.max(p),
                })
            }
            None => PriceRange {
                min: self.base_price,
                max: self.base_price,
            },
        }
    }

    /// Total units in stock across all variants.
    pub fn total_stock(&self) -> u64 {
        self.variants.iter().map(|v| u64::from(v.stock)).sum()
    }

    /// Product-level stock badge.
    ///
    /// Products without variants are not inventory tracked and always
    /// report in stock.
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        if !self.has_variants() {
            return StockStatus::InStock;
        }
        StockStatus::classify(self.total_stock(), low_stock_threshold)
    }
}

/// A concrete, purchasable combination of attribute values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Variant {
    pub id: VariantId,
    pub sku: Option<String>,
    pub attributes: Attributes,
    /// Units available. Zero keeps the variant listed but unavailable.
    pub stock: u32,
    /// Price override; `None` inherits the product base price.
    pub price: Option<Money>,
    pub image_index: Option<usize>,
}

impl Variant {
    /// Create a variant with no price override.
    pub fn new(id: impl Into<VariantId>, stock: u32) -> Self {
        Self {
            id: id.into(),
            sku: None,
            attributes: Attributes::new(),
            stock,
            price: None,
            image_index: None,
        }
    }

    fn from_record(record: VariantRecord, currency: Currency) -> Result<Self, VariantError> {
        let stock = u32::try_from(record.stock).map_err(|_| {
            VariantError::Validation(format!(
                "variant {} has invalid stock {}",
                record.id, record.stock
            ))
        })?;

        let price = match record.price {
            Some(p) if !p.is_finite() => {
                return Err(VariantError::Validation(format!(
                    "variant {} has invalid price {}",
                    record.id, p
                )))
            }
            Some(p) if p > 0.0 => Some(Money::from_decimal(p, currency)),
            _ => None,
        };

        Ok(Self {
            id: record.id,
            sku: record.sku.filter(|s| !s.is_empty()),
            attributes: record.attributes.unwrap_or_default(),
            stock,
            price,
            image_index: record.image_index,
        })
    }

    /// Set an attribute value.
    pub fn with_attribute(
        mut self,
        dimension: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.insert(dimension.into(), value.into());
        self
    }

    /// Set the price override.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Value of one dimension, if this variant carries it.
    pub fn attribute(&self, dimension: &str) -> Option<&str> {
        self.attributes.get(dimension).map(String::as_str)
    }

    /// Price the customer pays for this variant.
    pub fn effective_price(&self, base_price: Money) -> Money {
        self.price.unwrap_or(base_price)
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Build the variant title from its attribute values (e.g., "Black / M").
    pub fn title(&self) -> String {
        if self.attributes.is_empty() {
            "Default".to_string()
        } else {
            self.attributes
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }
}

/// Span of effective prices for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Format as `"$10.00"` or `"$10.00 - $25.00"`.
    pub fn display(&self) -> String {
        if self.min == self.max {
            self.min.display()
        } else {
            format!("{} - {}", self.min.display(), self.max.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEE: &str = r#"{
        "id": "tee",
        "name": "Basic Tee",
        "base_price": 20.0,
        "variants": [
            {"id": 1, "attributes": {"size": "S", "color": "Black"}, "stock": 0,
             "sku": "TEE-S-BLK"},
            {"id": 2, "attributes": {"size": "S", "color": "White"}, "stock": 5, "price": 0},
            {"id": 3, "attributes": {"size": "M", "color": "Black"}, "stock": 3, "price": 24.5}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let product = Product::from_json(TEE, Currency::USD).unwrap();
        assert_eq!(product.variants.len(), 3);
        assert_eq!(product.base_price.amount_cents, 2000);
        assert_eq!(product.variants[0].id.as_str(), "1");
        assert_eq!(product.variants[0].sku.as_deref(), Some("TEE-S-BLK"));
        assert_eq!(product.variants[0].attribute("color"), Some("Black"));
    }

    #[test]
    fn test_zero_price_inherits_base() {
        let product = Product::from_json(TEE, Currency::USD).unwrap();
        let white = &product.variants[1];
        assert_eq!(white.price, None);
        assert_eq!(white.effective_price(product.base_price).amount_cents, 2000);
    }

    #[test]
    fn test_price_range() {
        let product = Product::from_json(TEE, Currency::USD).unwrap();
        let range = product.price_range();
        assert_eq!(range.min.amount_cents, 2000);
        assert_eq!(range.max.amount_cents, 2450);
        assert_eq!(range.display(), "$20.00 - $24.50");
    }

    #[test]
    fn test_price_range_without_variants() {
        let product = Product::new(Money::new(999, Currency::USD));
        assert_eq!(product.price_range().display(), "$9.99");
    }

    #[test]
    fn test_stock_status() {
        let product = Product::from_json(TEE, Currency::USD).unwrap();
        assert_eq!(product.total_stock(), 8);
        assert_eq!(product.stock_status(10), StockStatus::LowStock);
        assert_eq!(product.stock_status(5), StockStatus::InStock);

        let bare = Product::new(Money::new(100, Currency::USD));
        assert_eq!(bare.stock_status(10), StockStatus::InStock);
    }

    #[test]
    fn test_missing_attributes_kept() {
        let json = r#"{"base_price": 5, "variants": [{"id": "a", "stock": 2}]}"#;
        let product = Product::from_json(json, Currency::USD).unwrap();
        assert_eq!(product.variants.len(), 1);
        assert!(product.variants[0].attributes.is_empty());
        assert_eq!(product.variants[0].title(), "Default");
    }

    #[test]
    fn test_negative_stock_rejected() {
        let json = r#"{"base_price": 5, "variants": [{"id": "a", "stock": -1}]}"#;
        let err = Product::from_json(json, Currency::USD).unwrap_err();
        assert!(matches!(err, VariantError::Validation(_)));
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let json = r#"{"base_price": 5, "currency": "XYZ"}"#;
        let err = Product::from_json(json, Currency::USD).unwrap_err();
        assert!(matches!(err, VariantError::Validation(_)));
    }

    #[test]
    fn test_record_currency_wins() {
        let json = r#"{"base_price": 5, "currency": "eur"}"#;
        let product = Product::from_json(json, Currency::USD).unwrap();
        assert_eq!(product.base_price.currency, Currency::EUR);
    }

    #[test]
    fn test_malformed_json() {
        let err = Product::from_json("{", Currency::USD).unwrap_err();
        assert!(matches!(err, VariantError::Serialization(_)));
    }

    #[test]
    fn test_variant_title() {
        let variant = Variant::new("v", 1)
            .with_attribute("size", "M")
            .with_attribute("color", "Black");
        assert_eq!(variant.title(), "Black / M");
    }
}
