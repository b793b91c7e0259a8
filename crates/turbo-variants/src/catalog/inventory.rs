//! Stock status badges for products and variants.

use serde::{Deserialize, Serialize};

/// Threshold below which a product's total stock is reported as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Stock badge shown next to a product or variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Classify a stock count against a low-stock threshold.
    ///
    /// Zero is out of stock; anything strictly below `low_stock_threshold`
    /// is low.
    pub fn classify(stock: u64, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < u64::from(low_stock_threshold) {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Badge text for listings.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Stock line for a single resolved variant.
///
/// `"In Stock (3 available)"` when counts are shown, `"In Stock"` when not,
/// `"Out of Stock"` at zero.
pub fn variant_stock_message(stock: u32, show_count: bool) -> String {
    match (stock, show_count) {
        (0, _) => StockStatus::OutOfStock.label().to_string(),
        (n, true) => format!("{} ({} available)", StockStatus::InStock.label(), n),
        (_, false) => StockStatus::InStock.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(StockStatus::classify(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(9, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(10, 10), StockStatus::InStock);
    }

    #[test]
    fn test_zero_threshold_never_low() {
        assert_eq!(StockStatus::classify(1, 0), StockStatus::InStock);
    }

    #[test]
    fn test_variant_stock_message() {
        assert_eq!(variant_stock_message(3, true), "In Stock (3 available)");
        assert_eq!(variant_stock_message(3, false), "In Stock");
        assert_eq!(variant_stock_message(0, true), "Out of Stock");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, r#""out_of_stock""#);
    }
}
