//! Selector presentation settings.

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::money::Currency;

/// Settings that shape what the selector reports to a renderer.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Product stock totals below this are reported as low.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Include unit counts in variant stock messages.
    #[serde(default = "default_show_stock_counts")]
    pub show_stock_counts: bool,

    /// Currency for catalog records that do not name one.
    #[serde(default)]
    pub currency: Currency,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_show_stock_counts() -> bool {
    true
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            show_stock_counts: default_show_stock_counts(),
            currency: Currency::default(),
        }
    }
}

impl SelectorConfig {
    /// Hide unit counts in stock messages.
    pub fn hide_stock_counts(mut self) -> Self {
        self.show_stock_counts = false;
        self
    }
}
