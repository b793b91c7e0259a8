//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_variants::SelectorConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Selector presentation settings.
    #[serde(default)]
    pub selector: SelectorConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_variants::Currency;

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [selector]
            low_stock_threshold = 3
            currency = "GBP"
            "#,
        )
        .unwrap();
        assert_eq!(config.selector.low_stock_threshold, 3);
        assert_eq!(config.selector.currency, Currency::GBP);
        assert!(config.selector.show_stock_counts);
    }

    #[test]
    fn test_lowercase_currency_in_toml() {
        let config: CliConfig = toml::from_str("[selector]\ncurrency = \"eur\"").unwrap();
        assert_eq!(config.selector.currency, Currency::EUR);
    }

    #[test]
    fn test_load_rejects_unknown_currency() {
        let dir = std::env::temp_dir().join(format!("variants-cli-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("variants.json");
        std::fs::write(&path, r#"{"selector": {"currency": "XYZ"}}"#).unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown currency code"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_toml() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.selector, SelectorConfig::default());
    }
}
