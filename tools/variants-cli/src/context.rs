//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_variants::catalog::Product;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(Path::new(path))?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest file wins. A file that exists but does not parse is an
    /// error rather than a silent fall back to defaults.
    fn find_config(start: &Path) -> Result<Option<CliConfig>> {
        let config_names = ["variants.toml", ".variants.toml", "variants.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return CliConfig::load(&config_path).map(Some);
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Read and validate a product JSON file.
    pub fn load_product(&self, path: &str) -> Result<Product> {
        let full = self.resolve_path(path);
        let content = std::fs::read_to_string(&full)
            .with_context(|| format!("Failed to read product file: {}", full.display()))?;
        let product = Product::from_json(&content, self.config.selector.currency)
            .with_context(|| format!("Invalid product file: {}", full.display()))?;
        self.output.debug(&format!(
            "Loaded {} variant(s) from {}",
            product.variants.len(),
            full.display()
        ));
        Ok(product)
    }
}
