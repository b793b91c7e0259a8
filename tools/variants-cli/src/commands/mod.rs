//! CLI command implementations.

pub mod inspect;
pub mod pick;
pub mod resolve;

use clap::Args;

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Product JSON file.
    pub product: String,
}

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Product JSON file.
    pub product: String,

    /// Selection to apply, in order (repeatable).
    #[arg(short, long = "select", value_name = "DIMENSION=VALUE", value_parser = parse_pair)]
    pub select: Vec<(String, String)>,
}

/// Arguments for the pick command.
#[derive(Args)]
pub struct PickArgs {
    /// Product JSON file.
    pub product: String,
}

/// Parse a `dimension=value` pair.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((dimension, value)) if !dimension.is_empty() => {
            Ok((dimension.to_string(), value.to_string()))
        }
        _ => Err(format!("expected DIMENSION=VALUE, got '{}'", raw)),
    }
}
