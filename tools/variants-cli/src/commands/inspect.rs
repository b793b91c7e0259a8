//! Product inspection command.

use anyhow::Result;
use serde::Serialize;
use turbo_variants::catalog::{PriceRange, StockStatus};
use turbo_variants::ids::VariantId;
use turbo_variants::selector::{format_attribute_name, AttributeDimension, VariantIndex};

use super::InspectArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct InspectReport<'a> {
    name: Option<&'a str>,
    variants: usize,
    price_range: PriceRange,
    total_stock: u64,
    stock_status: StockStatus,
    dimensions: &'a [AttributeDimension],
    duplicates: Vec<Vec<&'a VariantId>>,
}

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let product = ctx.load_product(&args.product)?;
    let index = VariantIndex::from_product(&product);
    let status = product.stock_status(ctx.config.selector.low_stock_threshold);
    let duplicates: Vec<Vec<&VariantId>> = index
        .duplicate_groups()
        .into_iter()
        .map(|group| group.into_iter().map(|v| &v.id).collect())
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&InspectReport {
            name: product.name.as_deref(),
            variants: index.len(),
            price_range: product.price_range(),
            total_stock: product.total_stock(),
            stock_status: status,
            dimensions: index.dimensions(),
            duplicates,
        });
        return Ok(());
    }

    ctx.output.header(product.name.as_deref().unwrap_or("Product"));
    if let Some(id) = &product.id {
        ctx.output.kv("ID", id.as_str());
    }
    ctx.output.kv("Variants", &index.len().to_string());
    ctx.output.kv("Price", &product.price_range().display());
    ctx.output.kv(
        "Stock",
        &format!("{} ({} units)", stock_badge(status), product.total_stock()),
    );

    if index.dimensions().is_empty() {
        ctx.output
            .info("No variant dimensions; the product sells as a single item.");
    } else {
        ctx.output.header("Dimensions");
        for dimension in index.dimensions() {
            ctx.output.list_item(&format!(
                "{} ({}): {}",
                format_attribute_name(dimension.name()),
                dimension.name(),
                dimension.values().join(", ")
            ));
        }
    }

    for group in &duplicates {
        let ids: Vec<&str> = group.iter().map(|id| id.as_str()).collect();
        ctx.output.warn(&format!(
            "Variants {} share one attribute combination; {} will be used",
            ids.join(", "),
            ids[0]
        ));
    }

    Ok(())
}
