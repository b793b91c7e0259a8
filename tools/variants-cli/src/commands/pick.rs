//! Interactive variant picker.

use anyhow::{bail, Result};
use dialoguer::Select;
use turbo_variants::selector::{
    format_attribute_name, SelectionResolver, SelectorView, VariantIndex,
};

use super::resolve::{print_view, warn_if_ambiguous};
use super::PickArgs;
use crate::context::Context;

/// Run the pick command.
pub fn run(args: PickArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("pick is interactive and cannot produce JSON output");
    }

    let product = ctx.load_product(&args.product)?;
    let index = VariantIndex::from_product(&product);
    let mut resolver = SelectionResolver::new(&index);

    if index.dimensions().is_empty() {
        ctx.output.info("Nothing to pick; the product has no variant dimensions.");
        return Ok(());
    }

    loop {
        print_view(
            &SelectorView::build(&resolver, &product, &ctx.config.selector),
            ctx,
        );

        let dimensions = index.dimensions();
        let mut items: Vec<String> = dimensions
            .iter()
            .map(|d| {
                format!(
                    "{} ({})",
                    format_attribute_name(d.name()),
                    resolver.selection().get(d.name()).unwrap_or("-")
                )
            })
            .collect();
        items.push("Start over".to_string());
        items.push("Done".to_string());

        let choice = Select::new()
            .with_prompt("Choose a dimension")
            .items(&items)
            .default(0)
            .interact()?;

        if choice == dimensions.len() {
            resolver.reset();
            continue;
        }
        let Some(dimension) = dimensions.get(choice) else {
            break;
        };

        let mut values: Vec<String> = dimension
            .values()
            .iter()
            .map(|value| {
                if resolver.availability(dimension.name(), value) {
                    value.clone()
                } else {
                    format!("{} (out of stock)", value)
                }
            })
            .collect();
        values.push("Clear".to_string());

        let picked = Select::new()
            .with_prompt(format_attribute_name(dimension.name()))
            .items(&values)
            .default(0)
            .interact()?;

        match dimension.values().get(picked) {
            Some(value) => {
                resolver.set_attribute(dimension.name(), value)?;
            }
            None => resolver.clear_attribute(dimension.name()),
        }
    }

    match resolver.resolve() {
        Some(variant) => ctx
            .output
            .success(&format!("Selected {} ({})", variant.title(), variant.id)),
        None => ctx.output.warn("No variant selected."),
    }
    warn_if_ambiguous(&resolver, ctx);

    Ok(())
}
