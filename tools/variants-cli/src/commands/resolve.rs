//! Selection resolution command.

use anyhow::{Context as _, Result};
use turbo_variants::selector::{
    OptionState, Resolution, SelectionResolver, SelectorView, VariantIndex,
};

use super::ResolveArgs;
use crate::context::Context;
use crate::output::option_badge;

/// Run the resolve command.
pub fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let product = ctx.load_product(&args.product)?;
    let index = VariantIndex::from_product(&product);
    let mut resolver = SelectionResolver::new(&index);

    for (dimension, value) in &args.select {
        resolver
            .set_attribute(dimension, value)
            .with_context(|| format!("Cannot select {}={}", dimension, value))?;
        ctx.output.debug(&format!("Selected {}={}", dimension, value));
    }

    let view = SelectorView::build(&resolver, &product, &ctx.config.selector);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    print_view(&view, ctx);
    warn_if_ambiguous(&resolver, ctx);
    Ok(())
}

/// Flag a catalog that lists the selected combination more than once.
pub(crate) fn warn_if_ambiguous(resolver: &SelectionResolver<'_>, ctx: &Context) {
    if let Resolution::Ambiguous { first, count } = resolver.resolution() {
        ctx.output.warn(&format!(
            "{} variants share this combination; using {}.",
            count, first.id
        ));
    }
}

/// Print the picker state in human-readable form.
pub(crate) fn print_view(view: &SelectorView, ctx: &Context) {
    if view.is_empty() {
        ctx.output.info("This product has no variant dimensions.");
    } else {
        ctx.output.header("Options");
        for dimension in &view.dimensions {
            let options: Vec<String> = dimension
                .options
                .iter()
                .map(|o| option_badge(&o.value, o.state))
                .collect();
            ctx.output.kv(&dimension.display_name, &options.join("  "));
        }
    }

    match &view.selected {
        Some(variant) => {
            ctx.output
                .success(&format!("Resolved {} ({})", variant.title, variant.id));
            if let Some(sku) = &variant.sku {
                ctx.output.kv("SKU", sku);
            }
            ctx.output.kv("Stock", &variant.stock_message);
            if let Some(price) = &variant.price {
                ctx.output.kv("Price", price);
            }
        }
        None if view.complete => {
            ctx.output.warn("No variant matches this combination.");
        }
        None => {
            let missing: Vec<&str> = view
                .dimensions
                .iter()
                .filter(|d| view.missing.contains(&d.name))
                .map(|d| d.display_name.as_str())
                .collect();
            ctx.output.info(&format!("Still to choose: {}", missing.join(", ")));
        }
    }

    let blocked = view
        .dimensions
        .iter()
        .flat_map(|d| &d.options)
        .any(|o| o.state == OptionState::SelectedUnavailable);
    if blocked {
        ctx.output
            .warn("A selected value is out of stock with the rest of the selection.");
    }
}
