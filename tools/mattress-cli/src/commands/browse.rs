//! Browse command: the collections view.

use anyhow::Result;
use console::style;
use mattress_commerce::catalog::{Firmness, PriceRange};
use mattress_commerce::search::{browse, CategorySelection, FilterState, WarrantyBucket};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_warranty, price_badge};

const WIDTHS: [usize; 5] = [18, 8, 10, 12, 40];

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let state = filter_state(&args)?;
    let results = browse(&ctx.catalog, &state);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    let heading = match state.category() {
        CategorySelection::Only(category) => category.collection_title(),
        _ => "All Mattresses",
    };
    ctx.output.header(heading);
    ctx.output.info(&results.summary());

    if results.is_empty() {
        if results.has_active_filters {
            ctx.output.warn("No mattresses match these filters.");
        }
    } else {
        ctx.output.line("");
        ctx.output
            .table_row(&["NAME", "FIRMNESS", "PRICE", "WARRANTY", "POSITIONING"], &WIDTHS);

        let limit = ctx.max_results(args.limit).unwrap_or(results.len());
        for item in results.items.iter().take(limit) {
            let product = item.product;
            ctx.output.table_row(
                &[
                    item.name(),
                    product.firmness.as_str(),
                    // Pad before styling so escape codes don't skew the column.
                    &price_badge_padded(product.price_range, WIDTHS[2]),
                    &format_warranty(product.warranty),
                    &product.positioning,
                ],
                &WIDTHS,
            );
        }
        if results.len() > limit {
            let more = format!("... and {} more", results.len() - limit);
            ctx.output.line(&style(more).dim().to_string());
        }
    }

    if args.facets {
        for group in &results.facets {
            ctx.output.header(&group.name);
            for option in &group.options {
                let mark = if option.selected { "[x]" } else { "[ ]" };
                ctx.output
                    .line(&format!("{} {} ({})", mark, option.label, option.count));
            }
        }
    }

    Ok(())
}

/// Build the filter state from command-line flags.
fn filter_state(args: &BrowseArgs) -> Result<FilterState> {
    let mut state = FilterState::for_selection(CategorySelection::parse(&args.category)?);

    if let Some(ref search) = args.search {
        state.set_search(search.as_str());
    }
    if let Some(ref warranty) = args.warranty {
        state.set_warranty(WarrantyBucket::parse_selector(warranty)?);
    }
    for value in &args.firmness {
        let firmness = Firmness::parse(value)?;
        if !state.firmness().contains(&firmness) {
            state.toggle_firmness(firmness);
        }
    }
    for value in &args.price {
        let price = PriceRange::parse(value)?;
        if !state.price().contains(&price) {
            state.toggle_price(price);
        }
    }

    Ok(state)
}

fn price_badge_padded(price: PriceRange, width: usize) -> String {
    let pad = width.saturating_sub(price.as_str().chars().count());
    format!("{}{}", price_badge(price), " ".repeat(pad))
}
