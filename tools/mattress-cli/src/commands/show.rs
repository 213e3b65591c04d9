//! Product detail command.

use anyhow::Result;
use mattress_commerce::catalog::CatalogItem;
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{format_warranty, price_badge, product_line};

#[derive(Serialize)]
struct ProductDetail<'a> {
    product: CatalogItem<'a>,
    slug: String,
    alt_text: String,
    related: Vec<CatalogItem<'a>>,
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let item = ctx.catalog.get_by_slug(args.slug.trim())?;
    let related = ctx.catalog.related_products(&item);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail {
            product: item,
            slug: item.slug(),
            alt_text: item.alt_text(),
            related,
        });
        return Ok(());
    }

    let product = item.product;
    ctx.output.header(item.name());
    ctx.output.line(&product.positioning);
    ctx.output.line("");
    ctx.output.kv("Collection", item.category.collection_title());
    ctx.output.kv("Firmness", product.firmness.as_str());
    ctx.output.kv("Price range", &price_badge(product.price_range));
    ctx.output.kv("Warranty", &format_warranty(product.warranty));
    ctx.output.debug(&item.alt_text());

    if let Some(ref description) = product.description {
        ctx.output.line("");
        ctx.output.line(description);
    }

    if !product.features.is_empty() {
        ctx.output.header("Features");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    if !related.is_empty() {
        ctx.output.header(&format!(
            "More {}",
            item.category.collection_title().to_lowercase()
        ));
        for other in &related {
            ctx.output
                .list_item(&format!("{} [{}]", product_line(other), other.slug()));
        }
    }

    Ok(())
}
