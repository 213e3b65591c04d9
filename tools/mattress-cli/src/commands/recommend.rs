//! Recommend command.

use anyhow::{Context as _, Result};
use mattress_commerce::catalog::CatalogItem;
use mattress_commerce::finder::{recommend, QuizAnswers, Recommendation};
use serde::Serialize;

use super::RecommendArgs;
use crate::context::Context;
use crate::output::{format_warranty, price_badge};

/// Run the recommend command.
pub fn run(args: RecommendArgs, ctx: &Context) -> Result<()> {
    let answers = QuizAnswers::parse(&args.sleep, &args.priority, &args.firmness, &args.budget)?;
    let rec = recommend(&answers);
    print_recommendation(&rec, ctx)
}

#[derive(Serialize)]
struct RecommendationView<'a> {
    #[serde(flatten)]
    recommendation: &'a Recommendation,
    products: Vec<CatalogItem<'a>>,
}

/// Print a recommendation with its models looked up in the catalog.
pub fn print_recommendation(rec: &Recommendation, ctx: &Context) -> Result<()> {
    let products = ctx
        .catalog
        .resolve_models(rec.models.as_slice())
        .context("Recommended model missing from catalog")?;

    if ctx.output.is_json() {
        ctx.output.json(&RecommendationView {
            recommendation: rec,
            products,
        });
        return Ok(());
    }

    ctx.output.header(&format!("{} {}", rec.emoji, rec.title));
    ctx.output.line(&rec.description);
    ctx.output.line("");
    ctx.output.kv("Collection", &rec.category);

    ctx.output.header("Suggested models");
    for item in &products {
        ctx.output.list_item(&format!(
            "{} ({}, {}, {})",
            item.name(),
            item.product.firmness.as_str(),
            price_badge(item.product.price_range),
            format_warranty(item.product.warranty)
        ));
    }

    ctx.output.line("");
    ctx.output.info(&format!(
        "Browse the range: mattress browse {}",
        rec.collection.as_str()
    ));
    Ok(())
}
