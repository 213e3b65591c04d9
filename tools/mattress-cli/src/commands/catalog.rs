//! Catalog summary and consistency check.

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use mattress_commerce::catalog::{Catalog, Category};
use mattress_commerce::finder::{recommend, QuizAnswers};
use serde::Serialize;

use super::CatalogArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryCount {
    category: Category,
    title: &'static str,
    products: usize,
    flagships: usize,
}

#[derive(Serialize)]
struct CatalogSummary {
    total: usize,
    categories: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing_models: Option<Vec<String>>,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;
    let categories: Vec<CategoryCount> = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            title: category.collection_title(),
            products: catalog.count(category),
            flagships: catalog
                .products_in(category)
                .iter()
                .filter(|p| p.is_flagship())
                .count(),
        })
        .collect();

    let missing = args.check.then(|| missing_models(catalog));

    if ctx.output.is_json() {
        ctx.output.json(&CatalogSummary {
            total: catalog.len(),
            categories,
            missing_models: missing.clone(),
        });
    } else {
        ctx.output.header("Catalog");
        for count in &categories {
            ctx.output.kv(
                count.title,
                &format!("{} products ({} flagship)", count.products, count.flagships),
            );
        }
        ctx.output.kv("Total", &catalog.len().to_string());
    }

    match missing {
        Some(missing) if !missing.is_empty() => {
            bail!("Quiz suggests models missing from the catalog: {}", missing.join(", "))
        }
        Some(_) => ctx.output.success("Every quiz suggestion is in the catalog"),
        None => {}
    }

    Ok(())
}

/// Suggested model names, over every answer combination, that the catalog lacks.
fn missing_models(catalog: &Catalog) -> Vec<String> {
    let missing: BTreeSet<String> = QuizAnswers::all_combinations()
        .flat_map(|answers| recommend(&answers).models)
        .filter(|name| catalog.find(name).is_none())
        .collect();
    missing.into_iter().collect()
}
