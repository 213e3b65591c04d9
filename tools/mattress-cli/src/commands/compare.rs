//! Side-by-side comparison command.

use anyhow::{bail, Result};
use mattress_commerce::catalog::{Catalog, CatalogItem};
use mattress_commerce::search::{CompareList, CompareToggle, MAX_COMPARE_ITEMS};
use mattress_commerce::CommerceError;

use super::CompareArgs;
use crate::context::Context;
use crate::output::format_warranty;

const LABEL_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 24;

/// Row label and the cell it shows for each product.
type Row = (&'static str, fn(&CatalogItem<'_>) -> String);

const ROWS: [Row; 6] = [
    ("", |i| i.name().to_string()),
    ("Collection", |i| i.category.display_name().to_string()),
    ("Firmness", |i| i.product.firmness.as_str().to_string()),
    ("Price", |i| i.product.price_range.as_str().to_string()),
    ("Warranty", |i| format_warranty(i.product.warranty)),
    ("Features", |i| i.product.features.len().to_string()),
];

/// Run the compare command.
pub fn run(args: CompareArgs, ctx: &Context) -> Result<()> {
    let mut list = CompareList::new();

    for query in &args.products {
        let item = lookup(&ctx.catalog, query)?;
        if list.contains(item.name()) {
            ctx.output.warn(&format!("{} is already in the comparison", item.name()));
            continue;
        }
        if list.toggle(&item) == CompareToggle::Full {
            ctx.output.warn(&format!(
                "Comparison holds at most {} products; skipping {}",
                MAX_COMPARE_ITEMS,
                item.name()
            ));
        }
    }

    if !list.can_compare() {
        bail!("Pick at least two different products to compare");
    }

    let items = list.items(&ctx.catalog);
    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header("Compare mattresses");
    let mut widths = vec![LABEL_WIDTH];
    widths.extend(std::iter::repeat(COLUMN_WIDTH).take(items.len()));

    for (label, cell) in ROWS {
        let cells: Vec<String> = items.iter().map(cell).collect();
        let mut cols = vec![label];
        cols.extend(cells.iter().map(String::as_str));
        ctx.output.table_row(&cols, &widths);
    }

    Ok(())
}

/// Find a product by exact name or by slug.
fn lookup<'a>(catalog: &'a Catalog, query: &str) -> Result<CatalogItem<'a>> {
    let query = query.trim();
    catalog
        .find(query)
        .or_else(|| catalog.find(&query.to_uppercase()))
        .or_else(|| catalog.find_by_slug(&query.to_lowercase()))
        .ok_or_else(|| CommerceError::ProductNotFound(query.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_or_slug() {
        let catalog = Catalog::builtin();
        assert_eq!(lookup(&catalog, "SKY ORTHO").unwrap().name(), "SKY ORTHO");
        assert_eq!(lookup(&catalog, "sky ortho").unwrap().name(), "SKY ORTHO");
        assert_eq!(lookup(&catalog, "sky-latex-bliss").unwrap().name(), "SKY LATEX BLISS");
        assert!(lookup(&catalog, "sky-hammock").is_err());
    }

    #[test]
    fn test_rows_describe_each_product() {
        let catalog = Catalog::builtin();
        let item = lookup(&catalog, "SKY ORTHO").unwrap();
        let cells: Vec<(&str, String)> = ROWS
            .iter()
            .map(|(label, cell)| (*label, cell(&item)))
            .collect();

        assert_eq!(cells[0], ("", "SKY ORTHO".to_string()));
        assert_eq!(cells[1].0, "Collection");
        assert_eq!(cells[2], ("Firmness", item.product.firmness.as_str().to_string()));
        assert_eq!(cells[4], ("Warranty", format_warranty(item.product.warranty)));
        assert_eq!(cells[5], ("Features", item.product.features.len().to_string()));
    }
}
