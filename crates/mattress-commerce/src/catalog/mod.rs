//! Product catalog module.
//!
//! Contains products, categories, the built-in collection and the catalog
//! store both engines read from.

mod category;
mod product;
mod seed;
mod store;

pub use category::{CatalogItem, Category};
pub use product::{product_to_slug, Firmness, PriceRange, Product};
pub use store::{Catalog, CatalogFile, MAX_RELATED_PRODUCTS};
