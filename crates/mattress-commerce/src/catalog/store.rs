//! The read-only product catalog shared by the filter engine and the finder.

use std::collections::HashSet;

use crate::catalog::{product_to_slug, CatalogItem, Category, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of related products shown on a detail page.
pub const MAX_RELATED_PRODUCTS: usize = 8;

/// On-disk catalog layout: one product list per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub coir: Vec<Product>,
    #[serde(default)]
    pub spring: Vec<Product>,
    #[serde(default)]
    pub foam: Vec<Product>,
}

/// Immutable product catalog partitioned by category.
///
/// Product names are unique across all categories and every product has a
/// positive warranty. Both are checked on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    collections: [Vec<Product>; 3],
}

impl Catalog {
    /// Build a catalog from per-category product lists.
    pub fn new(
        coir: Vec<Product>,
        spring: Vec<Product>,
        foam: Vec<Product>,
    ) -> Result<Self, CommerceError> {
        let catalog = Self {
            collections: [coir, spring, foam],
        };
        catalog.validate()?;
        debug!(
            coir = catalog.count(Category::Coir),
            spring = catalog.count(Category::Spring),
            foam = catalog.count(Category::Foam),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from its file representation.
    pub fn from_file(file: CatalogFile) -> Result<Self, CommerceError> {
        Self::new(file.coir, file.spring, file.foam)
    }

    /// Parse a TOML catalog (`[[coir]]`, `[[spring]]`, `[[foam]]` tables).
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(s)?;
        Self::from_file(file)
    }

    /// Parse a JSON catalog (`{"coir": [...], "spring": [...], "foam": [...]}`).
    pub fn from_json_str(s: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(s)?;
        Self::from_file(file)
    }

    /// The storefront's built-in collection.
    pub fn builtin() -> Self {
        crate::catalog::seed::builtin_catalog()
    }

    pub(crate) fn from_partitions_unchecked(collections: [Vec<Product>; 3]) -> Self {
        Self { collections }
    }

    /// Convert back to the file representation.
    pub fn to_file(&self) -> CatalogFile {
        let [coir, spring, foam] = self.collections.clone();
        CatalogFile { coir, spring, foam }
    }

    fn validate(&self) -> Result<(), CommerceError> {
        let mut names = HashSet::new();
        let mut slugs = HashSet::new();

        for item in self.all_items() {
            let name = item.name();
            if name.trim().is_empty() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product with empty name in {}",
                    item.category.as_str()
                )));
            }
            if !names.insert(name) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product name: {}",
                    name
                )));
            }
            if !slugs.insert(product_to_slug(name)) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product slug collides with another product: {}",
                    name
                )));
            }
            if item.product.warranty == 0 {
                return Err(CommerceError::InvalidCatalog(format!(
                    "warranty must be positive: {}",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Products of one category, in catalog order.
    pub fn products_in(&self, category: Category) -> &[Product] {
        &self.collections[category.index()]
    }

    /// Category-tagged products of one category.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = CatalogItem<'_>> + '_ {
        self.products_in(category)
            .iter()
            .map(move |product| CatalogItem::new(category, product))
    }

    /// Every product, tagged with its category, in order coir, spring, foam.
    pub fn all_items(&self) -> impl Iterator<Item = CatalogItem<'_>> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.items_in(category))
    }

    /// Number of products in a category.
    pub fn count(&self, category: Category) -> usize {
        self.products_in(category).len()
    }

    /// Total number of products.
    pub fn len(&self) -> usize {
        self.collections.iter().map(Vec::len).sum()
    }

    /// Check if the catalog has no products at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a product by exact name.
    pub fn find(&self, name: &str) -> Option<CatalogItem<'_>> {
        self.all_items().find(|item| item.name() == name)
    }

    /// Look up a product by its URL slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<CatalogItem<'_>> {
        self.all_items()
            .find(|item| product_to_slug(item.name()) == slug)
    }

    /// Look up a product by slug, failing with `ProductNotFound`.
    pub fn get_by_slug(&self, slug: &str) -> Result<CatalogItem<'_>, CommerceError> {
        self.find_by_slug(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))
    }

    /// Other products from the same category, at most [`MAX_RELATED_PRODUCTS`].
    pub fn related_products(&self, item: &CatalogItem<'_>) -> Vec<CatalogItem<'_>> {
        self.items_in(item.category)
            .filter(|other| other.name() != item.name())
            .take(MAX_RELATED_PRODUCTS)
            .collect()
    }

    /// Resolve model names (e.g. quiz suggestions) to catalog entries.
    ///
    /// Fails on the first name that is not in the catalog.
    pub fn resolve_models<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<CatalogItem<'_>>, CommerceError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.find(name)
                    .ok_or_else(|| CommerceError::ProductNotFound(name.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Firmness, PriceRange};

    fn product(name: &str, warranty: u32) -> Product {
        Product::new(name, warranty, "Test", Firmness::Medium, PriceRange::Budget)
    }

    #[test]
    fn test_catalog_order_and_counts() {
        let catalog = Catalog::new(
            vec![product("A", 12), product("B", 24)],
            vec![product("C", 36)],
            vec![product("D", 48)],
        )
        .unwrap();

        let names: Vec<&str> = catalog.all_items().map(|i| i.name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.count(Category::Coir), 2);
        assert_eq!(catalog.find("C").unwrap().category, Category::Spring);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Catalog::new(vec![product("A", 12)], vec![product("A", 24)], vec![]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_slug_collision_rejected() {
        let result = Catalog::new(vec![product("Sky One", 12)], vec![product("SKY ONE", 24)], vec![]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_zero_warranty_rejected() {
        let result = Catalog::new(vec![product("A", 0)], vec![], vec![]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_find_by_slug() {
        let catalog = Catalog::new(vec![product("SKY ECO", 30)], vec![], vec![product("SKY ECO BOND", 30)]).unwrap();
        assert_eq!(catalog.find_by_slug("sky-eco-bond").unwrap().category, Category::Foam);
        assert_eq!(catalog.find_by_slug("sky-eco").unwrap().name(), "SKY ECO");
        assert!(catalog.find_by_slug("sky-nothing").is_none());
        assert!(matches!(
            catalog.get_by_slug("sky-nothing"),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_related_products_excludes_self_and_caps() {
        let coir: Vec<Product> = (0..12).map(|i| product(&format!("P{i}"), 12)).collect();
        let catalog = Catalog::new(coir, vec![product("S", 12)], vec![]).unwrap();
        let item = catalog.find("P3").unwrap();

        let related = catalog.related_products(&item);
        assert_eq!(related.len(), MAX_RELATED_PRODUCTS);
        assert!(related.iter().all(|r| r.name() != "P3"));
        assert!(related.iter().all(|r| r.category == Category::Coir));
        assert_eq!(related[0].name(), "P0");
        assert_eq!(related[3].name(), "P4");
    }

    #[test]
    fn test_resolve_models() {
        let catalog = Catalog::new(vec![product("A", 12)], vec![product("B", 12)], vec![]).unwrap();
        let items = catalog.resolve_models(&["B", "A"]).unwrap();
        assert_eq!(items[0].name(), "B");
        assert!(matches!(
            catalog.resolve_models(&["A", "Z"]),
            Err(CommerceError::ProductNotFound(name)) if name == "Z"
        ));
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [[coir]]
            name = "SKY LITE"
            warranty = 24
            positioning = "Budget friendly"
            features = ["Coir support core"]
            firmness = "Firm"
            price_range = "Budget"

            [[foam]]
            name = "SKY PETAL"
            warranty = 60
            positioning = "Memory foam"
            firmness = "Soft"
            priceRange = "Mid-Range"
        "#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.count(Category::Spring), 0);
        assert_eq!(
            catalog.find("SKY PETAL").unwrap().product.price_range,
            PriceRange::MidRange
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_firmness() {
        let json = r#"{"coir": [{"name": "X", "warranty": 12, "positioning": "p",
            "firmness": "Extra Firm", "priceRange": "Budget"}]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
