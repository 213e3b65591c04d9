//! Mattress categories and category-tagged catalog entries.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A top-level mattress collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coir,
    Spring,
    Foam,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 3] = [Category::Coir, Category::Spring, Category::Foam];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coir => "coir",
            Category::Spring => "spring",
            Category::Foam => "foam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "coir" => Some(Category::Coir),
            "spring" => Some(Category::Spring),
            "foam" => Some(Category::Foam),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Coir => "Coir",
            Category::Spring => "Spring",
            Category::Foam => "Foam",
        }
    }

    /// Heading used for the collection, e.g. "Coir Mattresses".
    pub fn collection_title(&self) -> &'static str {
        match self {
            Category::Coir => "Coir Mattresses",
            Category::Spring => "Spring Mattresses",
            Category::Foam => "Foam Mattresses",
        }
    }

    /// Position in catalog order.
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Coir => 0,
            Category::Spring => 1,
            Category::Foam => 2,
        }
    }

    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        Self::from_str(s).ok_or_else(|| CommerceError::unknown_filter("category", s))
    }
}

/// A product paired with the category it was listed under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogItem<'a> {
    /// Category the product belongs to.
    pub category: Category,
    /// The product itself.
    #[serde(flatten)]
    pub product: &'a Product,
}

impl<'a> CatalogItem<'a> {
    pub fn new(category: Category, product: &'a Product) -> Self {
        Self { category, product }
    }

    /// Product name.
    pub fn name(&self) -> &'a str {
        &self.product.name
    }

    /// URL slug for the detail page.
    pub fn slug(&self) -> String {
        self.product.slug()
    }

    /// Alt text for product imagery.
    pub fn alt_text(&self) -> String {
        let key_feature = self
            .product
            .features
            .first()
            .map(String::as_str)
            .unwrap_or("Premium quality");
        format!(
            "Skyindia {} {} Mattress - {}",
            self.product.name,
            self.category.display_name(),
            key_feature
        )
    }
}
