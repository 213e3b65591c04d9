//! Filter predicates for the collections view.

use crate::catalog::{Category, Firmness, PriceRange, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Top-level collection selection.
///
/// Serialized as its flat name: `none`, `all`, `coir`, `spring` or `foam`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum CategorySelection {
    /// Nothing chosen yet; no products are shown.
    #[default]
    None,
    /// Every collection.
    All,
    /// A single collection.
    Only(Category),
}

impl CategorySelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySelection::None => "none",
            CategorySelection::All => "all",
            CategorySelection::Only(category) => category.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(CategorySelection::None),
            "all" => Some(CategorySelection::All),
            other => Category::from_str(other).map(CategorySelection::Only),
        }
    }

    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        Self::from_str(s).ok_or_else(|| CommerceError::unknown_filter("category", s))
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        selection.as_str().to_string()
    }
}

impl TryFrom<String> for CategorySelection {
    type Error = CommerceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

/// Upper bound (inclusive) of the `up-to-5` bucket, in months.
pub const UP_TO_FIVE_YEARS_MAX: u32 = 60;
/// Upper bound (inclusive) of the `5-7` bucket, in months.
pub const FIVE_TO_SEVEN_YEARS_MAX: u32 = 84;

/// Named warranty ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WarrantyBucket {
    /// 60 months or less.
    #[serde(rename = "up-to-5")]
    UpToFive,
    /// 61 to 84 months.
    #[serde(rename = "5-7")]
    FiveToSeven,
    /// More than 84 months.
    #[serde(rename = "7-plus")]
    SevenPlus,
}

impl WarrantyBucket {
    /// Every bucket, shortest first.
    pub const ALL: [WarrantyBucket; 3] = [
        WarrantyBucket::UpToFive,
        WarrantyBucket::FiveToSeven,
        WarrantyBucket::SevenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyBucket::UpToFive => "up-to-5",
            WarrantyBucket::FiveToSeven => "5-7",
            WarrantyBucket::SevenPlus => "7-plus",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WarrantyBucket::UpToFive => "Up to 5 years",
            WarrantyBucket::FiveToSeven => "5-7 years",
            WarrantyBucket::SevenPlus => "7+ years",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up-to-5" => Some(WarrantyBucket::UpToFive),
            "5-7" => Some(WarrantyBucket::FiveToSeven),
            "7-plus" => Some(WarrantyBucket::SevenPlus),
            _ => None,
        }
    }

    /// Parse a warranty selector, where `all` means no bucket.
    pub fn parse_selector(s: &str) -> Result<Option<Self>, CommerceError> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        Self::from_str(s)
            .map(Some)
            .ok_or_else(|| CommerceError::unknown_filter("warranty", s))
    }

    /// Check if a warranty (in months) falls in this bucket.
    pub fn contains(&self, months: u32) -> bool {
        match self {
            WarrantyBucket::UpToFive => months <= UP_TO_FIVE_YEARS_MAX,
            WarrantyBucket::FiveToSeven => {
                months > UP_TO_FIVE_YEARS_MAX && months <= FIVE_TO_SEVEN_YEARS_MAX
            }
            WarrantyBucket::SevenPlus => months > FIVE_TO_SEVEN_YEARS_MAX,
        }
    }

    /// The bucket a warranty falls in.
    pub fn for_months(months: u32) -> Self {
        if months <= UP_TO_FIVE_YEARS_MAX {
            WarrantyBucket::UpToFive
        } else if months <= FIVE_TO_SEVEN_YEARS_MAX {
            WarrantyBucket::FiveToSeven
        } else {
            WarrantyBucket::SevenPlus
        }
    }
}

/// A single product predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring search over name, positioning, firmness and features.
    Text(String),
    /// Warranty within a bucket.
    Warranty(WarrantyBucket),
    /// Firmness is one of the listed values (OR).
    Firmness(Vec<Firmness>),
    /// Price range is one of the listed values (OR).
    Price(Vec<PriceRange>),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check if a product passes this filter.
    ///
    /// Blank text and empty value sets match everything.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => matches_text(product, query),
            Filter::Warranty(bucket) => bucket.contains(product.warranty),
            Filter::Firmness(values) => values.is_empty() || values.contains(&product.firmness),
            Filter::Price(values) => values.is_empty() || values.contains(&product.price_range),
        }
    }
}

fn matches_text(product: &Product, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    hit(&product.name)
        || hit(&product.positioning)
        || hit(product.firmness.as_str())
        || product.features.iter().any(|f| hit(f))
}
