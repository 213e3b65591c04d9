//! Product types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// How firm a mattress feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Firmness {
    Soft,
    Medium,
    Firm,
}

impl Firmness {
    /// Every firmness level, in display order.
    pub const ALL: [Firmness; 3] = [Firmness::Soft, Firmness::Medium, Firmness::Firm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Firmness::Soft => "Soft",
            Firmness::Medium => "Medium",
            Firmness::Firm => "Firm",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "soft" => Some(Firmness::Soft),
            "medium" => Some(Firmness::Medium),
            "firm" => Some(Firmness::Firm),
            _ => None,
        }
    }

    /// Parse a firmness filter value, rejecting anything unknown.
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        Self::from_str(s).ok_or_else(|| CommerceError::unknown_filter("firmness", s))
    }
}

/// Price positioning of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    Budget,
    #[serde(rename = "Mid-Range")]
    MidRange,
    Premium,
    Luxury,
}

impl PriceRange {
    /// Every price range, cheapest first.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Budget,
        PriceRange::MidRange,
        PriceRange::Premium,
        PriceRange::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "Budget",
            PriceRange::MidRange => "Mid-Range",
            PriceRange::Premium => "Premium",
            PriceRange::Luxury => "Luxury",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Some(PriceRange::Budget),
            "mid-range" | "midrange" | "mid" => Some(PriceRange::MidRange),
            "premium" => Some(PriceRange::Premium),
            "luxury" => Some(PriceRange::Luxury),
            _ => None,
        }
    }

    /// Parse a price range filter value, rejecting anything unknown.
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        Self::from_str(s).ok_or_else(|| CommerceError::unknown_filter("price", s))
    }
}

/// A mattress in the catalog.
///
/// The category is not stored here: it is given by the catalog partition
/// the product lives in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name (unique across the catalog).
    pub name: String,
    /// Short feature labels.
    #[serde(default)]
    pub features: Vec<String>,
    /// Warranty in months.
    pub warranty: u32,
    /// One-line marketing positioning.
    pub positioning: String,
    /// Firmness level.
    pub firmness: Firmness,
    /// Price positioning.
    #[serde(rename = "priceRange", alias = "price_range")]
    pub price_range: PriceRange,
    /// Long-form description, flagship products only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a new product with no features or description.
    pub fn new(
        name: impl Into<String>,
        warranty: u32,
        positioning: impl Into<String>,
        firmness: Firmness,
        price_range: PriceRange,
    ) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
            warranty,
            positioning: positioning.into(),
            firmness,
            price_range,
            description: None,
        }
    }

    /// Set the feature labels.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the long-form description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// URL slug for the product detail page.
    pub fn slug(&self) -> String {
        product_to_slug(&self.name)
    }

    /// Warranty expressed in whole years, rounded down.
    pub fn warranty_years(&self) -> u32 {
        self.warranty / 12
    }

    /// Check if this product has a flagship description.
    pub fn is_flagship(&self) -> bool {
        self.description.is_some()
    }
}

/// Convert a product name to its URL slug.
///
/// Lowercases the name and replaces each run of whitespace with a single `-`,
/// including runs at either end.
pub fn product_to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}
