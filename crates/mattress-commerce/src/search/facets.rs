//! Facet types for the filter panel.

use crate::catalog::{Firmness, PriceRange, Product};
use crate::search::{FilterState, WarrantyBucket};
use serde::{Deserialize, Serialize};

/// A filterable dimension of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Firmness,
    Price,
    Warranty,
}

impl FacetKind {
    /// Every facet, in filter panel order.
    pub const ALL: [FacetKind; 3] = [FacetKind::Warranty, FacetKind::Firmness, FacetKind::Price];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Firmness => "firmness",
            FacetKind::Price => "price",
            FacetKind::Warranty => "warranty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetKind::Firmness => "Firmness",
            FacetKind::Price => "Price Range",
            FacetKind::Warranty => "Warranty",
        }
    }

    /// Candidate values for this facet.
    pub fn values(&self) -> Vec<FacetValue> {
        match self {
            FacetKind::Firmness => Firmness::ALL.into_iter().map(FacetValue::Firmness).collect(),
            FacetKind::Price => PriceRange::ALL.into_iter().map(FacetValue::Price).collect(),
            FacetKind::Warranty => WarrantyBucket::ALL
                .into_iter()
                .map(FacetValue::Warranty)
                .collect(),
        }
    }
}

/// One candidate value of a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "lowercase")]
pub enum FacetValue {
    Firmness(Firmness),
    Price(PriceRange),
    Warranty(WarrantyBucket),
}

impl FacetValue {
    /// The facet this value belongs to.
    pub fn kind(&self) -> FacetKind {
        match self {
            FacetValue::Firmness(_) => FacetKind::Firmness,
            FacetValue::Price(_) => FacetKind::Price,
            FacetValue::Warranty(_) => FacetKind::Warranty,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacetValue::Firmness(f) => f.as_str(),
            FacetValue::Price(p) => p.as_str(),
            FacetValue::Warranty(w) => w.display_name(),
        }
    }

    /// Check if a product carries this value.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            FacetValue::Firmness(f) => product.firmness == *f,
            FacetValue::Price(p) => product.price_range == *p,
            FacetValue::Warranty(w) => w.contains(product.warranty),
        }
    }

    /// Check if this value is part of the active filter state.
    pub fn is_selected(&self, state: &FilterState) -> bool {
        match self {
            FacetValue::Firmness(f) => state.firmness().contains(f),
            FacetValue::Price(p) => state.price().contains(p),
            FacetValue::Warranty(w) => state.warranty() == Some(*w),
        }
    }
}

impl From<Firmness> for FacetValue {
    fn from(value: Firmness) -> Self {
        FacetValue::Firmness(value)
    }
}

impl From<PriceRange> for FacetValue {
    fn from(value: PriceRange) -> Self {
        FacetValue::Price(value)
    }
}

impl From<WarrantyBucket> for FacetValue {
    fn from(value: WarrantyBucket) -> Self {
        FacetValue::Warranty(value)
    }
}

/// A facet with the count for each of its values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetGroup {
    /// Which facet.
    pub kind: FacetKind,
    /// Heading for the group.
    pub name: String,
    /// Values in display order.
    pub options: Vec<FacetOption>,
}

impl FacetGroup {
    pub fn new(kind: FacetKind) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            options: Vec::new(),
        }
    }

    /// Add a value to the group.
    pub fn add_option(&mut self, value: FacetValue, count: usize, selected: bool) {
        self.options.push(FacetOption {
            value,
            label: value.label().to_string(),
            count,
            selected,
        });
    }
}

/// A single facet value with its count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetOption {
    /// The value.
    pub value: FacetValue,
    /// Display label.
    pub label: String,
    /// Products that would be visible with only this value active for the facet.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_cover_enums() {
        assert_eq!(FacetKind::Firmness.values().len(), 3);
        assert_eq!(FacetKind::Price.values().len(), 4);
        assert_eq!(FacetKind::Warranty.values().len(), 3);
        assert!(FacetKind::Price
            .values()
            .iter()
            .all(|v| v.kind() == FacetKind::Price));
    }

    #[test]
    fn test_is_selected() {
        let mut state = FilterState::new();
        state.toggle_price(PriceRange::Luxury);
        state.set_warranty(Some(WarrantyBucket::FiveToSeven));

        assert!(FacetValue::from(PriceRange::Luxury).is_selected(&state));
        assert!(!FacetValue::from(PriceRange::Budget).is_selected(&state));
        assert!(FacetValue::from(WarrantyBucket::FiveToSeven).is_selected(&state));
        assert!(!FacetValue::from(Firmness::Soft).is_selected(&state));
    }

    #[test]
    fn test_add_option_uses_label() {
        let mut group = FacetGroup::new(FacetKind::Warranty);
        group.add_option(WarrantyBucket::SevenPlus.into(), 4, false);
        assert_eq!(group.name, "Warranty");
        assert_eq!(group.options[0].label, "7+ years");
        assert_eq!(group.options[0].count, 4);
    }
}
