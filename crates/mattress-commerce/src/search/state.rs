//! Per-session filter state of the collections view.

use crate::catalog::{Category, Firmness, PriceRange};
use crate::search::{CategorySelection, FacetKind, Filter, WarrantyBucket};
use serde::{Deserialize, Serialize};

/// Everything the visitor has selected in the collections view.
///
/// Firmness and price selections hold each value at most once; repeats in
/// saved state are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedFilterState")]
pub struct FilterState {
    category: CategorySelection,
    search: String,
    warranty: Option<WarrantyBucket>,
    firmness: Vec<Firmness>,
    price: Vec<PriceRange>,
}

/// Wire form of [`FilterState`] before repeats are removed.
#[derive(Deserialize)]
struct SavedFilterState {
    #[serde(default)]
    category: CategorySelection,
    #[serde(default)]
    search: String,
    #[serde(default)]
    warranty: Option<WarrantyBucket>,
    #[serde(default)]
    firmness: Vec<Firmness>,
    #[serde(default)]
    price: Vec<PriceRange>,
}

impl From<SavedFilterState> for FilterState {
    fn from(saved: SavedFilterState) -> Self {
        Self {
            category: saved.category,
            search: saved.search,
            warranty: saved.warranty,
            firmness: dedup(saved.firmness),
            price: dedup(saved.price),
        }
    }
}

impl FilterState {
    /// Create an empty state with no collection selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with a collection already selected.
    pub fn for_selection(selection: CategorySelection) -> Self {
        let mut state = Self::new();
        state.select(selection);
        state
    }

    /// Current collection selection.
    pub fn category(&self) -> CategorySelection {
        self.category
    }

    /// Current search text, as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selected warranty bucket; `None` means all.
    pub fn warranty(&self) -> Option<WarrantyBucket> {
        self.warranty
    }

    /// Selected firmness values, in the order they were selected.
    pub fn firmness(&self) -> &[Firmness] {
        &self.firmness
    }

    /// Selected price ranges, in the order they were selected.
    pub fn price(&self) -> &[PriceRange] {
        &self.price
    }

    /// Switch collection. Always clears every other filter.
    pub fn select(&mut self, selection: CategorySelection) {
        self.category = selection;
        self.clear_all_filters();
    }

    /// Switch to a single collection.
    pub fn select_category(&mut self, category: Category) {
        self.select(CategorySelection::Only(category));
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_warranty(&mut self, bucket: Option<WarrantyBucket>) {
        self.warranty = bucket;
    }

    /// Toggle a firmness value. Returns true if it is now selected.
    pub fn toggle_firmness(&mut self, firmness: Firmness) -> bool {
        toggle(&mut self.firmness, firmness)
    }

    /// Toggle a price range. Returns true if it is now selected.
    pub fn toggle_price(&mut self, price: PriceRange) -> bool {
        toggle(&mut self.price, price)
    }

    /// Check if any filter beyond the collection selection is active.
    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || self.warranty.is_some()
            || !self.firmness.is_empty()
            || !self.price.is_empty()
    }

    /// Reset search, warranty, firmness and price. Leaves the collection alone.
    pub fn clear_all_filters(&mut self) {
        self.search.clear();
        self.warranty = None;
        self.firmness.clear();
        self.price.clear();
    }

    /// Active predicates in evaluation order, optionally leaving one facet out.
    ///
    /// Inactive dimensions contribute no filter at all.
    pub fn active_filters(&self, except: Option<FacetKind>) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(4);

        if !self.search.trim().is_empty() {
            filters.push(Filter::Text(self.search.clone()));
        }
        if except != Some(FacetKind::Warranty) {
            if let Some(bucket) = self.warranty {
                filters.push(Filter::Warranty(bucket));
            }
        }
        if except != Some(FacetKind::Firmness) && !self.firmness.is_empty() {
            filters.push(Filter::Firmness(self.firmness.clone()));
        }
        if except != Some(FacetKind::Price) && !self.price.is_empty() {
            filters.push(Filter::Price(self.price.clone()));
        }

        filters
    }
}

/// Drop repeated values, keeping first-selected order.
fn dedup<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) -> bool {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
        false
    } else {
        values.push(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_state() -> FilterState {
        let mut state = FilterState::for_selection(CategorySelection::All);
        state.set_search("latex");
        state.set_warranty(Some(WarrantyBucket::SevenPlus));
        state.toggle_firmness(Firmness::Soft);
        state.toggle_price(PriceRange::Luxury);
        state
    }

    #[test]
    fn test_new_state_is_neutral() {
        let state = FilterState::new();
        assert_eq!(state.category(), CategorySelection::None);
        assert!(!state.has_active_filters());
        assert!(state.active_filters(None).is_empty());
    }

    #[test]
    fn test_has_active_filters_each_dimension() {
        let mut state = FilterState::new();
        state.set_search("   ");
        assert!(!state.has_active_filters());
        state.set_search("ortho");
        assert!(state.has_active_filters());

        let mut state = FilterState::new();
        state.set_warranty(Some(WarrantyBucket::UpToFive));
        assert!(state.has_active_filters());

        let mut state = FilterState::new();
        state.toggle_price(PriceRange::Budget);
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_clear_all_filters_keeps_category_and_is_idempotent() {
        let mut state = busy_state();
        state.clear_all_filters();
        let once = state.clone();
        state.clear_all_filters();

        assert_eq!(state, once);
        assert_eq!(state.category(), CategorySelection::All);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_category_change_resets_filters() {
        let mut state = busy_state();
        state.select_category(Category::Foam);
        assert_eq!(state.category(), CategorySelection::Only(Category::Foam));
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = FilterState::new();
        state.toggle_firmness(Firmness::Firm);
        state.toggle_firmness(Firmness::Soft);
        let original = state.firmness().to_vec();

        assert!(!state.toggle_firmness(Firmness::Firm));
        assert_eq!(state.firmness(), &[Firmness::Soft]);
        assert!(state.toggle_firmness(Firmness::Firm));

        let mut restored = state.firmness().to_vec();
        let mut expected = original;
        restored.sort();
        expected.sort();
        assert_eq!(restored, expected);
    }

    #[test]
    fn test_active_filters_excludes_facet() {
        let state = busy_state();
        assert_eq!(state.active_filters(None).len(), 4);

        let without_firmness = state.active_filters(Some(FacetKind::Firmness));
        assert_eq!(without_firmness.len(), 3);
        assert!(!without_firmness
            .iter()
            .any(|f| matches!(f, Filter::Firmness(_))));
        assert!(matches!(without_firmness[0], Filter::Text(_)));
    }

    #[test]
    fn test_saved_state_drops_repeated_values() {
        let json = r#"{
            "category": "coir",
            "search": "",
            "warranty": null,
            "firmness": ["Firm", "Firm", "Soft"],
            "price": ["Budget", "Budget"]
        }"#;
        let mut state: FilterState = serde_json::from_str(json).unwrap();
        assert_eq!(state.category(), CategorySelection::Only(Category::Coir));
        assert_eq!(state.firmness(), &[Firmness::Firm, Firmness::Soft]);
        assert_eq!(state.price(), &[PriceRange::Budget]);

        assert!(!state.toggle_firmness(Firmness::Firm));
        assert_eq!(state.firmness(), &[Firmness::Soft]);
        assert!(state.toggle_firmness(Firmness::Firm));
        assert_eq!(state.firmness(), &[Firmness::Soft, Firmness::Firm]);
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = busy_state();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""category":"all""#));
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
