//! Side-by-side comparison selection.

use crate::catalog::{Catalog, CatalogItem};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Maximum number of products in a comparison.
pub const MAX_COMPARE_ITEMS: usize = 3;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    /// The product was added.
    Added,
    /// The product was already present and has been removed.
    Removed,
    /// The list was full; nothing changed.
    Full,
}

/// Ordered set of product names picked for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedCompareList")]
pub struct CompareList {
    names: Vec<String>,
}

/// Wire form of [`CompareList`], checked on load.
#[derive(Deserialize)]
struct SavedCompareList {
    #[serde(default)]
    names: Vec<String>,
}

impl TryFrom<SavedCompareList> for CompareList {
    type Error = CommerceError;

    /// Repeated names are dropped; more than [`MAX_COMPARE_ITEMS`] is rejected.
    fn try_from(saved: SavedCompareList) -> Result<Self, Self::Error> {
        let mut list = CompareList::new();
        for name in saved.names {
            if list.contains(&name) {
                continue;
            }
            if list.is_full() {
                return Err(CommerceError::InvalidState(format!(
                    "compare list holds at most {} products",
                    MAX_COMPARE_ITEMS
                )));
            }
            list.names.push(name);
        }
        Ok(list)
    }
}

impl CompareList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Adding to a full list leaves it unchanged.
    pub fn toggle(&mut self, item: &CatalogItem<'_>) -> CompareToggle {
        self.toggle_name(item.name())
    }

    /// Toggle by product name.
    pub fn toggle_name(&mut self, name: &str) -> CompareToggle {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            return CompareToggle::Removed;
        }
        if self.is_full() {
            return CompareToggle::Full;
        }
        self.names.push(name.to_string());
        CompareToggle::Added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Selected names, in the order they were added.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Selected products resolved against the catalog.
    ///
    /// Names the catalog does not know are skipped.
    pub fn items<'a>(&self, catalog: &'a Catalog) -> Vec<CatalogItem<'a>> {
        self.names.iter().filter_map(|n| catalog.find(n)).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= MAX_COMPARE_ITEMS
    }

    /// Ready to open the comparison view (two or more products).
    pub fn can_compare(&self) -> bool {
        self.names.len() >= 2
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut list = CompareList::new();
        assert_eq!(list.toggle_name("SKY ORTHO"), CompareToggle::Added);
        assert!(list.contains("SKY ORTHO"));
        assert_eq!(list.toggle_name("SKY ORTHO"), CompareToggle::Removed);
        assert!(list.is_empty());
    }

    #[test]
    fn test_fourth_item_is_ignored() {
        let mut list = CompareList::new();
        for name in ["SKY ORTHO", "SKY RUBY", "SKY IRIS"] {
            list.toggle_name(name);
        }
        let before = list.clone();

        assert_eq!(list.toggle_name("SKY ROSE"), CompareToggle::Full);
        assert_eq!(list, before);
        assert_eq!(list.len(), MAX_COMPARE_ITEMS);
        assert_eq!(list.names(), &["SKY ORTHO", "SKY RUBY", "SKY IRIS"]);
    }

    #[test]
    fn test_full_list_can_still_remove() {
        let mut list = CompareList::new();
        for name in ["A", "B", "C"] {
            list.toggle_name(name);
        }
        assert_eq!(list.toggle_name("B"), CompareToggle::Removed);
        assert_eq!(list.toggle_name("D"), CompareToggle::Added);
        assert_eq!(list.names(), &["A", "C", "D"]);
    }

    #[test]
    fn test_items_resolve_against_catalog() {
        let catalog = Catalog::builtin();
        let mut list = CompareList::new();
        let rose = catalog.find("SKY ROSE").unwrap();
        list.toggle(&rose);
        list.toggle_name("SKY LITE");
        assert!(list.can_compare());

        let items = list.items(&catalog);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "SKY ROSE");

        list.clear();
        assert!(!list.can_compare());
    }

    #[test]
    fn test_saved_list_over_limit_is_rejected() {
        let json = r#"{"names":["A","B","C","D","E"]}"#;
        let err = serde_json::from_str::<CompareList>(json).unwrap_err();
        assert!(err.to_string().contains("at most 3"));
    }

    #[test]
    fn test_saved_list_drops_repeats() {
        let list: CompareList =
            serde_json::from_str(r#"{"names":["SKY ROSE","SKY ROSE","SKY LITE"]}"#).unwrap();
        assert_eq!(list.names(), &["SKY ROSE", "SKY LITE"]);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(serde_json::from_str::<CompareList>(&json).unwrap(), list);
    }
}
