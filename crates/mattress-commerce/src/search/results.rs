//! Collections view results.

use crate::catalog::CatalogItem;
use crate::search::FacetGroup;
use serde::Serialize;

/// Visible products together with the filter panel.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseResults<'a> {
    /// Visible products, in catalog order.
    pub items: Vec<CatalogItem<'a>>,
    /// Facet counts for each filter value.
    pub facets: Vec<FacetGroup>,
    /// Whether any filter beyond the collection is active.
    pub has_active_filters: bool,
}

impl<'a> BrowseResults<'a> {
    /// Create results with no facets.
    pub fn new(items: Vec<CatalogItem<'a>>) -> Self {
        Self {
            items,
            facets: Vec::new(),
            has_active_filters: false,
        }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set facets.
    pub fn with_facets(mut self, facets: Vec<FacetGroup>) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_active_filters(mut self, active: bool) -> Self {
        self.has_active_filters = active;
        self
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Heading such as "3 mattresses".
    pub fn summary(&self) -> String {
        match self.items.len() {
            1 => "1 mattress".to_string(),
            n => format!("{} mattresses", n),
        }
    }
}

impl Default for BrowseResults<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
