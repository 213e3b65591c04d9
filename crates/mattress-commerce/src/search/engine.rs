//! Visible-set and facet-count computation.
//!
//! Every call recomputes from the catalog. The catalog is small and fixed;
//! a large catalog would want a per-facet inverted index instead.

use crate::catalog::{Catalog, CatalogItem};
use crate::search::{BrowseResults, CategorySelection, FacetGroup, FacetKind, FacetValue, Filter, FilterState};
use tracing::{debug, trace};

/// Products visible under the current filter state, in catalog order.
pub fn visible_products<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<CatalogItem<'a>> {
    let filters = state.active_filters(None);
    let visible: Vec<CatalogItem<'a>> = base_set(catalog, state.category())
        .into_iter()
        .filter(|item| passes(&filters, item))
        .collect();

    debug!(
        category = state.category().as_str(),
        filters = filters.len(),
        visible = visible.len(),
        "computed visible products"
    );
    visible
}

/// How many products would be visible with only `value` active for its facet.
///
/// The collection, search text and the other facets' selections are held as
/// they are in `state`; `state` itself is not changed.
pub fn facet_count(catalog: &Catalog, state: &FilterState, value: impl Into<FacetValue>) -> usize {
    let value = value.into();
    if state.category() == CategorySelection::None {
        return 0;
    }

    let filters = state.active_filters(Some(value.kind()));
    let count = base_set(catalog, state.category())
        .into_iter()
        .filter(|item| passes(&filters, item))
        .filter(|item| value.matches(item.product))
        .count();

    trace!(facet = value.kind().as_str(), value = value.label(), count, "facet count");
    count
}

/// Counts for every value of every facet, for rendering a filter panel.
pub fn facet_summary(catalog: &Catalog, state: &FilterState) -> Vec<FacetGroup> {
    FacetKind::ALL
        .into_iter()
        .map(|kind| {
            let mut group = FacetGroup::new(kind);
            for value in kind.values() {
                let count = facet_count(catalog, state, value);
                group.add_option(value, count, value.is_selected(state));
            }
            group
        })
        .collect()
}

/// Visible products plus the facet panel in one pass.
pub fn browse<'a>(catalog: &'a Catalog, state: &FilterState) -> BrowseResults<'a> {
    BrowseResults::new(visible_products(catalog, state))
        .with_facets(facet_summary(catalog, state))
        .with_active_filters(state.has_active_filters())
}

fn base_set(catalog: &Catalog, selection: CategorySelection) -> Vec<CatalogItem<'_>> {
    match selection {
        CategorySelection::None => Vec::new(),
        CategorySelection::All => catalog.all_items().collect(),
        CategorySelection::Only(category) => catalog.items_in(category).collect(),
    }
}

fn passes(filters: &[Filter], item: &CatalogItem<'_>) -> bool {
    filters.iter().all(|filter| filter.matches(item.product))
}
