//! Search module.
//!
//! Filter state, predicates, facet counting and the compare list of the
//! collections view.

mod compare;
mod engine;
mod facets;
mod filter;
mod results;
mod state;

pub use compare::{CompareList, CompareToggle, MAX_COMPARE_ITEMS};
pub use engine::{browse, facet_count, facet_summary, visible_products};
pub use facets::{FacetGroup, FacetKind, FacetOption, FacetValue};
pub use filter::{
    CategorySelection, Filter, WarrantyBucket, FIVE_TO_SEVEN_YEARS_MAX, UP_TO_FIVE_YEARS_MAX,
};
pub use results::BrowseResults;
pub use state::FilterState;
