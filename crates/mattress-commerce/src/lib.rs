//! Storefront logic for the Skyindia mattress range.
//!
//! This crate holds the two decision engines behind the store, both pure
//! functions over an immutable [`Catalog`]:
//!
//! - **Finder**: four quiz answers to an archetype and two suggested models
//! - **Search**: collection browsing with text search, facet filters and
//!   live facet counts
//! - **Catalog**: the product range, loadable from TOML or JSON
//! - **Contact**: the enquiry form
//!
//! # Example
//!
//! ```rust
//! use mattress_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//!
//! let answers = QuizAnswers::parse("Side Sleeper", "plush", "Soft & Plush", "Premium").unwrap();
//! let rec = recommend(&answers);
//! assert_eq!(rec.archetype, Archetype::Plush);
//! assert!(catalog.resolve_models(rec.models.as_slice()).is_ok());
//!
//! let mut state = FilterState::for_selection(Category::Coir.into());
//! state.toggle_firmness(Firmness::Firm);
//! let results = browse(&catalog, &state);
//! println!("{}", results.summary());
//! ```

pub mod error;

pub mod catalog;
pub mod contact;
pub mod finder;
pub mod search;

pub use catalog::Catalog;
pub use error::CommerceError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogItem, Category, Firmness, PriceRange, Product};

    // Finder
    pub use crate::finder::{
        recommend, Archetype, Budget, ComfortPreference, Priority, QuestionId, QuizAnswers,
        QuizProgress, QuizSession, Recommendation, SleepPosition,
    };

    // Search
    pub use crate::search::{
        browse, facet_count, visible_products, BrowseResults, CategorySelection, CompareList,
        FacetKind, FacetValue, FilterState, WarrantyBucket,
    };

    // Contact
    pub use crate::contact::{Acknowledgment, ContactForm};
}
