//! Cross-module checks between the finder and the built-in catalog.
//!
//! The quiz suggests models by name while the catalog lists them separately;
//! these tests keep the two from drifting apart.

use mattress_commerce::catalog::Catalog;
use mattress_commerce::finder::{recommend, Archetype, QuizAnswers, QuizSession};
use mattress_commerce::search::{browse, CategorySelection, FacetKind, FilterState};
use mattress_commerce::CommerceError;

#[test]
fn test_every_suggested_model_is_in_catalog() {
    let catalog = Catalog::builtin();
    for answers in QuizAnswers::all_combinations() {
        let rec = recommend(&answers);
        let items = catalog
            .resolve_models(rec.models.as_slice())
            .unwrap_or_else(|e| panic!("{:?} suggested a missing model: {}", answers, e));
        assert_eq!(items.len(), 2);
    }
}

#[test]
fn test_every_archetype_is_reachable() {
    for archetype in Archetype::ALL {
        assert!(
            QuizAnswers::all_combinations().any(|a| recommend(&a).archetype == archetype),
            "{} never recommended",
            archetype.as_str()
        );
    }
}

#[test]
fn test_recommended_collection_has_products() {
    let catalog = Catalog::builtin();
    for answers in QuizAnswers::all_combinations() {
        let rec = recommend(&answers);
        assert!(catalog.count(rec.collection) > 0);
        assert_eq!(rec.category, rec.collection.collection_title());
    }
}

#[test]
fn test_quiz_result_opens_collection() {
    let catalog = Catalog::builtin();
    let mut session = QuizSession::new();
    for option in ["Combination Sleeper", "Hotel-style bouncy feel", "Medium", "Premium"] {
        session.answer(option).unwrap();
    }
    let rec = session.recommendation().unwrap();
    assert_eq!(rec.archetype, Archetype::Spring);

    let state = FilterState::for_selection(rec.collection.into());
    let results = browse(&catalog, &state);
    for model in &rec.models {
        assert!(results.items.iter().any(|item| item.name() == model));
    }
}

#[test]
fn test_all_selection_lists_whole_catalog_in_order() {
    let catalog = Catalog::builtin();
    let results = browse(&catalog, &FilterState::for_selection(CategorySelection::All));
    assert_eq!(results.len(), catalog.len());
    assert_eq!(results.len(), 21);
    assert_eq!(results.items.first().map(|i| i.name()), Some("SKY LITE"));
    assert_eq!(results.items.last().map(|i| i.name()), Some("SKY LATEX BLISS"));
    assert_eq!(results.facets.len(), FacetKind::ALL.len());
}

#[test]
fn test_slugs_round_trip_through_catalog() {
    let catalog = Catalog::builtin();
    for item in catalog.all_items() {
        let found = catalog.get_by_slug(&item.slug()).unwrap();
        assert_eq!(found.name(), item.name());
    }
    assert_eq!(
        catalog.get_by_slug("sky-hammock").unwrap_err(),
        CommerceError::ProductNotFound("sky-hammock".to_string())
    );
}

#[test]
fn test_builtin_catalog_survives_toml_round_trip() {
    let catalog = Catalog::builtin();
    let toml = toml::to_string(&catalog.to_file()).unwrap();
    let reloaded = Catalog::from_toml_str(&toml).unwrap();
    assert_eq!(reloaded, catalog);
}
