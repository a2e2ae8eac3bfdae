//! Field matching behavior across real catalog items.

use super::common::sample_catalog;
use tripsift::{search_items, FieldKind, ItemKind, KeywordMap};

#[test]
fn test_turkey_query_end_to_end() {
    let catalog = sample_catalog();
    let results = search_items(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );

    let heritage = results
        .iter()
        .find(|r| r.kind == ItemKind::Destination && r.item.id() == 2)
        .expect("Turkey Heritage should match");

    // Exact-title-substring tier plus the starts-with bonus pushes past 100
    assert!(heritage.score > 100.0, "score was {}", heritage.score);
    assert!(heritage.matched_fields.contains(&FieldKind::Title));
    // Expansion reaches the location string too (Istanbul, Cappadocia, Pamukkale)
    assert!(heritage.matched_fields.contains(&FieldKind::Location));
}

#[test]
fn test_diacritics_do_not_change_results() {
    let catalog = sample_catalog();
    let map = KeywordMap::default();

    let plain = search_items(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
    );
    let accented = search_items(
        "Türkéy",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
    );

    assert_eq!(plain.len(), accented.len());
    for (a, b) in plain.iter().zip(accented.iter()) {
        assert_eq!(a.item.id(), b.item.id());
        assert_eq!(a.kind, b.kind);
        assert!((a.score - b.score).abs() < 1e-9);
    }
}

#[test]
fn test_unrelated_query_is_absent_not_zero_scored() {
    let catalog = sample_catalog();
    let results = search_items(
        "xylophone",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );
    assert!(results.is_empty());
}

#[test]
fn test_empty_and_whitespace_queries() {
    let catalog = sample_catalog();
    let map = KeywordMap::default();
    for query in ["", "   ", "\t\n", "?!,"] {
        let results = search_items(
            query,
            &catalog.destinations,
            &catalog.packages,
            &catalog.pages,
            &map,
        );
        assert!(results.is_empty(), "query {query:?} should return nothing");
    }
}

#[test]
fn test_keyword_field_reaches_items_without_literal_text() {
    let catalog = sample_catalog();
    // "pantai" (Indonesian for beach) only exists in Bali's curated keywords
    let results = search_items(
        "pantai",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );

    let bali = results
        .iter()
        .find(|r| r.item.title() == "Bali Escape")
        .expect("curated keyword should surface Bali");
    assert!(bali.matched_fields.contains(&FieldKind::Keywords));
}
