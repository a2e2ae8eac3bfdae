//! Result shape: discriminants, truncation, grouping, serialization.

use std::fs;

use super::common::sample_catalog;
use tripsift::{quick_search, search_grouped, search_items, Catalog, ItemKind, KeywordMap};

#[test]
fn test_type_discriminants_follow_collections() {
    let catalog = sample_catalog();
    let results = search_items(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );

    for result in &results {
        let in_destinations = catalog.destinations.iter().any(|d| d.id == result.item.id());
        let in_packages = catalog.packages.iter().any(|p| p.id == result.item.id());
        match result.kind {
            ItemKind::Destination => assert!(in_destinations),
            ItemKind::Package => assert!(in_packages),
            ItemKind::Page => {}
        }
    }
    // A turkey query reaches both a destination and a package in this catalog
    assert!(results.iter().any(|r| r.kind == ItemKind::Destination));
    assert!(results.iter().any(|r| r.kind == ItemKind::Package));
}

#[test]
fn test_quick_search_truncates_after_ranking() {
    let catalog = sample_catalog();
    let map = KeywordMap::default();

    let full = search_items(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
    );
    let quick = quick_search(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
        2,
    );

    assert!(quick.len() <= 2);
    for (q, f) in quick.iter().zip(full.iter()) {
        assert_eq!(q.item.id(), f.item.id());
        assert_eq!(q.kind, f.kind);
        assert_eq!(q.score, f.score);
    }
}

#[test]
fn test_grouped_results_partition_the_flat_list() {
    let catalog = sample_catalog();
    let map = KeywordMap::default();

    let flat = search_items(
        "makkah",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
    );
    let grouped = search_grouped(
        "makkah",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
    );

    assert_eq!(
        grouped.destinations.len() + grouped.packages.len() + grouped.pages.len(),
        flat.len()
    );
    // Rank order is preserved inside each bucket
    for bucket in [&grouped.destinations, &grouped.packages, &grouped.pages] {
        for pair in bucket.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn test_results_serialize_with_lowercase_kind() {
    let catalog = sample_catalog();
    let results = quick_search(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
        1,
    );

    let value = serde_json::to_value(&results).unwrap();
    let first = &value[0];
    assert_eq!(first["kind"], "destination");
    assert!(first["score"].as_f64().unwrap() > 0.0);
    assert!(first["item"]["title"].is_string());
}

#[test]
fn test_catalog_survives_a_disk_round_trip() {
    // The CLI path: catalog serialized to a file, read back, searched
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let catalog = sample_catalog();
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

    let loaded: Catalog = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let map = KeywordMap::default();

    let before = search_items(
        "umrah",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
    );
    let after = search_items(
        "umrah",
        &loaded.destinations,
        &loaded.packages,
        &loaded.pages,
        &map,
    );

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.item.id(), a.item.id());
        assert_eq!(b.score, a.score);
    }
}

#[test]
fn test_matched_keywords_deduplicated_across_fields() {
    let catalog = sample_catalog();
    let results = search_items(
        "istanbul",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );

    for result in &results {
        let mut sorted = result.matched_keywords.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), result.matched_keywords.len());
    }
}
