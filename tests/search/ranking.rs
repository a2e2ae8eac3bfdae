//! Ranking order: scores dominate, titles break ties, literal beats synonym.

use super::common::{make_destination, sample_catalog};
use tripsift::{search_items, KeywordMap};

#[test]
fn test_exact_title_outranks_partial_title() {
    let dests = vec![
        make_destination(1, "Jordan Adjacent Trip", "Aqaba"),
        make_destination(2, "Jordan Discovery", "Amman, Petra"),
    ];
    let results = search_items(
        "Jordan Discovery",
        &dests,
        &[],
        &[],
        &KeywordMap::default(),
    );

    assert_eq!(results[0].item.title(), "Jordan Discovery");
    assert!(results.len() >= 2);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_literal_match_outranks_synonym_only_match() {
    // Both items take a title phrase hit of identical raw strength; one
    // through the literal query, one only through expansion
    let dests = vec![
        make_destination(1, "Makkah Tour", "Saudi Arabia"),
        make_destination(2, "Madinah Tour", "Saudi Arabia"),
    ];
    let results = search_items("makkah", &dests, &[], &[], &KeywordMap::default());

    assert_eq!(results[0].item.id(), 1, "literal hit should rank first");
    let literal = results.iter().find(|r| r.item.id() == 1).unwrap();
    let synonym = results.iter().find(|r| r.item.id() == 2).unwrap();
    assert!(literal.score > synonym.score);
}

#[test]
fn test_tie_broken_by_title_ascending() {
    let dests = vec![
        make_destination(1, "Zanzibar Beaches", "Stone Town"),
        make_destination(2, "Antalya Beaches", "Lara"),
    ];
    let results = search_items("beaches", &dests, &[], &[], &KeywordMap::default());

    assert_eq!(results.len(), 2);
    assert!((results[0].score - results[1].score).abs() < 1e-9);
    assert_eq!(results[0].item.title(), "Antalya Beaches");
}

#[test]
fn test_results_sorted_by_score_descending() {
    let catalog = sample_catalog();
    let results = search_items(
        "turkey",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );

    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_title_match_outranks_description_match() {
    let with_title = make_destination(1, "Cappadocia Balloons", "Goreme");
    let mut with_description = make_destination(2, "Central Anatolia", "Goreme");
    with_description.description = Some("Famous for cappadocia balloons".to_string());

    let dests = vec![with_description, with_title];
    let results = search_items(
        "cappadocia balloons",
        &dests,
        &[],
        &[],
        &KeywordMap::default(),
    );

    assert_eq!(results[0].item.title(), "Cappadocia Balloons");
}
