//! Synonym expansion behavior, end to end.

use super::common::{make_destination, sample_catalog};
use tripsift::{expand_query, search_items, ItemKind, KeywordMap};

#[test]
fn test_synonym_query_expands_to_canonical_entry() {
    let expanded = expand_query("makkah", &KeywordMap::default());
    assert_eq!(expanded[0], "makkah");
    for term in ["arab saudi", "saudi", "madinah", "umrah", "hajj", "haji"] {
        assert!(expanded.contains(&term.to_string()), "missing {term}");
    }
}

#[test]
fn test_makkah_surfaces_arab_saudi_destination() {
    let catalog = sample_catalog();
    let results = search_items(
        "makkah",
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &KeywordMap::default(),
    );

    let hit = results
        .iter()
        .find(|r| r.kind == ItemKind::Destination && r.item.title() == "Arab Saudi")
        .expect("Arab Saudi destination should surface for 'makkah'");
    assert!(hit.score > 0.0);
}

#[test]
fn test_query_containing_canonical_term_expands() {
    // "turkey tour 2026" contains the canonical term "turkey", which pulls
    // in the whole synonym set
    let expanded = expand_query("turkey tour 2026", &KeywordMap::default());
    assert!(expanded.contains(&"istanbul".to_string()));
    assert!(expanded.contains(&"pamukkale".to_string()));
}

#[test]
fn test_custom_map_injection_changes_reachability() {
    let dests = vec![make_destination(1, "Iceland Aurora", "Reykjavik")];

    // Without a synonym bridge the query shares nothing with the item
    let bare = search_items(
        "northern lights",
        &dests,
        &[],
        &[],
        &KeywordMap::new(Vec::<(&str, Vec<&str>)>::new()),
    );
    assert!(bare.is_empty());

    // With an injected entry the canonical term reaches the title
    let map = KeywordMap::new([("iceland", vec!["northern lights"])]);
    let bridged = search_items("northern lights", &dests, &[], &[], &map);
    assert_eq!(bridged.len(), 1);
    assert_eq!(bridged[0].item.title(), "Iceland Aurora");
}

#[test]
fn test_expansion_is_deterministic() {
    let map = KeywordMap::default();
    assert_eq!(
        expand_query("umrah istanbul", &map),
        expand_query("umrah istanbul", &map)
    );
}
