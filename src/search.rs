// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: where the rubber meets the road.
//!
//! Everything culminates here. Normalize the query once, expand it once,
//! score every item in all three collections, drop the zeros, sort. The
//! whole pass is a pure synchronous function of its arguments - no cache,
//! no shared state, no suspension points - so concurrent calls from rapid
//! keystrokes are safe by construction. Debouncing is the caller's job.

use std::cmp::Ordering;

use crate::expand::expand_query;
use crate::keywords::KeywordMap;
use crate::normalize::normalize;
use crate::scoring::score_item;
use crate::types::{
    Destination, GroupedResults, ItemRef, Page, SearchResult, TravelPackage,
};

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Title** - ascending, for a stable alphabetical tiebreak
/// 3. **Kind, then id** - so equal-scored, equal-titled results still have
///    a total order and output is deterministic run to run
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => match a.item.title().cmp(b.item.title()) {
            Ordering::Equal => (a.kind, a.item.id()).cmp(&(b.kind, b.item.id())),
            ord => ord,
        },
    }
}

/// Search all three collections and return ranked results.
///
/// An empty or whitespace-only query returns no results before any scoring
/// work happens. Items scoring zero are excluded, not returned with a zero
/// row. Each result carries the kind of the collection it came from.
pub fn search_items<'a>(
    query: &str,
    destinations: &'a [Destination],
    packages: &'a [TravelPackage],
    pages: &'a [Page],
    map: &KeywordMap,
) -> Vec<SearchResult<'a>> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Vec::new();
    }
    let expanded = expand_query(&normalized, map);

    let refs = destinations
        .iter()
        .map(ItemRef::Destination)
        .chain(packages.iter().map(ItemRef::Package))
        .chain(pages.iter().map(ItemRef::Page));

    let mut results: Vec<SearchResult<'a>> = refs
        .filter_map(|item| {
            let scored = score_item(item, &normalized, &expanded);
            if scored.score > 0.0 {
                Some(SearchResult {
                    item,
                    kind: item.kind(),
                    score: scored.score,
                    matched_fields: scored.matched_fields,
                    matched_keywords: scored.matched_keywords,
                })
            } else {
                None
            }
        })
        .collect();

    results.sort_by(compare_results);
    results
}

/// [`search_items`] truncated to the top `limit` results.
///
/// Truncation happens after the full sort - this is a cut, not a separate
/// ranking pass, so `quick_search(.., n)` is always a prefix of
/// `search_items(..)`.
pub fn quick_search<'a>(
    query: &str,
    destinations: &'a [Destination],
    packages: &'a [TravelPackage],
    pages: &'a [Page],
    map: &KeywordMap,
    limit: usize,
) -> Vec<SearchResult<'a>> {
    let mut results = search_items(query, destinations, packages, pages, map);
    results.truncate(limit);
    results
}

/// One search pass partitioned by collection, rank order preserved inside
/// each bucket. This is the shape the grouped results UI consumes.
pub fn search_grouped<'a>(
    query: &str,
    destinations: &'a [Destination],
    packages: &'a [TravelPackage],
    pages: &'a [Page],
    map: &KeywordMap,
) -> GroupedResults<'a> {
    let mut grouped = GroupedResults::default();
    for result in search_items(query, destinations, packages, pages, map) {
        match result.item {
            ItemRef::Destination(_) => grouped.destinations.push(result),
            ItemRef::Package(_) => grouped.packages.push(result),
            ItemRef::Page(_) => grouped.pages.push(result),
        }
    }
    grouped
}
