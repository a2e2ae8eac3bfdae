// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion: one typed query, several tested variants.
//!
//! A search for "makkah" should find the Arab Saudi packages even when the
//! word "makkah" never appears in their field text. Expansion handles that
//! by testing the query against the keyword map in both directions and
//! emitting every term of the entries it lands on.
//!
//! This is containment matching, not graph traversal: a synonym pulls in its
//! own entry's terms and nothing further. Chains across entries are never
//! followed.

use crate::keywords::KeywordMap;
use crate::normalize::normalize;

/// Expand a query into the set of variants the scorer should test.
///
/// The normalized original query always comes first. For every map entry:
///
/// - query ⊆ canonical or canonical ⊆ query → add all synonyms
/// - query ⊆ synonym or synonym ⊆ query → add the canonical term and all
///   its synonyms
///
/// The result is deduplicated in insertion order, so output is deterministic
/// for a given map. An empty (or all-punctuation) query expands to nothing.
pub fn expand_query(query: &str, map: &KeywordMap) -> Vec<String> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut expanded: Vec<String> = vec![normalized.clone()];
    let mut push = |term: &str, out: &mut Vec<String>| {
        if !out.iter().any(|t| t == term) {
            out.push(term.to_string());
        }
    };

    for entry in map.entries() {
        if contains_either(&normalized, &entry.canonical) {
            for syn in &entry.synonyms {
                push(syn, &mut expanded);
            }
        }

        for syn in &entry.synonyms {
            if contains_either(&normalized, syn) {
                push(&entry.canonical, &mut expanded);
                for other in &entry.synonyms {
                    push(other, &mut expanded);
                }
                break;
            }
        }
    }

    expanded
}

/// Substring containment in either direction.
fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
