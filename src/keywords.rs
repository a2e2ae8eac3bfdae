// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The synonym table behind query expansion.
//!
//! Content editors think in canonical destination names; travelers type
//! whatever they know - the Indonesian name, a city, a rite. The keyword map
//! bridges the two: each entry pairs a canonical term with the synonyms that
//! should surface it. The table is read-only at runtime and injected into
//! the expander, so tests can run against a two-entry map instead of the
//! full shipping one.
//!
//! Entries are normalized once at construction. Lookup code downstream can
//! assume every stored term is already in canonical comparison form.

use std::collections::BTreeMap;

use crate::normalize::normalize;

/// One canonical term and the synonyms that map to it.
#[derive(Debug, Clone)]
pub struct KeywordEntry {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

/// Read-only canonical-term → synonyms table.
#[derive(Debug, Clone)]
pub struct KeywordMap {
    entries: Vec<KeywordEntry>,
}

impl KeywordMap {
    /// Build a map from `(canonical, synonyms)` pairs, normalizing every term.
    ///
    /// Terms that normalize to the empty string are dropped rather than kept
    /// as entries that could never match anything.
    pub fn new<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|(canonical, synonyms)| {
                let canonical = normalize(canonical.as_ref());
                if canonical.is_empty() {
                    return None;
                }
                let synonyms: Vec<String> = synonyms
                    .iter()
                    .map(|s| normalize(s.as_ref()))
                    .filter(|s| !s.is_empty())
                    .collect();
                Some(KeywordEntry {
                    canonical,
                    synonyms,
                })
            })
            .collect();
        KeywordMap { entries }
    }

    /// Build a map from a parsed JSON object of `{canonical: [synonyms...]}`.
    ///
    /// `BTreeMap` rather than `HashMap` so a file override expands in a
    /// stable entry order across runs.
    pub fn from_table(table: BTreeMap<String, Vec<String>>) -> Self {
        Self::new(table)
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordMap {
    /// The shipping travel table.
    ///
    /// Synonyms mix English, Indonesian, and landmark names because that is
    /// what travelers actually type into the search box.
    fn default() -> Self {
        KeywordMap::new([
            ("turkey", vec!["turki", "istanbul", "cappadocia", "pamukkale"]),
            (
                "arab saudi",
                vec!["saudi", "makkah", "madinah", "umrah", "hajj", "haji"],
            ),
            ("japan", vec!["jepang", "tokyo", "osaka", "kyoto", "sakura"]),
            ("korea", vec!["korea selatan", "seoul", "busan", "nami"]),
            ("europe", vec!["eropa", "paris", "london", "roma", "swiss"]),
            ("egypt", vec!["mesir", "cairo", "kairo", "piramida"]),
            ("dubai", vec!["uae", "abu dhabi", "burj khalifa"]),
            ("thailand", vec!["bangkok", "phuket", "pattaya"]),
            ("vietnam", vec!["hanoi", "halong", "da nang"]),
            ("jordan", vec!["yordania", "amman", "petra", "wadi rum"]),
            ("promo", vec!["diskon", "murah", "hemat"]),
            ("halal tour", vec!["wisata halal", "muslim friendly"]),
        ])
    }
}
