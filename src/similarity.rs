// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word similarity: the cheap typo heuristic.
//!
//! When a query word is neither equal to nor a substring of any field word,
//! the matcher falls back to this: count character positions that agree and
//! divide by the longer word's length. It rewards shared prefixes and
//! penalizes length mismatch, and it costs one zip per pair instead of an
//! O(nm) edit-distance table.
//!
//! The trade-off is no transposition tolerance: "ommrah" vs "umrah" scores
//! poorly because every position after the insertion shifts. A bounded
//! Damerau-Levenshtein ratio would fix that class of typo; the 0.6 threshold
//! in the matcher was tuned against this heuristic, so the two would have to
//! move together.

/// Similarity of two words in `[0, 1]`.
///
/// - `1.0` - identical
/// - `0.8` - one is a substring of the other (plurals, partial typing)
/// - otherwise - equal-position character matches over the longer length
///
/// Inputs are expected in normalized form; comparison is by Unicode scalar
/// value, not bytes, so multi-byte characters count as one position.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(b) || b.contains(a) {
        return 0.8;
    }

    let longer = a.chars().count().max(b.chars().count());
    let matches = a
        .chars()
        .zip(b.chars())
        .filter(|(ca, cb)| ca == cb)
        .count();

    matches as f64 / longer as f64
}
