// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the canonical comparison form.
//!
//! Every comparison in the engine happens on normalized text. Raw catalog
//! strings and raw queries never meet directly - they both go through
//! `normalize` first, which makes "Café, İstanbul!" and "cafe istanbul"
//! the same string.
//!
//! # Algorithm
//!
//! 1. NFD normalize (decompose characters into base + combining marks)
//! 2. Filter out combining marks (category Mn = Mark, Nonspacing)
//! 3. Lowercase
//! 4. Replace each run of punctuation/symbols with a single space
//! 5. Collapse whitespace and trim
//!
//! Step 4 is what keeps "Istanbul, Cappadocia" tokenizing as two words
//! instead of one glued "istanbulcappadocia".

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, replace
/// punctuation with spaces, and collapse whitespace.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`. The empty string
/// maps to the empty string, which matches nothing downstream.
///
/// # Examples
///
/// ```
/// use tripsift::normalize;
///
/// assert_eq!(normalize("Café"), "cafe");
/// assert_eq!(normalize("Istanbul, Cappadocia & Pamukkale"), "istanbul cappadocia pamukkale");
/// assert_eq!(normalize("  spaced   out  "), "spaced out");
/// ```
pub fn normalize(value: &str) -> String {
    let stripped: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    // Punctuation becomes a word boundary, not a deletion. `char::is_alphanumeric`
    // keeps non-Latin letters and digits intact.
    let spaced: String = stripped
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    // This covers the most common combining diacritical marks
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0C00}'..='\u{0C7F}' |  // Telugu (some combining marks)
        '\u{0900}'..='\u{097F}' |  // Devanagari (some combining marks)
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
