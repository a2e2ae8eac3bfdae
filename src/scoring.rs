// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Two rules shape every constant here, and the tests at the bottom pin
//! them down:
//!
//! 1. **Field hierarchy**: title outranks curated keywords, which outrank
//!    everything else; description is the least trusted signal.
//! 2. **Literal beats synonym**: a match through the typed query counts
//!    full; a match through an expanded synonym is scaled down, so a
//!    literal hit always outranks a synonym-only hit of equal raw score.
//!
//! Scores are additive across the expansion × field cross product. A query
//! that matches an item through its literal form and two synonyms collects
//! credit from all three paths - broad relevance is rewarded rather than
//! deduplicated away.
//!
//! # Constants
//!
//! | Constant | Value | Why this value |
//! |----------|-------|----------------|
//! | PHRASE_SCORE | 100.0 | Verbatim phrase hit, the ceiling for one field match |
//! | ALL_WORDS_WEIGHT | 80.0 | Every word found, scaled by mean word credit |
//! | PARTIAL_WEIGHT | 40.0 | Some words found, scaled by matched fraction |
//! | ORDER_BONUS | 10.0 | Words in field order; small, never decisive alone |
//! | SUBSTRING_CREDIT | 0.8 | Word containment (plurals, partial typing) |
//! | SIMILARITY_THRESHOLD | 0.6 | Below this, positional overlap is noise |
//! | TITLE_PREFIX_BONUS | 30.0 | Title starts with the query |
//! | TITLE_EXACT_BONUS | 50.0 | Title equals the query (stacks with prefix) |
//! | EXPANSION_MULTIPLIER | 0.7 | Synonym-path discount vs literal 1.0 |

use crate::matcher::{match_query, FieldMatch};
use crate::types::{FieldKind, FieldText, ItemRef};

// =============================================================================
// MATCH TIER CONSTANTS
// =============================================================================

/// Score for a verbatim phrase hit within a field.
pub const PHRASE_SCORE: f64 = 100.0;

/// Multiplier for the all-words tier (mean word credit × this).
pub const ALL_WORDS_WEIGHT: f64 = 80.0;

/// Multiplier for the partial tier (matched fraction × this).
pub const PARTIAL_WEIGHT: f64 = 40.0;

/// Flat bonus when all query words appear in field order.
pub const ORDER_BONUS: f64 = 10.0;

/// Word credit for substring containment in either direction.
pub const SUBSTRING_CREDIT: f64 = 0.8;

/// Positional similarity below this contributes nothing.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

// =============================================================================
// FIELD WEIGHTS AND BONUSES
// =============================================================================
// INVARIANT: FIELD_HIERARCHY
// title > keywords > location > subtitle > category > highlights > description
// Curated keywords are the strongest signal after the title itself; the
// test_field_hierarchy test fails if an edit reorders these.

pub const TITLE_WEIGHT: f64 = 1.0;
pub const KEYWORDS_WEIGHT: f64 = 0.9;
pub const LOCATION_WEIGHT: f64 = 0.8;
pub const SUBTITLE_WEIGHT: f64 = 0.6;
pub const CATEGORY_WEIGHT: f64 = 0.5;
pub const HIGHLIGHTS_WEIGHT: f64 = 0.4;
pub const DESCRIPTION_WEIGHT: f64 = 0.3;

/// Flat bonus when the normalized title starts with the query variant.
pub const TITLE_PREFIX_BONUS: f64 = 30.0;

/// Flat bonus when the normalized title equals the query variant.
/// Equality implies prefix, so an exact title collects both bonuses.
pub const TITLE_EXACT_BONUS: f64 = 50.0;

/// Contribution scale for the literal (typed) query.
pub const LITERAL_MULTIPLIER: f64 = 1.0;

/// Contribution scale for synonym-expanded query variants.
pub const EXPANSION_MULTIPLIER: f64 = 0.7;

/// Per-field weight applied to the field matcher's raw score.
pub fn field_weight(kind: FieldKind) -> f64 {
    match kind {
        FieldKind::Title => TITLE_WEIGHT,
        FieldKind::Keywords => KEYWORDS_WEIGHT,
        FieldKind::Location => LOCATION_WEIGHT,
        FieldKind::Subtitle => SUBTITLE_WEIGHT,
        FieldKind::Category => CATEGORY_WEIGHT,
        FieldKind::Highlights => HIGHLIGHTS_WEIGHT,
        FieldKind::Description => DESCRIPTION_WEIGHT,
    }
}

/// Aggregated score of one item across all fields and query variants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemScore {
    pub score: f64,
    pub matched_fields: Vec<FieldKind>,
    pub matched_keywords: Vec<String>,
}

impl ItemScore {
    /// Fold one field match into the accumulator.
    ///
    /// Returns the updated accumulator so the scorer reads as a pure fold
    /// over the expansion × field cross product.
    fn absorb(mut self, field: &FieldText, hit: &FieldMatch, multiplier: f64) -> Self {
        if !hit.matched {
            return self;
        }
        self.score += hit.score * field_weight(field.kind) * multiplier;
        if !self.matched_fields.contains(&field.kind) {
            self.matched_fields.push(field.kind);
        }
        for word in &hit.matched_words {
            if !self.matched_keywords.contains(word) {
                self.matched_keywords.push(word.clone());
            }
        }
        self
    }

    /// Title prefix/equality bonuses, scaled like the rest of the title
    /// field's contribution.
    fn absorb_title_bonus(mut self, title: &str, variant: &str, multiplier: f64) -> Self {
        let mut bonus = 0.0;
        if title.starts_with(variant) {
            bonus += TITLE_PREFIX_BONUS;
        }
        if title == variant {
            bonus += TITLE_EXACT_BONUS;
        }
        self.score += bonus * multiplier;
        self
    }
}

/// Score one item against every expanded query variant.
///
/// `normalized_query` is the literal typed query in canonical form; variants
/// equal to it contribute at full scale, synonym variants at
/// [`EXPANSION_MULTIPLIER`]. An item with no match anywhere comes back with
/// score 0 - never an error - and the orchestrator filters it out.
pub fn score_item(item: ItemRef<'_>, normalized_query: &str, expanded: &[String]) -> ItemScore {
    let fields = item.field_texts();
    let title = fields
        .iter()
        .find(|f| f.kind == FieldKind::Title)
        .map(|f| f.text.clone());

    expanded.iter().fold(ItemScore::default(), |acc, variant| {
        let multiplier = if variant == normalized_query {
            LITERAL_MULTIPLIER
        } else {
            EXPANSION_MULTIPLIER
        };

        let acc = fields.iter().fold(acc, |acc, field| {
            acc.absorb(field, &match_query(variant, &field.text), multiplier)
        });

        match &title {
            Some(title) => acc.absorb_title_bonus(title, variant, multiplier),
            None => acc,
        }
    })
}
