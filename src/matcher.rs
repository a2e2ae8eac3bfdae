// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-field matching: one query variant against one field's text.
//!
//! The tiers run strongest-first. A phrase hit short-circuits everything;
//! below that, word-level matching hands out partial credit so "turkey tor"
//! still finds "Turkey Heritage Tour". The strategy mirrors the usual
//! exact → prefix → fuzzy ladder, collapsed to word granularity because
//! fields here are a dozen words, not documents.
//!
//! # Tiers
//!
//! 1. **Phrase containment** - field contains the query as a substring:
//!    score 100, every query word matched, done.
//! 2. **All-words (AND)** - every query word finds a field word at
//!    exact / substring / similarity credit: mean credit × 80.
//! 3. **Partial (OR)** - only when tier 2's condition fails:
//!    matched fraction × 40.
//! 4. **Order bonus** - all words matched in left-to-right field order
//!    (2+ words): flat +10.

use crate::normalize::normalize;
use crate::scoring::{
    ALL_WORDS_WEIGHT, ORDER_BONUS, PARTIAL_WEIGHT, PHRASE_SCORE, SIMILARITY_THRESHOLD,
    SUBSTRING_CREDIT,
};
use crate::similarity::word_similarity;

/// Outcome of matching one query variant against one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub matched: bool,
    pub score: f64,
    /// Query words that found a counterpart in the field
    pub matched_words: Vec<String>,
}

impl FieldMatch {
    fn none() -> Self {
        FieldMatch {
            matched: false,
            score: 0.0,
            matched_words: Vec::new(),
        }
    }
}

/// Best credit a single query word earns against one field word, with the
/// field-word index for the order-bonus check.
///
/// Exact equality beats substring beats similarity; similarity only counts
/// above the threshold. Returns `None` when nothing clears the bar.
fn best_word_match(query_word: &str, field_words: &[&str]) -> Option<(f64, usize)> {
    let mut best: Option<(f64, usize)> = None;

    for (idx, field_word) in field_words.iter().enumerate() {
        let credit = if query_word == *field_word {
            1.0
        } else if field_word.contains(query_word) || query_word.contains(field_word) {
            SUBSTRING_CREDIT
        } else {
            let sim = word_similarity(query_word, field_word);
            if sim > SIMILARITY_THRESHOLD {
                sim
            } else {
                continue;
            }
        };

        // Strictly-greater keeps the leftmost field word on equal credit,
        // which is what the order bonus wants to see.
        if best.map_or(true, |(score, _)| credit > score) {
            best = Some((credit, idx));
        }
        if credit == 1.0 {
            break;
        }
    }

    best
}

/// Match one query variant against one field's text.
///
/// Both inputs are normalized internally (idempotent, so pre-normalized
/// callers lose nothing). `matched` is simply `score > 0`.
pub fn match_query(query: &str, field_text: &str) -> FieldMatch {
    let query = normalize(query);
    let field = normalize(field_text);
    if query.is_empty() || field.is_empty() {
        return FieldMatch::none();
    }

    let query_words: Vec<&str> = query.split(' ').collect();

    // Tier 1: the whole phrase appears verbatim. Strongest possible signal,
    // overrides word-level logic entirely.
    if field.contains(&query) {
        return FieldMatch {
            matched: true,
            score: PHRASE_SCORE,
            matched_words: query_words.iter().map(|w| (*w).to_string()).collect(),
        };
    }

    let field_words: Vec<&str> = field.split(' ').collect();

    let mut matched_words: Vec<String> = Vec::new();
    let mut match_indices: Vec<usize> = Vec::with_capacity(query_words.len());
    let mut credit_sum = 0.0;
    let mut all_matched = true;

    for query_word in &query_words {
        match best_word_match(query_word, &field_words) {
            Some((credit, idx)) => {
                credit_sum += credit;
                match_indices.push(idx);
                matched_words.push((*query_word).to_string());
            }
            None => all_matched = false,
        }
    }

    let mut score = 0.0;
    if all_matched {
        score += credit_sum / query_words.len() as f64 * ALL_WORDS_WEIGHT;
    } else if !matched_words.is_empty() {
        score += matched_words.len() as f64 / query_words.len() as f64 * PARTIAL_WEIGHT;
    }

    // Order bonus: every word matched AND the matches read left-to-right in
    // the same order as the query (strictly increasing indices).
    if all_matched
        && query_words.len() >= 2
        && match_indices.windows(2).all(|pair| pair[1] > pair[0])
    {
        score += ORDER_BONUS;
    }

    FieldMatch {
        matched: score > 0.0,
        score,
        matched_words,
    }
}
