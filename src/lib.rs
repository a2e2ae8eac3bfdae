//! Client-side fuzzy keyword search for travel catalogs.
//!
//! This crate ranks destinations, tour packages, and navigational pages
//! against a free-text query: normalization, synonym expansion, tiered fuzzy
//! field matching, and weighted multi-field scoring, all in one pure
//! synchronous pass. It is built for catalogs of tens of items searched on
//! every keystroke, not for document corpora - there is no index to build
//! and no state to invalidate.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ normalize.rs │────▶│  expand.rs  │────▶│  search.rs  │
//! │ (canonical   │     │ (KeywordMap │     │ (search_    │
//! │  text form)  │     │  variants)  │     │  items)     │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │similarity.rs │────▶│ matcher.rs  │────▶│ scoring.rs  │
//! │ (word-level  │     │ (match      │     │ (weights,   │
//! │  heuristic)  │     │  tiers)     │     │  score_item)│
//! └──────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tripsift::{quick_search, Destination, KeywordMap};
//!
//! let destinations = vec![Destination {
//!     id: 2,
//!     title: "Turkey Heritage".to_string(),
//!     location: Some("Istanbul, Cappadocia, Pamukkale".to_string()),
//!     category: Some("Cultural".to_string()),
//!     description: None,
//!     highlights: vec![],
//!     keywords: vec![],
//! }];
//!
//! let results = quick_search("turkey", &destinations, &[], &[], &KeywordMap::default(), 5);
//! assert_eq!(results[0].item.title(), "Turkey Heritage");
//! ```

// Module declarations
mod expand;
mod keywords;
mod matcher;
mod normalize;
mod scoring;
mod search;
mod similarity;
pub mod testing;
mod types;

// Re-exports for public API
pub use expand::expand_query;
pub use keywords::{KeywordEntry, KeywordMap};
pub use matcher::{match_query, FieldMatch};
pub use normalize::normalize;
pub use scoring::{field_weight, score_item, ItemScore};
pub use search::{compare_results, quick_search, search_grouped, search_items};
pub use similarity::word_similarity;
pub use types::{
    Catalog, Destination, FieldKind, FieldText, GroupedResults, ItemKind, ItemRef, Page,
    SearchResult, TravelPackage,
};
