// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Three concrete item shapes (destinations, tour packages, navigational
//! pages), a borrowed sum type tying a result back to its item, and the
//! field table the scorer walks. Items are plain serde records so the CLI
//! can load them straight from catalog JSON.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchResult**: `score > 0`. Zero-score items are filtered before a
//!   result is ever constructed; "no match" is absence, not a zero row.
//! - **SearchResult**: `kind` is fixed by the collection the item came from,
//!   never inferred from the item's shape.
//! - **FieldText**: text is already normalized. The scorer never normalizes
//!   item fields a second time (it would be idempotent, just wasted work).

use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::normalize;

/// Accept highlights as either one string or a list of strings.
///
/// Catalog JSON written by hand tends to collapse single-bullet highlight
/// lists into a bare string; both forms mean the same thing here.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => vec![s],
        StringOrList::Many(list) => list,
    })
}

// =============================================================================
// CATALOG ITEMS
// =============================================================================

/// A destination entry: somewhere the agency sells trips to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    pub title: String,
    /// Comma-separated place names, e.g. "Istanbul, Cappadocia, Pamukkale"
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Feature bullets shown on the destination card
    #[serde(default, deserialize_with = "string_or_list")]
    pub highlights: Vec<String>,
    /// Curated discoverability terms beyond the literal field text
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A bookable tour package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Trip style, e.g. "Umroh", "Leisure", "Honeymoon"
    #[serde(default)]
    pub tour_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A navigational page (about, gallery, contact, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Navigation target, e.g. "/gallery"
    #[serde(default)]
    pub href: Option<String>,
}

/// The three collections a search runs over, as they appear in catalog JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub packages: Vec<TravelPackage>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

// =============================================================================
// DISCRIMINANTS AND FIELD TABLE
// =============================================================================

/// Which collection a result came from.
///
/// Assigned by the orchestrator per input collection - never inferred from
/// item shape. Declaration order doubles as the final ranking tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Destination,
    Package,
    Page,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Destination => "destination",
            ItemKind::Package => "package",
            ItemKind::Page => "page",
        }
    }
}

/// A searchable field, ordered by weight (title heaviest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Keywords,
    Location,
    Subtitle,
    Category,
    Highlights,
    Description,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Keywords => "keywords",
            FieldKind::Location => "location",
            FieldKind::Subtitle => "subtitle",
            FieldKind::Category => "category",
            FieldKind::Highlights => "highlights",
            FieldKind::Description => "description",
        }
    }
}

/// One normalized field of one item, ready for matching.
#[derive(Debug, Clone)]
pub struct FieldText {
    pub kind: FieldKind,
    pub text: String,
}

impl FieldText {
    fn new(kind: FieldKind, raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            None
        } else {
            Some(FieldText { kind, text })
        }
    }

    fn joined(kind: FieldKind, parts: &[String]) -> Option<Self> {
        if parts.is_empty() {
            None
        } else {
            Self::new(kind, &parts.join(" "))
        }
    }
}

// =============================================================================
// ITEM REFERENCES AND RESULTS
// =============================================================================

/// Borrowed reference to a catalog item plus which shape it is.
///
/// Results hold one of these instead of cloning items: the caller owns the
/// collections for the duration of the search, results just point back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemRef<'a> {
    Destination(&'a Destination),
    Package(&'a TravelPackage),
    Page(&'a Page),
}

impl<'a> ItemRef<'a> {
    pub fn kind(self) -> ItemKind {
        match self {
            ItemRef::Destination(_) => ItemKind::Destination,
            ItemRef::Package(_) => ItemKind::Package,
            ItemRef::Page(_) => ItemKind::Page,
        }
    }

    pub fn id(self) -> u32 {
        match self {
            ItemRef::Destination(d) => d.id,
            ItemRef::Package(p) => p.id,
            ItemRef::Page(p) => p.id,
        }
    }

    /// The raw display title (un-normalized - used for rendering and tiebreaks).
    pub fn title(self) -> &'a str {
        match self {
            ItemRef::Destination(d) => &d.title,
            ItemRef::Package(p) => &p.title,
            ItemRef::Page(p) => &p.title,
        }
    }

    /// Build the normalized field table for this item.
    ///
    /// Empty and missing fields are dropped here, so the scorer only ever
    /// sees text that could conceivably match. Highlights and keywords are
    /// joined into one string each; category and tour type share a field.
    pub fn field_texts(self) -> Vec<FieldText> {
        let mut fields = Vec::with_capacity(7);
        match self {
            ItemRef::Destination(d) => {
                fields.extend(FieldText::new(FieldKind::Title, &d.title));
                fields.extend(FieldText::joined(FieldKind::Keywords, &d.keywords));
                fields.extend(
                    d.location
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Location, v)),
                );
                fields.extend(
                    d.category
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Category, v)),
                );
                fields.extend(FieldText::joined(FieldKind::Highlights, &d.highlights));
                fields.extend(
                    d.description
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Description, v)),
                );
            }
            ItemRef::Package(p) => {
                fields.extend(FieldText::new(FieldKind::Title, &p.title));
                fields.extend(FieldText::joined(FieldKind::Keywords, &p.keywords));
                fields.extend(
                    p.location
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Location, v)),
                );
                fields.extend(
                    p.subtitle
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Subtitle, v)),
                );
                let category = [p.category.clone(), p.tour_type.clone()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>();
                fields.extend(FieldText::joined(FieldKind::Category, &category));
                fields.extend(FieldText::joined(FieldKind::Highlights, &p.highlights));
                fields.extend(
                    p.description
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Description, v)),
                );
            }
            ItemRef::Page(p) => {
                fields.extend(FieldText::new(FieldKind::Title, &p.title));
                fields.extend(FieldText::joined(FieldKind::Keywords, &p.keywords));
                fields.extend(
                    p.subtitle
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Subtitle, v)),
                );
                fields.extend(
                    p.description
                        .as_deref()
                        .and_then(|v| FieldText::new(FieldKind::Description, v)),
                );
            }
        }
        fields
    }
}

/// One ranked search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub item: ItemRef<'a>,
    /// Which collection the item came from
    pub kind: ItemKind,
    /// Relevance score (higher is better; always > 0 for emitted results)
    pub score: f64,
    /// Fields that contributed positive score, deduplicated
    pub matched_fields: Vec<FieldKind>,
    /// Query words that found a match somewhere in the item, deduplicated
    pub matched_keywords: Vec<String>,
}

/// Results of one search pass, partitioned by collection for grouped display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedResults<'a> {
    pub destinations: Vec<SearchResult<'a>>,
    pub packages: Vec<SearchResult<'a>>,
    pub pages: Vec<SearchResult<'a>>,
}
