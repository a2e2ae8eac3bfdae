//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Destination, Page, TravelPackage};

/// Create a destination with a title and location, everything else empty.
///
/// This is the canonical implementation used across all tests.
pub fn make_destination(id: u32, title: &str, location: &str) -> Destination {
    Destination {
        id,
        title: title.to_string(),
        location: Some(location.to_string()),
        category: None,
        description: None,
        highlights: vec![],
        keywords: vec![],
    }
}

/// Create a package with a title and location, everything else empty.
pub fn make_package(id: u32, title: &str, location: &str) -> TravelPackage {
    TravelPackage {
        id,
        title: title.to_string(),
        subtitle: None,
        location: Some(location.to_string()),
        category: None,
        tour_type: None,
        description: None,
        highlights: vec![],
        keywords: vec![],
    }
}

/// Create a navigational page with a title and href.
pub fn make_page(id: u32, title: &str, href: &str) -> Page {
    Page {
        id,
        title: title.to_string(),
        subtitle: None,
        description: None,
        keywords: vec![],
        href: Some(href.to_string()),
    }
}

/// The destination the docs keep reaching for: Turkey Heritage with the
/// classic three-stop location string and a category.
pub fn turkey_heritage() -> Destination {
    Destination {
        id: 2,
        title: "Turkey Heritage".to_string(),
        location: Some("Istanbul, Cappadocia, Pamukkale".to_string()),
        category: Some("Cultural".to_string()),
        description: Some("Hot air balloons at dawn and travertine terraces.".to_string()),
        highlights: vec![
            "Blue Mosque".to_string(),
            "Goreme open air museum".to_string(),
        ],
        keywords: vec!["turki".to_string(), "heritage".to_string()],
    }
}
