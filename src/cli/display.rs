// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results.
//!
//! Ranked rows with a kind badge, score, and the fields that matched.
//! Respects `NO_COLOR` and falls back to plain text when stdout is not a
//! TTY, so piping into files or other tools stays clean.

use tripsift::{ItemKind, ItemRef, SearchResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Color only when stdout is a terminal and NO_COLOR is unset.
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn badge(kind: ItemKind, color: bool) -> String {
    let code = match kind {
        ItemKind::Destination => GREEN,
        ItemKind::Package => CYAN,
        ItemKind::Page => YELLOW,
    };
    paint(&format!("[{}]", kind.name()), code, color)
}

/// Render ranked results, one block per hit.
pub fn render_results(query: &str, results: &[SearchResult<'_>]) {
    let color = use_color();

    if results.is_empty() {
        println!("No results for \"{query}\".");
        return;
    }

    println!(
        "{} result(s) for {}",
        results.len(),
        paint(&format!("\"{query}\""), BOLD, color)
    );
    println!();

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {} {}  {}",
            rank + 1,
            badge(result.kind, color),
            paint(result.item.title(), BOLD, color),
            paint(&format!("({:.1})", result.score), DIM, color),
        );

        if let ItemRef::Page(page) = result.item {
            if let Some(href) = &page.href {
                println!("     {}", paint(href, DIM, color));
            }
        }

        let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.name()).collect();
        let line = format!(
            "matched {} via {}",
            fields.join(", "),
            result.matched_keywords.join(", ")
        );
        println!("     {}", paint(&line, DIM, color));
    }
}

/// Render catalog summary counts for `inspect`.
pub fn render_summary(
    file: &str,
    destinations: usize,
    packages: usize,
    pages: usize,
    with_keywords: usize,
    map_entries: usize,
) {
    let color = use_color();
    println!("{}", paint(file, BOLD, color));
    println!("  destinations: {destinations}");
    println!("  packages:     {packages}");
    println!("  pages:        {pages}");
    println!("  items with curated keywords: {with_keywords}");
    println!("  synonym map entries: {map_entries}");
}
