// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tripsift CLI: run catalog searches from the terminal.
//!
//! This is a thin shell over the library - load a catalog JSON file, hand
//! it to `quick_search`, render. All the interesting behavior lives in the
//! library so the web frontend and this binary stay in lockstep.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use tripsift::{quick_search, Catalog, KeywordMap};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            keywords,
        } => run_search(&file, &query, limit, json, keywords.as_deref()),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_catalog(path: &str) -> Result<Catalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading catalog {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing catalog {path}"))
}

fn load_keyword_map(path: Option<&str>) -> Result<KeywordMap> {
    match path {
        None => Ok(KeywordMap::default()),
        Some(path) => {
            let raw =
                fs::read_to_string(path).with_context(|| format!("reading keyword map {path}"))?;
            let table: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing keyword map {path}"))?;
            Ok(KeywordMap::from_table(table))
        }
    }
}

fn run_search(
    file: &str,
    query: &str,
    limit: usize,
    json: bool,
    keywords: Option<&str>,
) -> Result<()> {
    let catalog = load_catalog(file)?;
    let map = load_keyword_map(keywords)?;

    let results = quick_search(
        query,
        &catalog.destinations,
        &catalog.packages,
        &catalog.pages,
        &map,
        limit,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::render_results(query, &results);
    }
    Ok(())
}

fn run_inspect(file: &str) -> Result<()> {
    let catalog = load_catalog(file)?;

    let with_keywords = catalog
        .destinations
        .iter()
        .map(|d| &d.keywords)
        .chain(catalog.packages.iter().map(|p| &p.keywords))
        .chain(catalog.pages.iter().map(|p| &p.keywords))
        .filter(|k| !k.is_empty())
        .count();

    display::render_summary(
        file,
        catalog.destinations.len(),
        catalog.packages.len(),
        catalog.pages.len(),
        with_keywords,
        KeywordMap::default().len(),
    );
    Ok(())
}
