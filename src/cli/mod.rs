// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tripsift command-line interface.
//!
//! Two subcommands: `search` to query a catalog file and `inspect` to
//! summarize one. The search command can swap in a custom synonym table,
//! which is mostly useful for tuning a keyword map before shipping it.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tripsift",
    about = "Fuzzy keyword search over a travel catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog JSON file and display ranked results
    Search {
        /// Path to catalog JSON ({"destinations": [...], "packages": [...], "pages": [...]})
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Path to a custom synonym table ({"canonical": ["synonym", ...]})
        ///
        /// Replaces the built-in travel table for this run. Terms are
        /// normalized on load, so the file can use display casing.
        #[arg(long)]
        keywords: Option<String>,
    },

    /// Summarize a catalog JSON file
    Inspect {
        /// Path to catalog JSON
        file: String,
    },
}
