// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzrank command-line interface.
//!
//! Two subcommands: `rank` to rank a JSON candidate list against a query, and
//! `score` to see what the matcher makes of a single (text, query) pair. Both
//! accept the same matcher flags, which override the optional config file.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fuzzrank::{MatcherKind, Normalization, RankConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fuzzrank",
    about = "Rank candidates against a fuzzy query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates from a JSON file (or stdin) against a query
    Rank {
        /// Search query
        query: String,

        /// JSON array of candidates; `-` reads stdin
        ///
        /// Each element is a string, an array of strings (fields, title first),
        /// or an object with `title` and optional `subtitle`.
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Check result invariants before printing
        #[arg(long)]
        verify: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },

    /// Show the raw score and matched positions for one text
    Score {
        /// Text to match against
        text: String,

        /// Search query
        query: String,

        #[command(flatten)]
        matching: MatchArgs,
    },
}

/// Matcher flags shared by every subcommand.
#[derive(Args)]
pub struct MatchArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Matching primitive
    #[arg(long, value_enum)]
    pub matcher: Option<MatcherArg>,

    /// Disable single-typo tolerance
    #[arg(long)]
    pub no_errors: bool,

    /// Treat text as plain words rather than separator-delimited segments
    #[arg(long)]
    pub no_path: bool,

    /// Segment separator for path-like matching
    #[arg(long)]
    pub separator: Option<char>,

    /// What the combined score is divided by
    #[arg(long, value_enum)]
    pub normalize: Option<NormalizeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MatcherArg {
    Path,
    Skim,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NormalizeArg {
    /// The query matched against itself
    Query,
    /// Each candidate's concatenated fields matched against themselves
    Combined,
}

impl MatchArgs {
    /// Apply flag overrides on top of a loaded (or default) config.
    pub fn apply(&self, config: &mut RankConfig) {
        if let Some(matcher) = self.matcher {
            config.matcher = match matcher {
                MatcherArg::Path => MatcherKind::Path,
                MatcherArg::Skim => MatcherKind::Skim,
            };
        }
        if self.no_errors {
            config.options.allow_errors = false;
        }
        if self.no_path {
            config.options.is_path_like = false;
        }
        if let Some(separator) = self.separator {
            config.options.separator = separator;
        }
        if let Some(normalize) = self.normalize {
            config.normalization = match normalize {
                NormalizeArg::Query => Normalization::Query,
                NormalizeArg::Combined => Normalization::Combined,
            };
        }
    }
}
