// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked fuzzy matching for small in-memory candidate lists.
//!
//! Give it a query, a slice of anything, and a function that pulls text fields
//! out of each item. Get back the items that matched, best first, each with a
//! normalized score and the character offsets to highlight in its title and
//! subtitle. Built for pickers that re-rank a few hundred to a few thousand
//! entries on every keystroke.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   fuzzy      │────▶│   scoring    │────▶│   search     │
//! │ (Matcher,    │     │ (normalize,  │     │ (Ranker,     │
//! │  PathMatcher)│     │  ordering)   │     │  rank)       │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────┐                        ┌──────────────┐
//! │   config     │                        │   verify     │
//! │ (RankConfig) │                        │ (invariants) │
//! └──────────────┘                        └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzzrank::{rank, MatchResult};
//!
//! struct Branch { name: String, remote: String }
//!
//! let branches = vec![
//!     Branch { name: "main".into(), remote: "origin".into() },
//!     Branch { name: "feature/ranked-search".into(), remote: "origin".into() },
//!     Branch { name: "fix-search-crash".into(), remote: "upstream".into() },
//! ];
//!
//! let results: Vec<MatchResult<'_, Branch>> =
//!     rank("srch", &branches, |b| [b.name.as_str(), b.remote.as_str()]);
//!
//! assert_eq!(results.len(), 2);
//! assert!(results.iter().all(|r| !r.matches.primary.is_empty()));
//! ```
//!
//! # Guarantees
//!
//! - Scores are deterministic; a single-field item equal to the query scores `1.0`.
//! - Items whose title and subtitle both fail to match never appear.
//! - Output is sorted by descending score; ties keep input order.
//! - The pipeline holds no state between calls and never mutates candidates.

pub mod config;
pub mod fuzzy;
pub mod scoring;
mod search;
#[doc(hidden)]
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use config::{ConfigError, MatcherKind, RankConfig};
pub use fuzzy::{Alignment, MatchOptions, Matcher, PathMatcher};
#[cfg(feature = "skim")]
pub use fuzzy::SkimMatcher;
pub use scoring::ranking::compare_results;
pub use scoring::{normalize, reference_score, Normalization};
pub use search::{rank, rank_with, Ranker};
pub use types::{FieldMatches, MatchResult};
pub use verify::{verify_results, InvariantError};
