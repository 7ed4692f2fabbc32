// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: where a query meets a candidate list.
//!
//! One call per keystroke. Compute the reference once, run the matcher over
//! every candidate's fields, drop anything that matched nothing, stable-sort
//! the rest by score. No state survives the call.
//!
//! ```text
//! query ──▶ reference = score(query, query)
//!             │
//! candidates ─┼─▶ key_fn ─▶ [title, subtitle, ..]
//!             │               │            │
//!             │     positions per field   score(title ++ subtitle ++ ..)
//!             │               │            │
//!             └──────────▶ MatchResult { score / reference, matches }
//!                             │
//!                    filter empty ─▶ stable sort desc
//! ```

mod ranker;

pub use ranker::Ranker;

use crate::fuzzy::{MatchOptions, Matcher};
use crate::types::MatchResult;

/// Rank `candidates` against `query` with the default [`Ranker`].
///
/// `key_fn` maps each candidate to its text fields, primary first.
///
/// # Example
///
/// ```
/// let repos = ["desktop/desktop", "desktop/dugite", "octocat/hello-world"];
/// let results = fuzzrank::rank("dug", &repos, |r| [*r]);
/// assert_eq!(*results[0].item, "desktop/dugite");
/// ```
pub fn rank<'a, T, F, K, S>(query: &str, candidates: &'a [T], key_fn: F) -> Vec<MatchResult<'a, T>>
where
    F: Fn(&'a T) -> K,
    K: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ranker::default().rank(query, candidates, key_fn)
}

/// Rank with an explicit matcher and options, keeping the default normalization.
pub fn rank_with<'a, M, T, F, K, S>(
    matcher: M,
    options: MatchOptions,
    query: &str,
    candidates: &'a [T],
    key_fn: F,
) -> Vec<MatchResult<'a, T>>
where
    M: Matcher,
    F: Fn(&'a T) -> K,
    K: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ranker::new(matcher)
        .with_options(options)
        .rank(query, candidates, key_fn)
}
