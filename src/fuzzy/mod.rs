// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matching primitive: one string against one query.
//!
//! The ranking pipeline never looks inside a matcher. It needs two answers per
//! (text, query) pair: how good is the match, and which characters lined up.
//! Anything that can answer both consistently can be plugged in.
//!
//! Two implementations ship here: [`PathMatcher`], an in-house subsequence
//! aligner tuned for identifiers like `github-desktop`, and (behind the `skim`
//! feature) [`SkimMatcher`], an adapter over the `fuzzy-matcher` crate.
//!
//! # Contract
//!
//! | Property                 | Requirement                                        |
//! |--------------------------|----------------------------------------------------|
//! | Range                    | `score >= 0`, and `0` means "no match"             |
//! | Agreement                | `positions` is empty exactly when `score == 0`     |
//! | Offsets                  | character offsets into `text`, strictly increasing |
//! | Self-match               | `score(s, s)` is the best score `s` can receive    |
//! | Purity                   | same inputs, same outputs                          |
//!
//! Callers must not rely on empty-query behaviour beyond "no crash". Every
//! built-in returns `(0.0, [])` for it.

mod path;
#[cfg(feature = "skim")]
mod skim;

pub use path::*;
#[cfg(feature = "skim")]
pub use skim::SkimMatcher;

use serde::{Deserialize, Serialize};

/// Fixed matcher configuration, passed explicitly into every call.
///
/// The defaults suit repository and branch pickers: typo tolerance on,
/// and `-` treated as a segment separator so `gh-desk` lines up with
/// `github-desktop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchOptions {
    /// Tolerate one dropped query character when no exact alignment exists.
    pub allow_errors: bool,
    /// Boost characters that start a `separator`-delimited segment.
    pub is_path_like: bool,
    /// Segment separator used when `is_path_like` is set.
    pub separator: char,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            allow_errors: true,
            is_path_like: true,
            separator: '-',
        }
    }
}

/// A fuzzy-matching primitive.
///
/// `score` and `positions` must agree with each other: an empty position list
/// exactly when the score is zero. Implementations that compute both in one
/// pass should override [`Matcher::score_with_positions`].
pub trait Matcher {
    /// Raw affinity between `text` and `query`. Zero means no match.
    fn score(&self, text: &str, query: &str, options: &MatchOptions) -> f64;

    /// Character offsets of one valid alignment of `query` inside `text`.
    fn positions(&self, text: &str, query: &str, options: &MatchOptions) -> Vec<usize>;

    /// Both answers at once.
    fn score_with_positions(
        &self,
        text: &str,
        query: &str,
        options: &MatchOptions,
    ) -> (f64, Vec<usize>) {
        (
            self.score(text, query, options),
            self.positions(text, query, options),
        )
    }

    /// `text` matched against itself. Must equal `score(text, text, options)`.
    ///
    /// Used as a normalization reference, so matchers with a cheaper way to
    /// compute it than a full alignment should override this.
    fn self_score(&self, text: &str, options: &MatchOptions) -> f64 {
        self.score(text, text, options)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn score(&self, text: &str, query: &str, options: &MatchOptions) -> f64 {
        (**self).score(text, query, options)
    }

    fn positions(&self, text: &str, query: &str, options: &MatchOptions) -> Vec<usize> {
        (**self).positions(text, query, options)
    }

    fn score_with_positions(
        &self,
        text: &str,
        query: &str,
        options: &MatchOptions,
    ) -> (f64, Vec<usize>) {
        (**self).score_with_positions(text, query, options)
    }

    fn self_score(&self, text: &str, options: &MatchOptions) -> f64 {
        (**self).self_score(text, options)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn score(&self, text: &str, query: &str, options: &MatchOptions) -> f64 {
        (**self).score(text, query, options)
    }

    fn positions(&self, text: &str, query: &str, options: &MatchOptions) -> Vec<usize> {
        (**self).positions(text, query, options)
    }

    fn score_with_positions(
        &self,
        text: &str,
        query: &str,
        options: &MatchOptions,
    ) -> (f64, Vec<usize>) {
        (**self).score_with_positions(text, query, options)
    }

    fn self_score(&self, text: &str, options: &MatchOptions) -> f64 {
        (**self).self_score(text, options)
    }
}
