// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `fuzzy-matcher`'s skim algorithm behind the [`Matcher`] contract.
//!
//! Skim has no notion of typo tolerance or path separators, so
//! [`MatchOptions`] is accepted and ignored. Skim scores can be zero or
//! negative for weak but valid matches; those are clamped to the smallest
//! positive score so the "zero means no match" rule still holds.

use super::{MatchOptions, Matcher};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Score assigned to a valid skim match whose native score is `<= 0`.
const MIN_MATCH_SCORE: f64 = 1.0;

pub struct SkimMatcher {
    inner: SkimMatcherV2,
}

impl SkimMatcher {
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Default for SkimMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SkimMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkimMatcher").finish_non_exhaustive()
    }
}

impl Matcher for SkimMatcher {
    fn score(&self, text: &str, query: &str, options: &MatchOptions) -> f64 {
        self.score_with_positions(text, query, options).0
    }

    fn positions(&self, text: &str, query: &str, options: &MatchOptions) -> Vec<usize> {
        self.score_with_positions(text, query, options).1
    }

    fn score_with_positions(
        &self,
        text: &str,
        query: &str,
        _options: &MatchOptions,
    ) -> (f64, Vec<usize>) {
        if query.is_empty() {
            return (0.0, Vec::new());
        }
        match self.inner.fuzzy_indices(text, query) {
            Some((score, positions)) if !positions.is_empty() => {
                ((score as f64).max(MIN_MATCH_SCORE), positions)
            }
            _ => (0.0, Vec::new()),
        }
    }
}
