// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranked output.
//!
//! Zero-cost in release builds (`debug_assert!`). In debug builds a violated
//! invariant panics right where the list was produced instead of surfacing as
//! a flickering result list somewhere in the UI.

use super::verify_results;
use crate::fuzzy::{MatchOptions, Matcher};
use crate::types::MatchResult;

/// Check a ranked list. Panics in debug builds on the first violation.
#[inline]
pub fn check_results<T>(results: &[MatchResult<'_, T>]) {
    if cfg!(debug_assertions) {
        if let Err(e) = verify_results(results) {
            panic!("Contract violation: {}", e);
        }
    }
}

/// Check that a matcher's two answers agree for one (text, query) pair.
///
/// An empty offset list exactly when the score is zero, offsets strictly
/// increasing and within the text.
#[inline]
pub fn check_matcher_agreement<M: Matcher + ?Sized>(
    matcher: &M,
    text: &str,
    query: &str,
    options: &MatchOptions,
) {
    if !cfg!(debug_assertions) {
        return;
    }
    let (score, positions) = matcher.score_with_positions(text, query, options);
    debug_assert!(
        score.is_finite() && score >= 0.0,
        "Contract violation: score {} for {:?} / {:?} is not a finite non-negative number",
        score,
        text,
        query
    );
    debug_assert_eq!(
        score == 0.0,
        positions.is_empty(),
        "Contract violation: score {} disagrees with positions {:?} for {:?} / {:?}",
        score,
        positions,
        text,
        query
    );
    let len = text.chars().count();
    debug_assert!(
        positions.windows(2).all(|w| w[0] < w[1]) && positions.iter().all(|&p| p < len),
        "Contract violation: positions {:?} are not strictly increasing offsets into {:?}",
        positions,
        text
    );
}
