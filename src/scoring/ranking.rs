// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Higher score first. Equal scores compare `Equal` on purpose: the pipeline
//! sorts with the stable `slice::sort_by`, so equal-scoring results keep their
//! input order. Callers that pre-sort alphabetically or group visually rely on
//! this to stop results jumping around between keystrokes.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Descending by score. Uses `total_cmp`, so the order is total even if a
/// matcher hands back something odd.
pub fn compare_results<T>(a: &MatchResult<'_, T>, b: &MatchResult<'_, T>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Stable in-place sort by [`compare_results`].
pub fn sort_results<T>(results: &mut [MatchResult<'_, T>]) {
    results.sort_by(compare_results);
}
