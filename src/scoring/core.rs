// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization against a self-match reference.
//!
//! # Reference choice
//!
//! | Mode       | Divisor                          | Notes                           |
//! |------------|----------------------------------|---------------------------------|
//! | `Query`    | `score(query, query)`, once      | Default                         |
//! | `Combined` | `score(concat, concat)`, per item| Bounded by 1.0 for `PathMatcher`|
//!
//! `Query` divides a score computed against the concatenated fields by a
//! reference computed against the query alone. The two texts live on different
//! scales, so a long concatenation can land above or below 1.0 for reasons
//! unrelated to match quality. It stays the default for compatibility.

use crate::fuzzy::{MatchOptions, Matcher};
use serde::{Deserialize, Serialize};

/// Which self-match the combined score is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Normalization {
    /// Divide by the query matched against itself.
    #[default]
    Query,
    /// Divide by each candidate's concatenated text matched against itself.
    Combined,
}

/// The query matched against itself.
pub fn reference_score<M: Matcher + ?Sized>(matcher: &M, query: &str, options: &MatchOptions) -> f64 {
    matcher.self_score(query, options)
}

/// `raw / reference`, or `0.0` if the reference can't be divided by.
///
/// An empty query typically has a zero reference; this must produce `0.0`,
/// never NaN or infinity.
pub fn normalize(raw: f64, reference: f64) -> f64 {
    if !reference.is_finite() || reference <= 0.0 || !raw.is_finite() {
        return 0.0;
    }
    raw / reference
}
