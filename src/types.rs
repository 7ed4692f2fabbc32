// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types produced by the ranking pipeline.
//!
//! Everything here is transient: built during one `rank` call and handed back
//! to the caller. Candidates are borrowed, never cloned.

use serde::Serialize;

/// Matched character offsets for the two field slots surfaced to callers.
///
/// Offsets index the original field text in characters (not bytes, and not the
/// concatenated text), zero-based and strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldMatches {
    /// Offsets within field 0 (the title).
    pub primary: Vec<usize>,
    /// Offsets within field 1 (the subtitle). Empty if there is no field 1.
    pub secondary: Vec<usize>,
}

impl FieldMatches {
    /// Neither slot matched anything.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// One ranked candidate.
#[derive(Debug, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct MatchResult<'a, T> {
    /// Normalized relevance. Larger is better; `1.0` is "as good as the query
    /// matching itself".
    pub score: f64,
    /// The caller's candidate.
    pub item: &'a T,
    /// Position of `item` in the input slice.
    pub index: usize,
    /// Matched offsets in the title and subtitle.
    pub matches: FieldMatches,
}

// Manual impls: derives would demand `T: Clone` / `T: PartialEq` for a reference.
impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        Self {
            score: self.score,
            item: self.item,
            index: self.index,
            matches: self.matches.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for MatchResult<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.score.to_bits() == other.score.to_bits()
            && self.index == other.index
            && self.item == other.item
            && self.matches == other.matches
    }
}
