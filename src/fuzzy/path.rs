// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Path-aware subsequence alignment.
//!
//! Finds the alignment of the query's characters inside the text that collects
//! the most bonus: runs of consecutive characters, characters that start a
//! word or a `separator`-delimited segment, camelCase humps, and (for
//! path-like text) characters in the last segment. The alignment is a classic
//! O(query × text) dynamic program with a running prefix maximum for the
//! non-consecutive transition, so there is no quadratic inner scan.
//!
//! # Self-match dominance
//!
//! Every per-character contribution is positive and every bonus is attached to
//! a text position, not to the query. Matching a text against itself collects
//! every position bonus, the full consecutive run, the exact-case bonus on every
//! character and a length factor of 1. No other query can do better:
//!
//! ```text
//! score(s, q) <= score(s, s)    for all q
//! ```
//!
//! This is what makes `score(q, q)` a sound normalization reference.

use super::{MatchOptions, Matcher};

/// Base contribution of one matched character.
pub const MATCH_SCORE: f64 = 1.0;

/// Extra for a character matched right after the previous query character.
pub const CONSECUTIVE_BONUS: f64 = 1.0;

/// Character at offset 0.
pub const START_BONUS: f64 = 1.0;

/// Character right after the configured separator (path-like text only).
pub const SEGMENT_BONUS: f64 = 0.9;

/// Character right after whitespace or common punctuation.
pub const WORD_BONUS: f64 = 0.8;

/// Uppercase character right after a lowercase one (acronym start).
pub const CAMEL_BONUS: f64 = 0.7;

/// Query character equals the text character without case folding.
pub const EXACT_CASE_BONUS: f64 = 0.1;

/// Character inside the last separator-delimited segment (path-like text only).
pub const TAIL_SEGMENT_BONUS: f64 = 0.5;

/// Per unmatched text character in the length factor.
pub const LENGTH_PENALTY: f64 = 0.05;

/// Multiplier applied when one query character had to be dropped.
pub const TYPO_PENALTY: f64 = 0.5;

/// Shortest query that may drop a character under `allow_errors`.
///
/// Below this, dropping a character leaves too little to mean anything.
pub const MIN_TYPO_QUERY_LEN: usize = 3;

/// Built-in matcher used by [`crate::Ranker::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathMatcher;

/// The winning alignment: its raw score and the matched character offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub score: f64,
    pub positions: Vec<usize>,
}

impl PathMatcher {
    /// Best alignment of `query` inside `text`, or `None` if there is none.
    pub fn align(&self, text: &str, query: &str, options: &MatchOptions) -> Option<Alignment> {
        if query.is_empty() || text.is_empty() {
            return None;
        }

        let text: Vec<char> = text.chars().collect();
        let query: Vec<char> = query.chars().collect();
        let bonuses = position_bonuses(&text, options);

        if let Some((sum, positions)) = best_alignment(&text, &query, &bonuses) {
            let score = length_adjusted(sum, positions.len(), text.len());
            return Some(Alignment { score, positions });
        }

        if !options.allow_errors || query.len() < MIN_TYPO_QUERY_LEN {
            return None;
        }

        // One typo: drop each query character in turn and keep the best.
        // Strict comparison keeps the lowest dropped index on ties.
        let mut best: Option<Alignment> = None;
        let mut reduced = Vec::with_capacity(query.len() - 1);
        for skip in 0..query.len() {
            reduced.clear();
            reduced.extend(
                query
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &c)| c),
            );

            let Some((sum, positions)) = best_alignment(&text, &reduced, &bonuses) else {
                continue;
            };
            let score = length_adjusted(sum, positions.len(), text.len()) * TYPO_PENALTY;
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Alignment { score, positions });
            }
        }
        best
    }
}

impl Matcher for PathMatcher {
    fn score(&self, text: &str, query: &str, options: &MatchOptions) -> f64 {
        self.align(text, query, options).map_or(0.0, |a| a.score)
    }

    fn positions(&self, text: &str, query: &str, options: &MatchOptions) -> Vec<usize> {
        self.align(text, query, options)
            .map(|a| a.positions)
            .unwrap_or_default()
    }

    fn score_with_positions(
        &self,
        text: &str,
        query: &str,
        options: &MatchOptions,
    ) -> (f64, Vec<usize>) {
        match self.align(text, query, options) {
            Some(Alignment { score, positions }) => (score, positions),
            None => (0.0, Vec::new()),
        }
    }

    /// Linear time. Against itself the only alignment puts every character
    /// on its own offset, so there is no table to fill.
    fn self_score(&self, text: &str, options: &MatchOptions) -> f64 {
        let text: Vec<char> = text.chars().collect();
        if text.is_empty() {
            return 0.0;
        }
        let bonuses = position_bonuses(&text, options);
        let sum = identity_sum(&bonuses);
        length_adjusted(sum, text.len(), text.len())
    }
}

/// One-to-one case folding, so folded offsets stay aligned with the original.
#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '-' | '.' | '/' | '\\' | ':')
}

/// Query-independent bonus for matching at each text position.
fn position_bonuses(text: &[char], options: &MatchOptions) -> Vec<f64> {
    let tail_start = if options.is_path_like {
        text.iter()
            .rposition(|&c| c == options.separator)
            .map_or(0, |i| i + 1)
    } else {
        0
    };

    (0..text.len())
        .map(|j| {
            let boundary = if j == 0 {
                START_BONUS
            } else {
                let prev = text[j - 1];
                let cur = text[j];
                if options.is_path_like && prev == options.separator {
                    SEGMENT_BONUS
                } else if is_word_separator(prev) {
                    WORD_BONUS
                } else if prev.is_lowercase() && cur.is_uppercase() {
                    CAMEL_BONUS
                } else {
                    0.0
                }
            };
            let tail = if tail_start > 0 && j >= tail_start {
                TAIL_SEGMENT_BONUS
            } else {
                0.0
            };
            boundary + tail
        })
        .collect()
}

/// Shorter texts around the same matched characters score higher.
#[inline]
fn length_adjusted(sum: f64, matched: usize, text_len: usize) -> f64 {
    let unmatched = text_len.saturating_sub(matched) as f64;
    sum / (1.0 + LENGTH_PENALTY * unmatched)
}

/// Sum of the identity alignment: every character matched in place, exact
/// case, each step after the first consecutive.
///
/// Accumulates in the same order as [`best_alignment`] so the two agree to
/// the bit.
fn identity_sum(bonuses: &[f64]) -> f64 {
    let contribution = |j: usize| MATCH_SCORE + bonuses[j] + EXACT_CASE_BONUS;
    let mut sum = contribution(0);
    for j in 1..bonuses.len() {
        sum = (sum + CONSECUTIVE_BONUS) + contribution(j);
    }
    sum
}

/// Maximum-bonus alignment of every query character, in order.
///
/// `best[i][j]` is the best sum for `query[..=i]` with `query[i]` placed at
/// `text[j]`. A cell is reached either consecutively from `best[i-1][j-1]` or
/// from the best `best[i-1][k]` with `k < j - 1`. Ties prefer the consecutive
/// step, then the earliest `k`.
fn best_alignment(text: &[char], query: &[char], bonuses: &[f64]) -> Option<(f64, Vec<usize>)> {
    let m = query.len();
    let n = text.len();
    if m == 0 || m > n {
        return None;
    }

    let folded: Vec<char> = text.iter().map(|&c| fold(c)).collect();
    let mut best: Vec<Option<f64>> = vec![None; m * n];
    let mut from: Vec<usize> = vec![0; m * n];

    let contribution = |i: usize, j: usize| {
        let case = if query[i] == text[j] {
            EXACT_CASE_BONUS
        } else {
            0.0
        };
        MATCH_SCORE + bonuses[j] + case
    };

    let first = fold(query[0]);
    for j in 0..n {
        if folded[j] == first {
            best[j] = Some(contribution(0, j));
        }
    }

    for i in 1..m {
        let qc = fold(query[i]);
        let prev_row = (i - 1) * n;
        let row = i * n;
        let mut gap_best: Option<(f64, usize)> = None;

        for j in i..n {
            if j >= 2 {
                if let Some(v) = best[prev_row + j - 2] {
                    if gap_best.map_or(true, |(g, _)| v > g) {
                        gap_best = Some((v, j - 2));
                    }
                }
            }

            if folded[j] != qc {
                continue;
            }

            let consecutive = best[prev_row + j - 1].map(|v| (v + CONSECUTIVE_BONUS, j - 1));
            let step = match (consecutive, gap_best) {
                (Some(c), Some(g)) => Some(if c.0 >= g.0 { c } else { g }),
                (c, g) => c.or(g),
            };

            if let Some((v, k)) = step {
                best[row + j] = Some(v + contribution(i, j));
                from[row + j] = k;
            }
        }
    }

    let last_row = (m - 1) * n;
    let mut end: Option<(f64, usize)> = None;
    for j in 0..n {
        if let Some(v) = best[last_row + j] {
            if end.map_or(true, |(e, _)| v > e) {
                end = Some((v, j));
            }
        }
    }
    let (sum, mut j) = end?;

    let mut positions = vec![0; m];
    positions[m - 1] = j;
    for i in (1..m).rev() {
        j = from[i * n + j];
        positions[i - 1] = j;
    }

    Some((sum, positions))
}
