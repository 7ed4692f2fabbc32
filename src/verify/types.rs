// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariants every ranked result list satisfies.
//!
//! | Invariant        | Meaning                                                   |
//! |------------------|-----------------------------------------------------------|
//! | finite scores    | no NaN or infinity, even for an empty query               |
//! | ordering         | `results[i].score >= results[i + 1].score`                |
//! | stable ties      | equal scores keep input order (`index` ascending)         |
//! | non-empty        | primary or secondary matched at least one character       |
//! | sorted offsets   | offsets within each slot strictly increase                |

use crate::types::MatchResult;
use std::fmt;

/// Which field slot an offset list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Secondary,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Primary => f.write_str("primary"),
            Slot::Secondary => f.write_str("secondary"),
        }
    }
}

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// A score is NaN or infinite.
    NonFiniteScore { position: usize, score: f64 },
    /// A result scores higher than the one before it.
    UnorderedScores {
        position: usize,
        previous: f64,
        score: f64,
    },
    /// Two equal scores appear in the opposite order to their input.
    UnstableTie {
        position: usize,
        previous_index: usize,
        index: usize,
    },
    /// Neither slot matched anything, so the result should have been filtered.
    EmptyMatches { position: usize },
    /// An offset list is not strictly increasing.
    UnsortedOffsets { position: usize, slot: Slot },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::NonFiniteScore { position, score } => {
                write!(f, "result {} has non-finite score {}", position, score)
            }
            InvariantError::UnorderedScores {
                position,
                previous,
                score,
            } => {
                write!(
                    f,
                    "result {} scores {} after a result scoring {}",
                    position, score, previous
                )
            }
            InvariantError::UnstableTie {
                position,
                previous_index,
                index,
            } => {
                write!(
                    f,
                    "result {} (input {}) tied with input {} but was placed after it",
                    position, index, previous_index
                )
            }
            InvariantError::EmptyMatches { position } => {
                write!(f, "result {} matched no characters", position)
            }
            InvariantError::UnsortedOffsets { position, slot } => {
                write!(
                    f,
                    "result {} has {} offsets out of order",
                    position, slot
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

fn strictly_increasing(offsets: &[usize]) -> bool {
    offsets.windows(2).all(|w| w[0] < w[1])
}

/// Check a ranked list against every invariant, reporting the first violation.
pub fn verify_results<T>(results: &[MatchResult<'_, T>]) -> Result<(), InvariantError> {
    for (position, result) in results.iter().enumerate() {
        if !result.score.is_finite() {
            return Err(InvariantError::NonFiniteScore {
                position,
                score: result.score,
            });
        }

        if result.matches.is_empty() {
            return Err(InvariantError::EmptyMatches { position });
        }

        if !strictly_increasing(&result.matches.primary) {
            return Err(InvariantError::UnsortedOffsets {
                position,
                slot: Slot::Primary,
            });
        }
        if !strictly_increasing(&result.matches.secondary) {
            return Err(InvariantError::UnsortedOffsets {
                position,
                slot: Slot::Secondary,
            });
        }

        if position == 0 {
            continue;
        }
        let previous = &results[position - 1];
        if result.score > previous.score {
            return Err(InvariantError::UnorderedScores {
                position,
                previous: previous.score,
                score: result.score,
            });
        }
        if result.score == previous.score && result.index < previous.index {
            return Err(InvariantError::UnstableTie {
                position,
                previous_index: previous.index,
                index: result.index,
            });
        }
    }
    Ok(())
}
