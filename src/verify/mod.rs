// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: result invariants, checked two ways.
//!
//! 1. [`verify_results`] returns an [`InvariantError`] naming the first
//!    violation. Tests, the fuzz target and the CLI's `--verify` flag use it.
//!
//! 2. [`contracts`] wraps the same checks in `debug_assert!`. The pipeline
//!    calls them after every ranking, so debug builds fail loudly and release
//!    builds pay nothing.

mod types;
pub mod contracts;

pub use types::*;
