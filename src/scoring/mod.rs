// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ordering: how match results get their numbers and their place.
//!
//! Raw matcher scores grow with query and text length in ways that depend on
//! the matcher. Dividing by a self-match reference puts every query on the same
//! scale, where `1.0` means "as good as the query matching itself".

mod core;
pub mod ranking;

pub use self::core::*;
