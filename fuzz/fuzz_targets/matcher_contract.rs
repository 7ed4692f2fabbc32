// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the path matcher's contract.
//!
//! Score and positions must agree, positions must be strictly increasing char
//! offsets into the text, and no query may outscore the text matched against
//! itself.

#![no_main]

use fuzzrank::verify::contracts::check_matcher_agreement;
use fuzzrank::{MatchOptions, Matcher, PathMatcher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String, bool)| {
    let (text, query, allow_errors) = data;
    let text: String = text.chars().take(128).collect();
    let query: String = query.chars().take(32).collect();
    let options = MatchOptions {
        allow_errors,
        ..MatchOptions::default()
    };

    check_matcher_agreement(&PathMatcher, &text, &query, &options);

    let (score, positions) = PathMatcher.score_with_positions(&text, &query, &options);
    assert!(score.is_finite() && score >= 0.0, "score {}", score);
    assert_eq!(score == 0.0, positions.is_empty());
    let len = text.chars().count();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(positions.iter().all(|&p| p < len));

    let best = PathMatcher.score(&text, &text, &options);
    assert!(score <= best, "{:?} beat {:?} matched against itself", query, text);
});
