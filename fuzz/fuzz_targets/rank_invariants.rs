// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranked output invariants.
//!
//! Whatever the query and candidates, the output must verify: finite scores,
//! descending order, stable ties, no empty matches, sorted offsets. Ranking
//! twice must give the same list.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{verify_results, MatchOptions, Normalization, PathMatcher, Ranker, SkimMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    candidates: Vec<Vec<String>>,
    allow_errors: bool,
    is_path_like: bool,
    combined: bool,
    skim: bool,
}

fn key(fields: &Vec<String>) -> Vec<&str> {
    fields.iter().map(String::as_str).collect()
}

/// Keep inputs small enough that each run stays fast.
fn cap(s: &str) -> String {
    s.chars().take(64).collect()
}

fuzz_target!(|input: Input| {
    let query = cap(&input.query);
    let candidates: Vec<Vec<String>> = input
        .candidates
        .iter()
        .take(64)
        .map(|fields| fields.iter().take(4).map(|f| cap(f)).collect())
        .collect();

    let options = MatchOptions {
        allow_errors: input.allow_errors,
        is_path_like: input.is_path_like,
        ..MatchOptions::default()
    };
    let normalization = if input.combined {
        Normalization::Combined
    } else {
        Normalization::Query
    };

    let (first, second) = if input.skim {
        let ranker = Ranker::new(SkimMatcher::new())
            .with_options(options)
            .with_normalization(normalization);
        (
            ranker.rank(&query, &candidates, key),
            ranker.rank(&query, &candidates, key),
        )
    } else {
        let ranker = Ranker::new(PathMatcher)
            .with_options(options)
            .with_normalization(normalization);
        (
            ranker.rank(&query, &candidates, key),
            ranker.rank(&query, &candidates, key),
        )
    };

    // INVARIANT 1: Output verifies
    if let Err(e) = verify_results(&first) {
        panic!("invariant violated for {:?}: {}", query, e);
    }

    // INVARIANT 2: Ranking is deterministic
    assert_eq!(first, second, "ranking not deterministic for {:?}", query);

    // INVARIANT 3: Combined normalization stays within (0, 1] for the path matcher
    if input.combined && !input.skim {
        for result in &first {
            assert!(
                result.score > 0.0 && result.score <= 1.0,
                "combined score {} out of range",
                result.score
            );
        }
    }
});
