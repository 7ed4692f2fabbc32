//! Multi-field candidate tests.
//!
//! Tests that:
//! - Title and subtitle offsets are reported separately, per field
//! - The score comes from the fields concatenated with no separator
//! - A match in either slot keeps the candidate
//! - Fields past the subtitle count toward the score but never keep a candidate

use super::common::{make_repo, make_repo_with_owner, rank_repos};
use fuzzrank::{normalize, rank, reference_score, MatchOptions, Matcher, PathMatcher};

#[test]
fn test_subtitle_only_match() {
    let repos = vec![make_repo_with_owner("Desktop", "github-desktop")];
    let results = rank_repos("ghd", &repos);

    assert_eq!(results.len(), 1);
    assert!(results[0].matches.primary.is_empty());
    assert_eq!(results[0].matches.secondary, vec![0, 3, 7]);
}

#[test]
fn test_score_uses_concatenated_fields() {
    let repos = vec![make_repo_with_owner("Desktop", "github-desktop")];
    let results = rank_repos("ghd", &repos);

    let options = MatchOptions::default();
    let raw = PathMatcher.score("Desktopgithub-desktop", "ghd", &options);
    let expected = normalize(raw, reference_score(&PathMatcher, "ghd", &options));
    assert!(expected > 0.0);
    assert_eq!(results[0].score, expected);
}

#[test]
fn test_both_slots_reported() {
    let repos = vec![make_repo_with_owner("desktop", "desktop")];
    let results = rank_repos("desk", &repos);

    assert_eq!(results[0].matches.primary, vec![0, 1, 2, 3]);
    assert_eq!(results[0].matches.secondary, vec![0, 1, 2, 3]);
}

#[test]
fn test_offsets_are_per_field_not_concatenated() {
    let repos = vec![make_repo_with_owner("linux", "torvalds")];
    let results = rank_repos("vald", &repos);

    assert_eq!(results.len(), 1);
    assert!(results[0].matches.primary.is_empty());
    // "vald" starts at offset 3 of "torvalds", not offset 8 of "linuxtorvalds".
    assert_eq!(results[0].matches.secondary, vec![3, 4, 5, 6]);
}

#[test]
fn test_missing_subtitle_is_empty_slot() {
    let repos = vec![make_repo("scratch")];
    let results = rank_repos("scr", &repos);

    assert_eq!(results[0].matches.primary, vec![0, 1, 2]);
    assert!(results[0].matches.secondary.is_empty());
}

#[test]
fn test_third_field_alone_does_not_keep_candidate() {
    let candidates = [["alpha", "beta", "desktop"]];
    assert!(rank("desktop", &candidates, |c| *c).is_empty());
}

#[test]
fn test_third_field_contributes_to_score() {
    let candidates = [["desk", "", "top"], ["desk", "", ""]];
    let results = rank("desk", &candidates, |c| *c);

    // Same title offsets, but "desktop" is a longer text to match in than "desk".
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].index, 1);
    assert_eq!(results[0].score, 1.0);
    assert!(results[1].score < 1.0);
    assert_eq!(results[0].matches, results[1].matches);
}

#[test]
fn test_owned_field_strings() {
    struct Pr {
        number: u32,
        title: String,
    }
    let prs = vec![
        Pr { number: 1234, title: "Fix crash on startup".into() },
        Pr { number: 99, title: "Add dark theme".into() },
    ];
    let results = rank("dark", &prs, |pr| vec![pr.title.clone(), format!("#{}", pr.number)]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.number, 99);
    assert_eq!(results[0].matches.primary, vec![4, 5, 6, 7]);
}
