//! Ranking order and scoring tests.
//!
//! Tests that:
//! - Matching candidates come back, non-matching ones do not
//! - Scores are normalized by the query's self-match
//! - Output is ordered by descending score
//! - Every way of building a ranker goes through the same pipeline

use super::common::{assert_descending, make_repo, names, rank_repos, sample_repos};
use fuzzrank::{rank, rank_with, MatchOptions, PathMatcher, RankConfig, Ranker};

// ============================================================================
// BASIC RANKING
// ============================================================================

#[test]
fn test_appl_keeps_apples_drops_banana() {
    let candidates = ["apple pie", "apple", "banana"];
    let results = rank("appl", &candidates, |c| [*c]);

    let items: Vec<&str> = results.iter().map(|r| *r.item).collect();
    assert_eq!(items, vec!["apple", "apple pie"]);
    assert_eq!(results[0].matches.primary, vec![0, 1, 2, 3]);
    assert_eq!(results[1].matches.primary, vec![0, 1, 2, 3]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_exact_single_field_match_scores_one() {
    let candidates = ["apple", "apple pie"];
    let results = rank("apple", &candidates, |c| [*c]);
    assert_eq!(*results[0].item, "apple");
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn test_scores_descending() {
    let repos = sample_repos();
    for query in ["d", "desk", "gh", "dt", "octo", "notes"] {
        let results = rank_repos(query, &repos);
        assert_descending(&results);
    }
}

#[test]
fn test_nothing_matches_unrelated_query() {
    let repos = sample_repos();
    assert!(rank_repos("zzq", &repos).is_empty());
}

#[test]
fn test_index_points_back_into_input() {
    let repos = sample_repos();
    for result in rank_repos("desk", &repos) {
        assert!(std::ptr::eq(result.item, &repos[result.index]));
    }
}

#[test]
fn test_desktop_repos_found() {
    let repos = sample_repos();
    let found = names(&rank_repos("desktop", &repos));
    assert!(found.contains(&"desktop".to_string()));
    assert!(found.contains(&"github-desktop".to_string()));
    assert!(found.contains(&"desktop-notes".to_string()));
    assert!(!found.contains(&"linux".to_string()));
}

// ============================================================================
// RANKER CONSTRUCTION
// ============================================================================

#[test]
fn test_free_function_matches_default_ranker() {
    let repos = sample_repos();
    let via_fn = rank("dt", &repos, |r| r.fields());
    let via_ranker = Ranker::default().rank("dt", &repos, |r| r.fields());
    assert_eq!(via_fn, via_ranker);
}

#[test]
fn test_rank_with_strict_options() {
    let candidates = ["apple"];
    let strict = MatchOptions {
        allow_errors: false,
        ..MatchOptions::default()
    };
    assert!(rank_with(PathMatcher, strict, "apxle", &candidates, |c| [*c]).is_empty());
    assert_eq!(rank("apxle", &candidates, |c| [*c]).len(), 1);
}

#[test]
fn test_ranker_from_config() {
    let config = RankConfig::from_json_str(r#"{"options": {"allowErrors": false}}"#).unwrap();
    let ranker = Ranker::from_config(&config).unwrap();
    let candidates = [make_repo("apple")];

    assert!(ranker.rank("apxle", &candidates, |r| r.fields()).is_empty());
    assert_eq!(ranker.rank("appl", &candidates, |r| r.fields()).len(), 1);
}

#[test]
fn test_config_limit_is_honored_by_rank_top() {
    let config = RankConfig::from_json_str(r#"{"limit": 2}"#).unwrap();
    let ranker = Ranker::from_config(&config).unwrap();
    let repos = sample_repos();
    let limit = config.limit.unwrap();

    let all = ranker.rank("d", &repos, |r| r.fields());
    let top = ranker.rank_top("d", &repos, |r| r.fields(), limit);
    assert!(all.len() > limit);
    assert_eq!(top.len(), limit);
    assert_eq!(top[..], all[..limit]);
}

#[cfg(feature = "skim")]
#[test]
fn test_skim_ranker() {
    use fuzzrank::SkimMatcher;

    let repos = sample_repos();
    let ranker = Ranker::new(SkimMatcher::new());
    let results = ranker.rank("desktop", &repos, |r| r.fields());

    assert!(!results.is_empty());
    assert_descending(&results);
    assert!(results.iter().all(|r| !r.matches.is_empty()));
    assert!(names(&results).contains(&"desktop".to_string()));
}
