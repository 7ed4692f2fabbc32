//! Determinism and stability tests.
//!
//! Ranking the same input twice must give bit-identical output, equal scores
//! must keep their input order, and a failing key function must stop the call.

use super::common::{indices, make_repo, sample_branches, sample_repos, Repo, SubstringMatcher};
use fuzzrank::{rank, Ranker};

#[test]
fn test_repeated_calls_identical() {
    let repos = sample_repos();
    let ranker = Ranker::default();
    for query in ["d", "desk", "gt", "torv"] {
        let first = ranker.rank(query, &repos, Repo::fields);
        let second = ranker.rank(query, &repos, Repo::fields);
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[test]
fn test_ties_keep_input_order() {
    // The stub scores every match by query length, so all of these tie.
    let repos = vec![
        make_repo("xab"),
        make_repo("ab"),
        make_repo("cd"),
        make_repo("abab"),
        make_repo("zzab"),
    ];
    let results = Ranker::new(SubstringMatcher).rank("ab", &repos, Repo::fields);
    assert_eq!(indices(&results), vec![0, 1, 3, 4]);

    let reversed: Vec<Repo> = repos.iter().rev().cloned().collect();
    let results = Ranker::new(SubstringMatcher).rank("ab", &reversed, Repo::fields);
    let names: Vec<&str> = results.iter().map(|r| r.item.name.as_str()).collect();
    assert_eq!(names, vec!["zzab", "abab", "ab", "xab"]);
}

#[test]
fn test_identical_candidates_keep_input_order() {
    let branches = ["main", "main", "main"];
    let results = rank("mn", &branches, |b| [*b]);
    assert_eq!(indices(&results), vec![0, 1, 2]);
    assert!(results.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn test_candidates_unchanged() {
    let branches = sample_branches();
    let before = branches.clone();
    let _ = rank("feat", &branches, |b| [*b]);
    assert_eq!(branches, before);
}

#[test]
fn test_try_rank_stops_at_first_error() {
    let branches = sample_branches();
    let seen = std::cell::RefCell::new(Vec::new());
    let result = Ranker::default().try_rank("fix", &branches, |b| {
        seen.borrow_mut().push(*b);
        if b.starts_with("release") {
            Err(format!("no fields for {}", b))
        } else {
            Ok([*b])
        }
    });

    assert_eq!(result.unwrap_err(), "no fields for release-3.1");
    // "update-dependencies" and "feature/dark-theme" come after and are never keyed.
    assert_eq!(seen.borrow().len(), 4);
}

#[test]
fn test_try_rank_ok_matches_rank() {
    let branches = sample_branches();
    let ranker = Ranker::default();
    let fallible = ranker
        .try_rank("feat", &branches, |b| Ok::<_, String>([*b]))
        .unwrap();
    let infallible = ranker.rank("feat", &branches, |b| [*b]);
    assert_eq!(fallible, infallible);
}

#[test]
fn test_shared_ranker_across_threads() {
    let repos = sample_repos();
    let ranker = Ranker::default();
    let expected = ranker.rank("desk", &repos, Repo::fields);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ranker.rank("desk", &repos, Repo::fields)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
