//! Configuration loading tests.

use fuzzrank::{ConfigError, MatcherKind, Normalization, RankConfig, Ranker};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_temp(r#"{"matcher": "path", "normalization": "combined", "limit": 3}"#);
    let config = RankConfig::from_path(file.path()).unwrap();

    assert_eq!(config.matcher, MatcherKind::Path);
    assert_eq!(config.normalization, Normalization::Combined);
    assert_eq!(config.limit, Some(3));
    assert!(config.options.allow_errors);
}

#[test]
fn test_invalid_json_reports_parse_error() {
    let file = write_temp("{ not json");
    let err = RankConfig::from_path(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_unknown_matcher_rejected() {
    let err = RankConfig::from_json_str(r#"{"matcher": "levenshtein"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_whitespace_separator_rejected() {
    let err = RankConfig::from_json_str(r#"{"options": {"separator": " "}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSeparator(' ')));
}

#[test]
fn test_config_round_trips_through_serde() {
    let config = RankConfig::from_json_str(r#"{"options": {"separator": "/"}, "limit": 10}"#).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"isPathLike\":true"));
    assert_eq!(RankConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_combined_config_keeps_scores_bounded() {
    let config = RankConfig::from_json_str(r#"{"normalization": "combined"}"#).unwrap();
    let ranker = Ranker::from_config(&config).unwrap();
    let candidates = [["feature", "fuzzy-search"], ["fix", "search-crash"]];
    let results = ranker.rank("srch", &candidates, |c| *c);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.score > 0.0 && r.score <= 1.0));
}
