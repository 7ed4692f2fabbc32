//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides a deterministic stub matcher and candidate fixtures so ranking
//! behaviour can be tested apart from any real matcher's tuning.

#![doc(hidden)]

use crate::fuzzy::{MatchOptions, Matcher};

/// Stub primitive: matches iff the query is a case-insensitive substring.
///
/// Score is the query's character count; positions are the first occurrence.
/// Options are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn score(&self, text: &str, query: &str, options: &MatchOptions) -> f64 {
        if self.positions(text, query, options).is_empty() {
            0.0
        } else {
            query.chars().count() as f64
        }
    }

    fn positions(&self, text: &str, query: &str, _options: &MatchOptions) -> Vec<usize> {
        let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
        let text: Vec<char> = text.chars().map(fold).collect();
        let query: Vec<char> = query.chars().map(fold).collect();
        if query.is_empty() || query.len() > text.len() {
            return Vec::new();
        }
        text.windows(query.len())
            .position(|w| w == query.as_slice())
            .map(|start| (start..start + query.len()).collect())
            .unwrap_or_default()
    }
}

/// A repository-shaped candidate: name plus optional owner/subtitle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Repo {
    pub name: String,
    pub owner: Option<String>,
}

impl Repo {
    /// The key function used throughout the tests: `[name, owner]`.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(owner) = &self.owner {
            fields.push(owner.as_str());
        }
        fields
    }
}

/// Create a single-field candidate.
pub fn make_repo(name: &str) -> Repo {
    Repo {
        name: name.to_string(),
        owner: None,
    }
}

/// Create a two-field candidate.
pub fn make_repo_with_owner(name: &str, owner: &str) -> Repo {
    Repo {
        name: name.to_string(),
        owner: Some(owner.to_string()),
    }
}
