// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! [`Ranker`]: a matcher plus its fixed configuration.

use std::convert::Infallible;

use crate::config::RankConfig;
use crate::fuzzy::{MatchOptions, Matcher, PathMatcher};
use crate::scoring::ranking::sort_results;
use crate::scoring::{normalize, reference_score, Normalization};
use crate::types::{FieldMatches, MatchResult};
use crate::verify::contracts::check_results;

/// Ranks candidate lists with one matcher and one configuration.
///
/// Cheap to keep around and reuse across keystrokes; it holds no per-query
/// state, so one instance can serve several threads at once.
#[derive(Debug, Clone)]
pub struct Ranker<M = PathMatcher> {
    matcher: M,
    options: MatchOptions,
    normalization: Normalization,
}

impl Default for Ranker {
    fn default() -> Self {
        Ranker::new(PathMatcher)
    }
}

impl<M: Matcher> Ranker<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            options: MatchOptions::default(),
            normalization: Normalization::default(),
        }
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Rank `candidates` against `query`, best first.
    ///
    /// Candidates whose title and subtitle both fail to match are dropped.
    /// Equal scores keep their input order.
    pub fn rank<'a, T, F, K, S>(
        &self,
        query: &str,
        candidates: &'a [T],
        key_fn: F,
    ) -> Vec<MatchResult<'a, T>>
    where
        F: Fn(&'a T) -> K,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.try_rank(query, candidates, |item| Ok::<K, Infallible>(key_fn(item))) {
            Ok(results) => results,
            Err(never) => match never {},
        }
    }

    /// Like [`Ranker::rank`], keeping only the best `limit` results.
    pub fn rank_top<'a, T, F, K, S>(
        &self,
        query: &str,
        candidates: &'a [T],
        key_fn: F,
        limit: usize,
    ) -> Vec<MatchResult<'a, T>>
    where
        F: Fn(&'a T) -> K,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = self.rank(query, candidates, key_fn);
        results.truncate(limit);
        results
    }

    /// Rank with a fallible key function.
    ///
    /// The first error aborts the whole call and is returned as-is. Nothing is
    /// partially ranked and no candidate is skipped.
    pub fn try_rank<'a, T, F, K, S, E>(
        &self,
        query: &str,
        candidates: &'a [T],
        key_fn: F,
    ) -> Result<Vec<MatchResult<'a, T>>, E>
    where
        F: Fn(&'a T) -> Result<K, E>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "rank",
            query_len = query.chars().count(),
            candidates = candidates.len()
        )
        .entered();

        // Only needed for query normalization; combined mode has one per candidate.
        let reference = match self.normalization {
            Normalization::Query => reference_score(&self.matcher, query, &self.options),
            Normalization::Combined => 0.0,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(reference, normalization = ?self.normalization, "reference score");

        let mut results = Vec::new();
        for (index, item) in candidates.iter().enumerate() {
            let fields = key_fn(item)?;
            if let Some(result) = self.match_candidate(query, reference, index, item, fields) {
                results.push(result);
            }
        }

        sort_results(&mut results);
        check_results(&results);

        #[cfg(feature = "tracing")]
        tracing::debug!(matched = results.len(), "ranked candidates");

        Ok(results)
    }

    /// Score one candidate, or `None` if neither slot matched.
    fn match_candidate<'a, T, K, S>(
        &self,
        query: &str,
        reference: f64,
        index: usize,
        item: &'a T,
        fields: K,
    ) -> Option<MatchResult<'a, T>>
    where
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matches = FieldMatches::default();
        let mut combined = String::new();

        for (slot, field) in fields.into_iter().enumerate() {
            let text = field.as_ref();
            match slot {
                0 => matches.primary = self.matcher.positions(text, query, &self.options),
                1 => matches.secondary = self.matcher.positions(text, query, &self.options),
                _ => {}
            }
            // No separator: the matcher sees title and subtitle as one reading.
            combined.push_str(text);
        }

        if matches.is_empty() {
            return None;
        }

        let raw = self.matcher.score(&combined, query, &self.options);
        let reference = match self.normalization {
            Normalization::Query => reference,
            Normalization::Combined => self.matcher.self_score(&combined, &self.options),
        };

        Some(MatchResult {
            score: normalize(raw, reference),
            item,
            index,
            matches,
        })
    }
}

impl Ranker<Box<dyn Matcher>> {
    /// Build a ranker from a loaded configuration.
    pub fn from_config(config: &RankConfig) -> Result<Self, crate::config::ConfigError> {
        let matcher = config.build_matcher()?;
        Ok(Ranker::new(matcher)
            .with_options(config.options)
            .with_normalization(config.normalization))
    }
}
