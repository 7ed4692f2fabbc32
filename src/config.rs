// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration: which matcher, which options, which reference.
//!
//! Loaded from JSON (camelCase keys, every field optional):
//!
//! ```json
//! {
//!   "matcher": "path",
//!   "options": { "allowErrors": true, "isPathLike": true, "separator": "-" },
//!   "normalization": "query",
//!   "limit": 20
//! }
//! ```
//!
//! The configuration is read once and then treated as immutable. Nothing here
//! is global: each [`crate::Ranker`] owns its own copy.

use crate::fuzzy::{MatchOptions, Matcher, PathMatcher};
use crate::scoring::Normalization;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Available matching primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatcherKind {
    #[default]
    Path,
    Skim,
}

impl MatcherKind {
    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::Path => "path",
            MatcherKind::Skim => "skim",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RankConfig {
    pub matcher: MatcherKind,
    pub options: MatchOptions,
    pub normalization: Normalization,
    /// Keep at most this many results. `None` keeps everything.
    pub limit: Option<usize>,
}

/// Error type for configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The config text is not valid JSON for [`RankConfig`].
    Parse(serde_json::Error),
    /// The separator would collide with ordinary query characters.
    InvalidSeparator(char),
    /// The matcher was compiled out.
    UnsupportedMatcher(MatcherKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path, source)
            }
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
            ConfigError::InvalidSeparator(c) => {
                write!(
                    f,
                    "separator {:?} must not be a letter, digit or whitespace",
                    c
                )
            }
            ConfigError::UnsupportedMatcher(kind) => {
                write!(
                    f,
                    "matcher '{}' is not available in this build",
                    kind.name()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl RankConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RankConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.options.separator;
        if sep.is_alphanumeric() || sep.is_whitespace() {
            return Err(ConfigError::InvalidSeparator(sep));
        }
        Ok(())
    }

    /// Instantiate the configured matcher.
    pub fn build_matcher(&self) -> Result<Box<dyn Matcher>, ConfigError> {
        match self.matcher {
            MatcherKind::Path => Ok(Box::new(PathMatcher)),
            #[cfg(feature = "skim")]
            MatcherKind::Skim => Ok(Box::new(crate::fuzzy::SkimMatcher::new())),
            #[cfg(not(feature = "skim"))]
            kind @ MatcherKind::Skim => Err(ConfigError::UnsupportedMatcher(kind)),
        }
    }
}
