// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the fuzzrank CLI.
//!
//! Two things get emphasis: the characters a query matched, and the score.
//! Matched runs are painted bold yellow and scores are colored by band. With
//! `NO_COLOR` set, or stdout not a terminal, matched runs are wrapped in
//! brackets instead so the offsets survive a pipe.

use std::sync::OnceLock;

const RESET: &str = "\x1b[0m";
const MATCHED: &str = "\x1b[1;33m";
const DIM: &str = "\x1b[2m";
const FAILURE: &str = "\x1b[1;31m";

/// Score bands, best first: lowest score in the band and its color.
const SCORE_BANDS: &[(f64, &str)] = &[(0.75, "\x1b[1;32m"), (0.5, "\x1b[32m"), (0.25, "\x1b[33m")];

/// Color for scores below every band.
const SCORE_FLOOR: &str = "\x1b[90m";

/// How output is marked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// ANSI colors for an interactive terminal.
    Ansi,
    /// Brackets around matched runs, no escape codes.
    Plain,
}

impl Style {
    /// Detected once per process.
    pub fn detect() -> Style {
        static STYLE: OnceLock<Style> = OnceLock::new();
        *STYLE.get_or_init(|| {
            if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
                Style::Plain
            } else {
                Style::Ansi
            }
        })
    }

    /// `text` with each run of matched characters marked.
    pub fn highlight(self, text: &str, positions: &[usize]) -> String {
        match self {
            Style::Ansi => mark_runs(text, positions, MATCHED, RESET),
            Style::Plain => mark_runs(text, positions, "[", "]"),
        }
    }

    /// Fixed-width score, colored by band.
    pub fn score(self, score: f64) -> String {
        let value = format!("{:>6.3}", score);
        match self {
            Style::Ansi => format!("{}{}{}", score_color(score), value, RESET),
            Style::Plain => value,
        }
    }

    pub fn dim(self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn failure(self, text: &str) -> String {
        self.paint(FAILURE, text)
    }

    fn paint(self, code: &str, text: &str) -> String {
        match self {
            Style::Ansi => format!("{}{}{}", code, text, RESET),
            Style::Plain => text.to_string(),
        }
    }
}

fn score_color(score: f64) -> &'static str {
    SCORE_BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map_or(SCORE_FLOOR, |&(_, color)| color)
}

/// Wrap each run of matched characters in `open` .. `close`.
///
/// `positions` are character offsets in ascending order; offsets past the end
/// of `text` are ignored.
fn mark_runs(text: &str, positions: &[usize], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + positions.len() * 8);
    let mut matched = positions.iter().peekable();
    let mut in_run = false;
    for (i, c) in text.chars().enumerate() {
        let hit = matched.peek() == Some(&&i);
        if hit {
            matched.next();
        }
        if hit && !in_run {
            out.push_str(open);
        } else if !hit && in_run {
            out.push_str(close);
        }
        in_run = hit;
        out.push(c);
    }
    if in_run {
        out.push_str(close);
    }
    out
}

/// One ranked result: `  1  0.912  title  · subtitle`.
pub fn result_line(
    style: Style,
    rank: usize,
    score: f64,
    title: (&str, &[usize]),
    subtitle: Option<(&str, &[usize])>,
) -> String {
    let mut line = format!(
        "{:>3} {} {}",
        rank,
        style.score(score),
        style.highlight(title.0, title.1)
    );
    if let Some((text, positions)) = subtitle {
        line.push_str(&style.dim("  · "));
        line.push_str(&style.highlight(text, positions));
    }
    line
}

/// One `label  value` line of the `score` report.
pub fn field_line(label: &str, value: &str) -> String {
    format!("{:<11}{}", label, value)
}
