// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::Read;

use fuzzrank::{
    normalize, reference_score, verify_results, MatchResult, Matcher, Normalization, RankConfig,
    Ranker,
};

mod cli;
use cli::display::{self, Style};
use cli::{Cli, Commands, MatchArgs};

/// One candidate as it appears in the input JSON.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum Record {
    Text(String),
    Fields(Vec<String>),
    Titled {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
}

impl Record {
    fn fields(&self) -> Vec<&str> {
        match self {
            Record::Text(text) => vec![text.as_str()],
            Record::Fields(fields) => fields.iter().map(String::as_str).collect(),
            Record::Titled { title, subtitle } => {
                let mut fields = vec![title.as_str()];
                if let Some(subtitle) = subtitle {
                    fields.push(subtitle.as_str());
                }
                fields
            }
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Rank {
            query,
            input,
            limit,
            json,
            verify,
            matching,
        } => run_rank(&query, &input, limit, json, verify, &matching),
        Commands::Score {
            text,
            query,
            matching,
        } => run_score(&text, &query, &matching),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `FUZZRANK_LOG` (default: warnings only).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FUZZRANK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config file (if any) with flag overrides applied, validated.
fn load_config(matching: &MatchArgs) -> Result<RankConfig> {
    let mut config = match &matching.config {
        Some(path) => RankConfig::from_path(path)?,
        None => RankConfig::default(),
    };
    matching.apply(&mut config);
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn read_candidates(input: &str) -> Result<Vec<Record>> {
    let raw = if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read candidates from stdin")?;
        raw
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read candidates from {}", input))?
    };
    let records: Vec<Record> =
        serde_json::from_str(&raw).context("candidates must be a JSON array")?;
    tracing::info!(count = records.len(), "loaded candidates");
    Ok(records)
}

fn run_rank(
    query: &str,
    input: &str,
    limit: Option<usize>,
    json: bool,
    verify: bool,
    matching: &MatchArgs,
) -> Result<()> {
    let config = load_config(matching)?;
    let records = read_candidates(input)?;
    let ranker = Ranker::from_config(&config)?;

    let results = rank_records(&ranker, query, &records, limit.or(config.limit));
    if verify {
        verify_results(&results).context("ranked output violates an invariant")?;
    }

    if json {
        let out = serde_json::to_string_pretty(&results).context("failed to serialize results")?;
        println!("{}", out);
    } else {
        print_results(query, records.len(), &results);
    }
    Ok(())
}

/// Rank with the configured ranker, keeping at most `limit` results.
fn rank_records<'a, M: Matcher>(
    ranker: &Ranker<M>,
    query: &str,
    records: &'a [Record],
    limit: Option<usize>,
) -> Vec<MatchResult<'a, Record>> {
    match limit {
        Some(limit) => ranker.rank_top(query, records, Record::fields, limit),
        None => ranker.rank(query, records, Record::fields),
    }
}

fn print_results(query: &str, total: usize, results: &[MatchResult<'_, Record>]) {
    let style = Style::detect();
    println!(
        "{}",
        style.dim(&format!("{} of {} match {:?}", results.len(), total, query))
    );
    for (rank, result) in results.iter().enumerate() {
        let fields = result.item.fields();
        let title = fields.first().copied().unwrap_or_default();
        let subtitle = fields
            .get(1)
            .map(|subtitle| (*subtitle, result.matches.secondary.as_slice()));
        println!(
            "{}",
            display::result_line(
                style,
                rank + 1,
                result.score,
                (title, result.matches.primary.as_slice()),
                subtitle,
            )
        );
    }
}

fn run_score(text: &str, query: &str, matching: &MatchArgs) -> Result<()> {
    let config = load_config(matching)?;
    let matcher = config.build_matcher()?;
    let options = config.options;

    let (raw, positions) = matcher.score_with_positions(text, query, &options);
    let reference = match config.normalization {
        Normalization::Query => reference_score(&matcher, query, &options),
        Normalization::Combined => matcher.self_score(text, &options),
    };

    let style = Style::detect();
    println!("{}", display::field_line("matcher", config.matcher.name()));
    println!("{}", display::field_line("text", &style.highlight(text, &positions)));
    println!("{}", display::field_line("query", query));
    if positions.is_empty() {
        println!("{}", display::field_line("result", &style.failure("no match")));
    } else {
        println!("{}", display::field_line("raw", &format!("{:.4}", raw)));
        println!("{}", display::field_line("reference", &format!("{:.4}", reference)));
        let normalized = style.score(normalize(raw, reference));
        println!("{}", display::field_line("normalized", normalized.trim_start()));
        println!("{}", display::field_line("positions", &format!("{:?}", positions)));
    }
    Ok(())
}
