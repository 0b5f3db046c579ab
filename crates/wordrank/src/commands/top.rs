//! Top command: rank the most frequent words in a file.

use std::time::Duration;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordrank_core::{
    Config, ConfigSources, DEFAULT_TOP_K, DecodePolicy, FrequencyReport, rank_reader,
};

use super::{load_exclusions, open_input};

/// Arguments for the `top` subcommand.
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Text file to analyze (`-` reads standard input).
    pub file: Utf8PathBuf,

    /// Number of words to report.
    #[arg(short = 'n', long, value_name = "K")]
    pub top: Option<usize>,

    /// Exclusion list: a file of comma-separated words to leave out.
    #[arg(short = 'x', long, value_name = "FILE")]
    pub exclusions: Option<Utf8PathBuf>,

    /// How to treat bytes that are not valid UTF-8.
    #[arg(long, value_enum)]
    pub decode: Option<DecodePolicy>,
}

/// Rank the most frequent words of a file and print them.
#[instrument(name = "cmd_top", skip_all, fields(file = %args.file))]
pub fn cmd_top(
    args: TopArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, decode = ?args.decode, "executing top command");

    let exclusions = load_exclusions(args.exclusions.as_deref(), config, sources, cwd)?;

    let top_k = args.top.or(config.top).unwrap_or(DEFAULT_TOP_K);
    let decode = args.decode.or(config.decode).unwrap_or_default();
    let reader = open_input(&args.file, config.input_limit())?;

    let progress = if global_json {
        ProgressBar::hidden()
    } else {
        spinner()
    };
    progress.set_message(format!("Collecting words in {}...", args.file));
    let result = rank_reader(reader, &exclusions, top_k, decode);
    progress.finish_and_clear();
    let report = result.with_context(|| format!("failed to rank words in {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn spinner() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        progress.set_style(style);
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

fn print_report(report: &FrequencyReport) {
    if report.is_empty() {
        println!("{}", "No countable words found.".yellow());
        return;
    }

    println!(
        "The {} most frequent words are:",
        report.top_k.min(report.distinct_words).bold()
    );

    let rank_width = report.entries.len().to_string().len();
    let count_width = report
        .entries
        .first()
        .map_or(1, |e| e.count.to_string().len());
    for entry in &report.entries {
        println!(
            "{}) {}  {}",
            format!("{:>rank_width$}", entry.rank).dimmed(),
            format!("{:>count_width$}", entry.count).cyan(),
            entry.word,
        );
    }

    println!(
        "{}",
        format!(
            "{} words counted, {} distinct",
            report.total_words, report.distinct_words
        )
        .dimmed()
    );
}
