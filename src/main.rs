use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wave_analyzer::config::AnalyzerConfig;
use wave_analyzer::input::{load_input, InputFormat, SeriesInput};
use wave_analyzer::report::filter::parse_optional;
use wave_analyzer::report::{
    analyze_instrument, build_watchlist_report, InstrumentAnalysis, WatchlistReport,
};

/// Wave structure classifier for OHLCV candle series
#[derive(Parser)]
#[command(name = "wave-analyzer")]
#[command(about = "Classify wave structure, retracement levels and direction from candle data")]
#[command(version)]
struct Cli {
    /// Path to a JSON input document (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Row format: auto, candles or klines (overrides WAVE_INPUT_FORMAT)
    #[arg(short, long)]
    format: Option<InputFormat>,

    /// Symbol label for a single-series input
    #[arg(short, long, default_value = "UNKNOWN")]
    symbol: String,

    /// Keep only this wave type in watchlist output (overrides WAVE_FILTER_WAVE_TYPE)
    #[arg(long)]
    wave_type: Option<String>,

    /// Keep only this confidence tier in watchlist output (overrides WAVE_FILTER_CONFIDENCE)
    #[arg(long)]
    confidence: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the JSON Schema of the output document and exit (default: instrument)
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "instrument")]
    schema: Option<SchemaKind>,
}

/// Output document whose schema `--schema` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    /// Single-series output
    Instrument,
    /// Watchlist output
    Watchlist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the JSON result, logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = resolve_config(&cli, |key| std::env::var(key).ok())?;

    if let Some(kind) = cli.schema {
        return emit(&schema_document(kind), config.pretty);
    }

    let document = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            load_input(BufReader::new(file), config.input_format)
        }
        None => load_input(io::stdin().lock(), config.input_format),
    }
    .context("Failed to load candle input")?;

    match document {
        SeriesInput::Single(candles) => {
            tracing::info!(
                symbol = %cli.symbol,
                candles = candles.len(),
                "Analyzing single series"
            );
            let analysis = analyze_instrument(&cli.symbol, &candles);
            emit(&analysis, config.pretty)
        }
        SeriesInput::Watchlist(series) => {
            tracing::info!(instruments = series.len(), "Analyzing watchlist");
            let report = build_watchlist_report(&series, config.filter);
            emit(&report, config.pretty)
        }
    }
}

/// `RUST_LOG` directives, falling back to `info` when unset or invalid
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn schema_document(kind: SchemaKind) -> schemars::Schema {
    match kind {
        SchemaKind::Instrument => schemars::schema_for!(InstrumentAnalysis),
        SchemaKind::Watchlist => schemars::schema_for!(WatchlistReport),
    }
}

/// Environment configuration with command-line overrides applied
fn resolve_config<F>(cli: &Cli, lookup: F) -> Result<AnalyzerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config =
        AnalyzerConfig::from_lookup(lookup).context("Invalid environment configuration")?;

    if let Some(format) = cli.format {
        config.input_format = format;
    }
    if cli.pretty {
        config.pretty = true;
    }
    if let Some(label) = &cli.wave_type {
        config.filter.wave_type = parse_optional(label).context("Invalid --wave-type")?;
    }
    if let Some(label) = &cli.confidence {
        config.filter.confidence = parse_optional(label).context("Invalid --confidence")?;
    }

    Ok(config)
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
