//! Analyzer Configuration
//!
//! Runtime settings for the wave-analyzer binary, loaded from environment
//! variables. Command-line flags override these values.

use crate::error::{AnalysisError, Result};
use crate::input::InputFormat;
use crate::report::filter::parse_optional;
use crate::report::WatchlistFilter;

/// Analyzer configuration
///
/// ## Environment Variables
///
/// - `WAVE_INPUT_FORMAT`: Row format of input series: auto, candles, klines (default: auto)
/// - `WAVE_OUTPUT_PRETTY`: Pretty-print JSON output (default: false)
/// - `WAVE_FILTER_WAVE_TYPE`: Keep only this wave type in watchlist output (default: all)
/// - `WAVE_FILTER_CONFIDENCE`: Keep only this confidence tier in watchlist output (default: all)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerConfig {
    /// Row format of input series
    pub input_format: InputFormat,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Watchlist selection criteria
    pub filter: WatchlistFilter,
}

impl AnalyzerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Config` if any variable holds an invalid value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_format = lookup("WAVE_INPUT_FORMAT")
            .map(|v| v.parse::<InputFormat>())
            .transpose()
            .map_err(|e| config_error("WAVE_INPUT_FORMAT", e))?
            .unwrap_or_default();

        let pretty = match lookup("WAVE_OUTPUT_PRETTY") {
            Some(v) => parse_bool(&v).ok_or_else(|| {
                AnalysisError::Config(format!("WAVE_OUTPUT_PRETTY: invalid boolean {:?}", v))
            })?,
            None => false,
        };

        let wave_type = match lookup("WAVE_FILTER_WAVE_TYPE") {
            Some(v) => parse_optional(&v).map_err(|e| config_error("WAVE_FILTER_WAVE_TYPE", e))?,
            None => None,
        };

        let confidence = match lookup("WAVE_FILTER_CONFIDENCE") {
            Some(v) => parse_optional(&v).map_err(|e| config_error("WAVE_FILTER_CONFIDENCE", e))?,
            None => None,
        };

        Ok(Self {
            input_format,
            pretty,
            filter: WatchlistFilter {
                wave_type,
                confidence,
            },
        })
    }
}

fn config_error(key: &str, err: AnalysisError) -> AnalysisError {
    AnalysisError::Config(format!("{}: {}", key, err))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
