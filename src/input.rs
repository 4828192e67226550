//! Input document loading
//!
//! Accepts either a single candle series (top-level JSON array) or a
//! watchlist (top-level JSON object mapping symbol to series). Each series may
//! be written as candle objects or as raw Binance kline rows.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde_json::Value;

use crate::binance::candle_from_kline;
use crate::binance::types::with_row_index;
use crate::candle::Candle;
use crate::error::{AnalysisError, Result};

/// Row format of the input series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Detect per row: arrays are kline rows, objects are candles
    #[default]
    Auto,
    Candles,
    Klines,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Auto => f.write_str("auto"),
            InputFormat::Candles => f.write_str("candles"),
            InputFormat::Klines => f.write_str("klines"),
        }
    }
}

impl FromStr for InputFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "candles" => Ok(InputFormat::Candles),
            "klines" => Ok(InputFormat::Klines),
            other => Err(AnalysisError::UnknownLabel {
                kind: "input format",
                value: other.to_string(),
            }),
        }
    }
}

/// Parsed input document
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesInput {
    Single(Vec<Candle>),
    Watchlist(BTreeMap<String, Vec<Candle>>),
}

/// Read and parse an input document
pub fn load_input<R: Read>(reader: R, format: InputFormat) -> Result<SeriesInput> {
    let document: Value = serde_json::from_reader(reader)?;
    parse_document(document, format)
}

/// Parse an already-decoded JSON document
pub fn parse_document(document: Value, format: InputFormat) -> Result<SeriesInput> {
    match document {
        Value::Array(rows) => Ok(SeriesInput::Single(parse_series(rows, format)?)),
        Value::Object(map) => {
            let mut watchlist = BTreeMap::new();
            for (symbol, series) in map {
                let rows = match series {
                    Value::Array(rows) => rows,
                    other => {
                        return Err(AnalysisError::Config(format!(
                            "series for {} must be a JSON array, got {}",
                            symbol,
                            json_kind(&other)
                        )))
                    }
                };
                let candles = parse_series(rows, format)?;
                watchlist.insert(symbol, candles);
            }
            Ok(SeriesInput::Watchlist(watchlist))
        }
        other => Err(AnalysisError::Config(format!(
            "input must be a JSON array or object, got {}",
            json_kind(&other)
        ))),
    }
}

fn parse_series(rows: Vec<Value>, format: InputFormat) -> Result<Vec<Candle>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row, format))
        .collect()
}

fn parse_row(index: usize, row: Value, format: InputFormat) -> Result<Candle> {
    match (format, row) {
        (InputFormat::Klines | InputFormat::Auto, Value::Array(fields)) => {
            candle_from_kline(&fields).map_err(|e| with_row_index(index, e))
        }
        (InputFormat::Candles | InputFormat::Auto, row @ Value::Object(_)) => {
            Ok(serde_json::from_value(row)?)
        }
        (format, row) => Err(AnalysisError::Config(format!(
            "row {}: {} is not valid for input format {}",
            index,
            json_kind(&row),
            format
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
