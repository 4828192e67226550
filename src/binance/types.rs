//! Binance Kline Type Definitions
//!
//! Raw `/api/v3/klines` rows and their conversion into provider-agnostic
//! candles. Fetching is left to the caller; this module only normalizes.

use serde_json::Value;

use crate::candle::Candle;
use crate::error::{AnalysisError, Result};

/// Minimum fields a kline row must carry: open_time, open, high, low, close, volume
pub const KLINE_MIN_FIELDS: usize = 6;

/// One row of the /api/v3/klines response
///
/// Array format: [open_time, open, high, low, close, volume, close_time, quote_volume, trades, taker_buy_base, taker_buy_quote, ignore]
///
/// # Example Row
/// ```json
/// [1699564800000, "35120.50", "35310.00", "35002.10", "35280.90", "1523.40", 1699568399999, "53612345.1", 42110, "801.2", "28190012.7", "0"]
/// ```
pub type KlineRow = Vec<Value>;

/// Full /api/v3/klines response
pub type KlineData = Vec<KlineRow>;

/// Convert one kline row into a candle
///
/// Price and volume fields may be JSON strings (Binance's format) or numbers.
/// Text that does not parse as a number becomes `NaN` and is later dropped by
/// extrema detection rather than rejected here.
///
/// # Errors
/// `InvalidKline` if the row has fewer than 6 fields or the open time is not an integer.
pub fn candle_from_kline(row: &[Value]) -> Result<Candle> {
    if row.len() < KLINE_MIN_FIELDS {
        return Err(AnalysisError::InvalidKline(format!(
            "expected at least {} fields, got {}",
            KLINE_MIN_FIELDS,
            row.len()
        )));
    }

    let open_time = parse_open_time(&row[0])?;

    Ok(Candle {
        open_time,
        open: parse_number(&row[1]),
        high: parse_number(&row[2]),
        low: parse_number(&row[3]),
        close: parse_number(&row[4]),
        volume: parse_number(&row[5]),
    })
}

/// Convert a full klines response into a candle series
///
/// # Errors
/// `InvalidKline` naming the offending row index.
pub fn candles_from_klines(rows: &[KlineRow]) -> Result<Vec<Candle>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| candle_from_kline(row).map_err(|e| with_row_index(i, e)))
        .collect()
}

/// Prefix an `InvalidKline` message with the position of the offending row
pub(crate) fn with_row_index(index: usize, err: AnalysisError) -> AnalysisError {
    match err {
        AnalysisError::InvalidKline(msg) => {
            AnalysisError::InvalidKline(format!("row {}: {}", index, msg))
        }
        other => other,
    }
}

fn parse_open_time(value: &Value) -> Result<i64> {
    let open_time = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    open_time.ok_or_else(|| {
        AnalysisError::InvalidKline(format!("open time is not an integer: {}", value))
    })
}

fn parse_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
