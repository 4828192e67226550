//! Candle input model
//!
//! Provider-agnostic OHLCV bar consumed by the wave pipeline. Data-acquisition
//! code normalizes whatever its source returns into this shape before analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// One time-boxed price bar
///
/// # Example
/// ```json
/// {
///   "openTime": 1699564800000,
///   "open": 35120.5,
///   "high": 35310.0,
///   "low": 35002.1,
///   "close": 35280.9,
///   "volume": 1523.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Bar open time in milliseconds since Unix epoch
    pub open_time: i64,
    #[serde(deserialize_with = "nullable_price")]
    #[schemars(with = "Option<f64>")]
    pub open: f64,
    #[serde(deserialize_with = "nullable_price")]
    #[schemars(with = "Option<f64>")]
    pub high: f64,
    #[serde(deserialize_with = "nullable_price")]
    #[schemars(with = "Option<f64>")]
    pub low: f64,
    #[serde(deserialize_with = "nullable_price")]
    #[schemars(with = "Option<f64>")]
    pub close: f64,
    /// Base asset volume (not used by the classifier)
    #[serde(default, deserialize_with = "nullable_price")]
    #[schemars(with = "Option<f64>")]
    pub volume: f64,
}

/// Missing prices become `NaN` and are dropped by extrema detection
fn nullable_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Candle {
    pub fn new(open_time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Returns true when open times are strictly increasing
pub fn is_chronological(candles: &[Candle]) -> bool {
    candles
        .windows(2)
        .all(|pair| pair[0].open_time < pair[1].open_time)
}

/// Last finite close of the series, if any
pub fn last_close(candles: &[Candle]) -> Option<f64> {
    candles.iter().rev().map(|c| c.close).find(|c| c.is_finite())
}

/// Percentage move from the first finite open to the last finite close
///
/// Returns 0.0 when either end is missing or the opening price is zero.
pub fn price_change_pct(candles: &[Candle]) -> f64 {
    let first_open = candles.iter().map(|c| c.open).find(|o| o.is_finite());
    match (first_open, last_close(candles)) {
        (Some(open), Some(close)) if open != 0.0 => (close - open) / open * 100.0,
        _ => 0.0,
    }
}
