//! Binance kline normalization
//!
//! Converts raw Binance candlestick rows into the provider-agnostic candle
//! model consumed by the wave pipeline.

pub mod types;

// Re-export commonly used types
pub use types::{candle_from_kline, candles_from_klines, KlineData, KlineRow};
