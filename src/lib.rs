// Library exports for wave-analyzer

pub mod error;

// Input model and normalization
pub mod binance; // Binance kline rows -> candles
pub mod candle; // Provider-agnostic OHLCV bar
pub mod input; // JSON input documents

pub mod config; // Configuration management

// Wave structure analysis pipeline
pub mod wave;

// Watchlist aggregation (summary, filters, recommendations)
pub mod report;

pub use candle::Candle;
pub use error::{AnalysisError, Result};
pub use wave::{analyze, analyze_series, AnalysisResult};
