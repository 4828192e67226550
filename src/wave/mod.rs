//! Wave structure analysis
//!
//! Deterministic, single-pass classifier over one candle series:
//! - Extrema detection (local peaks of highs, troughs of lows)
//! - Pattern classification (impulse / correction / triangle / unknown)
//! - Fibonacci retracement levels
//! - Current phase identification
//! - Direction forecast and confidence tier

pub mod classifier;
pub mod extrema;
pub mod forecast;
pub mod phase;
pub mod pipeline;
pub mod ratios;
pub mod types;

pub use classifier::{classify, impulse_swings, ImpulseSwings};
pub use extrema::{detect_extrema, find_peaks, find_troughs, Comparator};
pub use forecast::{confidence, forecast};
pub use phase::{identify_phase, PhaseBounds};
pub use pipeline::{analyze, analyze_at, analyze_series, analyze_series_at};
pub use ratios::compute_ratios;
pub use types::*;
