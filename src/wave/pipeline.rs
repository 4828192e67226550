//! Analysis pipeline
//!
//! Chains the five stages in a fixed order: extrema detection, classification,
//! retracement levels, phase identification and forecasting. Each call owns its
//! input and returns a fresh result, so independent series can be analyzed
//! concurrently without coordination.

use chrono::{DateTime, Utc};

use crate::candle::{self, Candle};
use crate::error::{AnalysisError, Result};
use crate::wave::classifier::classify;
use crate::wave::extrema::{find_peaks, find_troughs};
use crate::wave::forecast::{confidence, forecast};
use crate::wave::phase::identify_phase;
use crate::wave::ratios::compute_ratios;
use crate::wave::types::AnalysisResult;

/// Analyze a candle series, stamping the result with the current time
///
/// Never fails: empty or degenerate series produce an `unknown` / `neutral` /
/// `very_low` result.
pub fn analyze(candles: &[Candle]) -> AnalysisResult {
    analyze_at(candles, Utc::now())
}

/// Analyze a candle series with an explicit `computed_at` timestamp
pub fn analyze_at(candles: &[Candle], computed_at: DateTime<Utc>) -> AnalysisResult {
    if candles.is_empty() {
        tracing::warn!("No candle data provided for wave analysis");
    } else if !candle::is_chronological(candles) {
        tracing::warn!(
            data_points = candles.len(),
            "Candle open times are not strictly increasing"
        );
    }

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    run_stages(&highs, &lows, candle::last_close(candles), computed_at)
}

/// Analyze parallel high/low/close columns
///
/// # Errors
/// `SeriesLengthMismatch` if the three columns differ in length, which means
/// they were not derived from the same candle series.
pub fn analyze_series(highs: &[f64], lows: &[f64], closes: &[f64]) -> Result<AnalysisResult> {
    analyze_series_at(highs, lows, closes, Utc::now())
}

/// Column-oriented analysis with an explicit `computed_at` timestamp
pub fn analyze_series_at(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    computed_at: DateTime<Utc>,
) -> Result<AnalysisResult> {
    if highs.len() != lows.len() || highs.len() != closes.len() {
        return Err(AnalysisError::SeriesLengthMismatch {
            highs: highs.len(),
            lows: lows.len(),
            closes: closes.len(),
        });
    }

    let last_close = closes.iter().rev().copied().find(|c| c.is_finite());
    Ok(run_stages(highs, lows, last_close, computed_at))
}

fn run_stages(
    highs: &[f64],
    lows: &[f64],
    last_close: Option<f64>,
    computed_at: DateTime<Utc>,
) -> AnalysisResult {
    let peaks = find_peaks(highs);
    let troughs = find_troughs(lows);

    let wave_type = classify(&peaks, &troughs);
    let ratios = compute_ratios(&peaks);
    let phase = identify_phase(&peaks, &troughs, last_close);
    let direction = forecast(wave_type, phase, &ratios);
    let tier = confidence(peaks.len(), troughs.len());

    tracing::debug!(
        data_points = highs.len(),
        peaks_found = peaks.len(),
        troughs_found = troughs.len(),
        wave_type = %wave_type,
        phase = %phase,
        direction = %direction,
        confidence = %tier,
        "Wave analysis complete"
    );

    AnalysisResult::new(
        wave_type,
        phase,
        peaks,
        troughs,
        ratios,
        direction,
        tier,
        computed_at,
    )
}
