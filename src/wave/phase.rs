//! Current phase identification
//!
//! Places the last close against the most recent peak and trough. Checks run
//! in order: no extrema at all, above the last peak, below the last trough,
//! otherwise in between.

use crate::wave::types::{ExtremumPoint, Phase};

/// Most recent extremum values, `None` when that side has no extrema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBounds {
    pub last_peak: Option<f64>,
    pub last_trough: Option<f64>,
}

impl PhaseBounds {
    pub fn from_extrema(peaks: &[ExtremumPoint], troughs: &[ExtremumPoint]) -> Self {
        Self {
            last_peak: peaks.last().map(|p| p.value),
            last_trough: troughs.last().map(|t| t.value),
        }
    }

    /// Upper bound used for comparison; a missing peak compares as 0
    fn upper(&self) -> f64 {
        self.last_peak.unwrap_or(0.0)
    }

    /// Lower bound used for comparison; a missing trough compares as 0
    fn lower(&self) -> f64 {
        self.last_trough.unwrap_or(0.0)
    }
}

/// Identify which phase of the structure the market is in
///
/// A missing bound is compared as zero, so any positive close with no
/// detected peak reads as `Wave3`. A missing close compares false on both
/// sides and reads as `Consolidation`.
pub fn identify_phase(
    peaks: &[ExtremumPoint],
    troughs: &[ExtremumPoint],
    last_close: Option<f64>,
) -> Phase {
    if peaks.is_empty() && troughs.is_empty() {
        return Phase::Accumulation;
    }

    let bounds = PhaseBounds::from_extrema(peaks, troughs);
    let Some(close) = last_close else {
        return Phase::Consolidation;
    };

    if close > bounds.upper() {
        Phase::Wave3
    } else if close < bounds.lower() {
        Phase::Wave5
    } else {
        Phase::Consolidation
    }
}
