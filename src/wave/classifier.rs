//! Wave pattern classification
//!
//! Maps extrema counts to a structural label. Checks run in a fixed order and
//! the first match wins:
//! 1. fewer than 3 extrema in total -> Unknown
//! 2. at least 3 peaks and 2 troughs -> Impulse
//! 3. at least 2 peaks and 2 troughs -> Correction
//! 4. at least 3 peaks or 3 troughs -> Triangle
//! 5. otherwise -> Unknown

use crate::wave::types::{ExtremumPoint, WaveType};

/// Minimum combined extrema count before any pattern is considered
pub const MIN_TOTAL_EXTREMA: usize = 3;

/// Swing magnitudes of the first three peak/trough pairs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseSwings {
    pub wave1: f64,
    pub wave3: f64,
    pub wave5: f64,
}

impl ImpulseSwings {
    /// Wave 3 is strictly longer than waves 1 and 5
    pub fn wave3_dominates(&self) -> bool {
        self.wave3 > self.wave1 && self.wave3 > self.wave5
    }
}

/// Measure the three impulse swings, if at least three peaks exist
///
/// Each swing is `|peak[i] - trough[i]|`. A missing trough, or one whose value
/// is exactly zero, falls back to the peak itself and measures as 0.
pub fn impulse_swings(peaks: &[ExtremumPoint], troughs: &[ExtremumPoint]) -> Option<ImpulseSwings> {
    if peaks.len() < 3 {
        return None;
    }

    let swing = |i: usize| {
        let peak = peaks[i].value;
        let trough = troughs
            .get(i)
            .map(|t| t.value)
            .filter(|v| *v != 0.0)
            .unwrap_or(peak);
        (peak - trough).abs()
    };

    Some(ImpulseSwings {
        wave1: swing(0),
        wave3: swing(1),
        wave5: swing(2),
    })
}

/// Classify the swing structure described by the detected extrema
pub fn classify(peaks: &[ExtremumPoint], troughs: &[ExtremumPoint]) -> WaveType {
    if peaks.len() + troughs.len() < MIN_TOTAL_EXTREMA {
        return WaveType::Unknown;
    }

    if peaks.len() >= 3 && troughs.len() >= 2 {
        // Wave-3 dominance is measured for diagnostics only; the label stays Impulse
        if let Some(swings) = impulse_swings(peaks, troughs) {
            tracing::debug!(
                wave1 = swings.wave1,
                wave3 = swings.wave3,
                wave5 = swings.wave5,
                wave3_dominates = swings.wave3_dominates(),
                "Impulse swing magnitudes"
            );
        }
        WaveType::Impulse
    } else if peaks.len() >= 2 && troughs.len() >= 2 {
        WaveType::Correction
    } else if peaks.len() >= 3 || troughs.len() >= 3 {
        WaveType::Triangle
    } else {
        WaveType::Unknown
    }
}
