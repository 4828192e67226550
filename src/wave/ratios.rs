//! Fibonacci retracement levels
//!
//! Levels are projected from the first peak by a fraction of the absolute
//! first-to-last peak range. The sign of the swing is reported alongside
//! rather than folded into the arithmetic.

use std::collections::BTreeMap;

use crate::wave::types::{ExtremumPoint, RatioSet, RetracementLevel, SwingDirection};

/// Compute retracement levels from the peak sequence
///
/// # Returns
/// Empty set when fewer than two peaks exist, otherwise all three levels:
/// `first + |last - first| * fraction`
pub fn compute_ratios(peaks: &[ExtremumPoint]) -> RatioSet {
    let (first, last) = match (peaks.first(), peaks.last()) {
        (Some(first), Some(last)) if peaks.len() >= 2 => (first.value, last.value),
        _ => return RatioSet::empty(),
    };

    let range = (last - first).abs();
    let levels: BTreeMap<RetracementLevel, f64> = RetracementLevel::ALL
        .iter()
        .map(|level| (*level, first + range * level.fraction()))
        .collect();

    RatioSet::from_levels(levels, SwingDirection::from_endpoints(first, last))
}
