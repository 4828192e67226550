//! Local extrema detection
//!
//! Single linear scan over a price column. A point is an extremum only when it
//! is strictly above (peaks) or strictly below (troughs) both immediate
//! neighbours, so flat runs never produce one and the two endpoints are
//! excluded by construction.

use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::wave::types::ExtremumPoint;

/// Minimum number of finite values needed before any point can have two neighbours
pub const MIN_SERIES_LEN: usize = 3;

/// Which kind of extremum to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Local maxima (peaks)
    Max,
    /// Local minima (troughs)
    Min,
}

impl Comparator {
    fn is_extremum(&self, prev: f64, value: f64, next: f64) -> bool {
        match self {
            Comparator::Max => value > prev && value > next,
            Comparator::Min => value < prev && value < next,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Max => f.write_str("max"),
            Comparator::Min => f.write_str("min"),
        }
    }
}

impl FromStr for Comparator {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(Comparator::Max),
            "min" => Ok(Comparator::Min),
            other => Err(AnalysisError::InvalidComparator(other.to_string())),
        }
    }
}

/// Detect strict local extrema in a numeric series
///
/// Non-finite values are dropped first and indices refer to positions in the
/// filtered series. Fewer than three finite values yields an empty result.
///
/// # Returns
/// Extrema in ascending index order, every index within `[1, len - 2]`
pub fn detect_extrema(values: &[f64], comparator: Comparator) -> Vec<ExtremumPoint> {
    let valid: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    if valid.len() < MIN_SERIES_LEN {
        tracing::debug!(
            comparator = %comparator,
            valid_points = valid.len(),
            "Insufficient valid data for extrema detection"
        );
        return Vec::new();
    }

    let extrema: Vec<ExtremumPoint> = valid
        .windows(3)
        .enumerate()
        .filter(|(_, w)| comparator.is_extremum(w[0], w[1], w[2]))
        .map(|(i, w)| ExtremumPoint::new(i + 1, w[1]))
        .collect();

    tracing::debug!(
        comparator = %comparator,
        found = extrema.len(),
        data_points = valid.len(),
        "Extrema detection complete"
    );

    extrema
}

/// Local maxima of a high-price column
pub fn find_peaks(highs: &[f64]) -> Vec<ExtremumPoint> {
    detect_extrema(highs, Comparator::Max)
}

/// Local minima of a low-price column
pub fn find_troughs(lows: &[f64]) -> Vec<ExtremumPoint> {
    detect_extrema(lows, Comparator::Min)
}
