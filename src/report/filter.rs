// Watchlist filtering by wave type and confidence tier

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::InstrumentAnalysis;
use crate::error::Result;
use crate::wave::{ConfidenceTier, WaveType};

/// Label accepted by [`WatchlistFilter::from_labels`] to disable a criterion
pub const ALL_LABEL: &str = "all";

/// Selection criteria for watchlist instruments
///
/// A `None` criterion matches every instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistFilter {
    pub wave_type: Option<WaveType>,
    pub confidence: Option<ConfidenceTier>,
}

impl WatchlistFilter {
    /// Build a filter from symbolic labels, where `"all"` disables a criterion
    ///
    /// # Example
    /// ```
    /// use wave_analyzer::report::WatchlistFilter;
    /// use wave_analyzer::wave::WaveType;
    ///
    /// let filter = WatchlistFilter::from_labels("impulse", "all").unwrap();
    /// assert_eq!(filter.wave_type, Some(WaveType::Impulse));
    /// assert_eq!(filter.confidence, None);
    /// ```
    pub fn from_labels(wave_type: &str, confidence: &str) -> Result<Self> {
        Ok(Self {
            wave_type: parse_optional(wave_type)?,
            confidence: parse_optional(confidence)?,
        })
    }

    pub fn is_unrestricted(&self) -> bool {
        self.wave_type.is_none() && self.confidence.is_none()
    }

    pub fn matches(&self, instrument: &InstrumentAnalysis) -> bool {
        let analysis = &instrument.analysis;
        self.wave_type.map_or(true, |w| analysis.wave_type() == w)
            && self.confidence.map_or(true, |c| analysis.confidence() == c)
    }

    /// Keep only matching instruments, preserving order
    pub fn apply(&self, instruments: Vec<InstrumentAnalysis>) -> Vec<InstrumentAnalysis> {
        if self.is_unrestricted() {
            return instruments;
        }
        instruments.into_iter().filter(|i| self.matches(i)).collect()
    }
}

/// Parse a label into `Some(value)`, treating `"all"` (or empty) as `None`
pub fn parse_optional<T>(label: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = crate::error::AnalysisError>,
{
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case(ALL_LABEL) {
        return Ok(None);
    }
    label.parse().map(Some)
}
