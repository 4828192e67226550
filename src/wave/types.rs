//! Core data types for wave structure analysis
//!
//! Every enum serializes to the symbolic snake_case label the presentation
//! layer keys its localization on (`impulse`, `wave_3`, `very_low`, ...).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

// ============================================================================
// Supporting Enums
// ============================================================================

/// Structural label assigned to the detected swing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WaveType {
    Impulse,
    Correction,
    Triangle,
    Unknown,
}

impl WaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Impulse => "impulse",
            Self::Correction => "correction",
            Self::Triangle => "triangle",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaveType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "impulse" => Ok(Self::Impulse),
            "correction" => Ok(Self::Correction),
            "triangle" => Ok(Self::Triangle),
            "unknown" => Ok(Self::Unknown),
            other => Err(AnalysisError::UnknownLabel {
                kind: "wave type",
                value: other.to_string(),
            }),
        }
    }
}

/// Where the last close sits relative to the most recent extrema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Phase {
    #[serde(rename = "accumulation")]
    Accumulation,
    #[serde(rename = "wave_3")]
    Wave3,
    #[serde(rename = "wave_5")]
    Wave5,
    #[serde(rename = "consolidation")]
    Consolidation,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accumulation => "accumulation",
            Self::Wave3 => "wave_3",
            Self::Wave5 => "wave_5",
            Self::Consolidation => "consolidation",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accumulation" => Ok(Self::Accumulation),
            "wave_3" => Ok(Self::Wave3),
            "wave_5" => Ok(Self::Wave5),
            "consolidation" => Ok(Self::Consolidation),
            other => Err(AnalysisError::UnknownLabel {
                kind: "phase",
                value: other.to_string(),
            }),
        }
    }
}

/// Forecast direction for the next move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bullish" => Ok(Self::Bullish),
            "bearish" => Ok(Self::Bearish),
            "neutral" => Ok(Self::Neutral),
            other => Err(AnalysisError::UnknownLabel {
                kind: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Coarse reliability label derived from how many extrema were found
///
/// Thresholds on total extrema count:
/// - High: 8 or more
/// - Medium: 5-7
/// - Low: 3-4
/// - VeryLow: fewer than 3
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Determine tier from the combined peak + trough count
    pub fn from_extrema_count(total: usize) -> Self {
        if total >= 8 {
            Self::High
        } else if total >= 5 {
            Self::Medium
        } else if total >= 3 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceTier {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very_low" => Ok(Self::VeryLow),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AnalysisError::UnknownLabel {
                kind: "confidence",
                value: other.to_string(),
            }),
        }
    }
}

/// Fibonacci retracement level label
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RetracementLevel {
    #[serde(rename = "retracement_38")]
    Retracement38,
    #[serde(rename = "retracement_50")]
    Retracement50,
    #[serde(rename = "retracement_61")]
    Retracement61,
}

impl RetracementLevel {
    pub const ALL: [RetracementLevel; 3] = [
        RetracementLevel::Retracement38,
        RetracementLevel::Retracement50,
        RetracementLevel::Retracement61,
    ];

    /// Fraction of the swing range this level sits at
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Retracement38 => 0.382,
            Self::Retracement50 => 0.5,
            Self::Retracement61 => 0.618,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retracement38 => "retracement_38",
            Self::Retracement50 => "retracement_50",
            Self::Retracement61 => "retracement_61",
        }
    }
}

/// Sign of the swing between the first and last peak
///
/// Retracement levels are always projected upward from the first peak using
/// the absolute range; a `Falling` swing means those levels sit above a move
/// that actually went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SwingDirection {
    Rising,
    Falling,
    Flat,
}

impl SwingDirection {
    pub fn from_endpoints(first: f64, last: f64) -> Self {
        if last > first {
            Self::Rising
        } else if last < first {
            Self::Falling
        } else {
            Self::Flat
        }
    }
}

// ============================================================================
// Core Entities
// ============================================================================

/// Local maximum or minimum of a filtered price column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExtremumPoint {
    /// Position within the filtered series (0-based)
    pub index: usize,
    pub value: f64,
}

impl ExtremumPoint {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }
}

/// Retracement levels derived from the peak sequence
///
/// Serializes as a plain label → price mapping, `{}` when fewer than two
/// peaks exist. The swing sign is carried on `AnalysisResult::ratio_swing`.
///
/// # Example
/// ```json
/// {"retracement_38": 13.146, "retracement_50": 13.5, "retracement_61": 13.854}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RatioSet {
    levels: BTreeMap<RetracementLevel, f64>,
    #[serde(skip)]
    swing: Option<SwingDirection>,
}

impl RatioSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_levels(
        levels: BTreeMap<RetracementLevel, f64>,
        swing: SwingDirection,
    ) -> Self {
        Self {
            levels,
            swing: Some(swing),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, level: RetracementLevel) -> Option<f64> {
        self.levels.get(&level).copied()
    }

    pub fn swing(&self) -> Option<SwingDirection> {
        self.swing
    }

    /// Levels in ascending label order (38, 50, 61)
    pub fn iter(&self) -> impl Iterator<Item = (RetracementLevel, f64)> + '_ {
        self.levels.iter().map(|(level, value)| (*level, *value))
    }
}

/// Complete result of one pipeline run
///
/// Built once by the pipeline and never mutated afterwards; the extrema
/// counts always equal the lengths of the extrema sequences.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    wave_type: WaveType,
    current_phase: Phase,
    peaks_count: usize,
    troughs_count: usize,
    peaks: Vec<ExtremumPoint>,
    troughs: Vec<ExtremumPoint>,
    ratios: RatioSet,
    /// Sign of the first-to-last peak swing, absent when `ratios` is empty
    ratio_swing: Option<SwingDirection>,
    next_direction: Direction,
    confidence: ConfidenceTier,
    computed_at: DateTime<Utc>,
}

impl AnalysisResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        wave_type: WaveType,
        current_phase: Phase,
        peaks: Vec<ExtremumPoint>,
        troughs: Vec<ExtremumPoint>,
        ratios: RatioSet,
        next_direction: Direction,
        confidence: ConfidenceTier,
        computed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            wave_type,
            current_phase,
            peaks_count: peaks.len(),
            troughs_count: troughs.len(),
            peaks,
            troughs,
            ratio_swing: ratios.swing(),
            ratios,
            next_direction,
            confidence,
            computed_at,
        }
    }

    pub fn wave_type(&self) -> WaveType {
        self.wave_type
    }

    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    pub fn peaks_count(&self) -> usize {
        self.peaks_count
    }

    pub fn troughs_count(&self) -> usize {
        self.troughs_count
    }

    pub fn peaks(&self) -> &[ExtremumPoint] {
        &self.peaks
    }

    pub fn troughs(&self) -> &[ExtremumPoint] {
        &self.troughs
    }

    pub fn ratios(&self) -> &RatioSet {
        &self.ratios
    }

    pub fn ratio_swing(&self) -> Option<SwingDirection> {
        self.ratio_swing
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn confidence(&self) -> ConfidenceTier {
        self.confidence
    }

    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }

    /// Compares every classification field, ignoring `computed_at`
    pub fn same_classification(&self, other: &AnalysisResult) -> bool {
        self.wave_type == other.wave_type
            && self.current_phase == other.current_phase
            && self.peaks == other.peaks
            && self.troughs == other.troughs
            && self.ratios == other.ratios
            && self.ratio_swing == other.ratio_swing
            && self.next_direction == other.next_direction
            && self.confidence == other.confidence
    }
}
