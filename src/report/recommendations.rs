// Symbolic recommendations derived from an analysis result
//
// Codes are emitted in a fixed order: confidence, wave type, direction, phase.
// The presentation layer maps each code to localized text.

use schemars::JsonSchema;
use serde::Serialize;

use crate::wave::{AnalysisResult, ConfidenceTier, Direction, Phase, WaveType};

/// Advice code attached to an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// High confidence: the analysis can be relied on
    ReliableAnalysis,
    /// Very low confidence: do not act on the analysis
    InsufficientConfidence,
    /// Impulse pattern: follow the main trend
    FollowMainTrend,
    /// Correction pattern: watch for reversals
    WatchForReversals,
    /// Triangle pattern: wait for a breakout
    AwaitBreakout,
    /// Unknown pattern: wait for further confirmation
    AwaitConfirmation,
    ConsiderBuying,
    ConsiderSelling,
    /// Neutral forecast: wait for clearer signals
    AwaitClearerSignals,
    /// Wave 3: the current trend is likely to continue
    RideCurrentTrend,
    /// Wave 5: the trend is late, beware of a reversal
    BewareReversal,
    /// Accumulation: possible entry opportunity
    AccumulationOpportunity,
    /// Consolidation: wait for the range to break
    AwaitRangeBreak,
}

/// Derive advice codes for an analysis
pub fn recommendations(analysis: &AnalysisResult) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(4);

    match analysis.confidence() {
        ConfidenceTier::High => out.push(Recommendation::ReliableAnalysis),
        ConfidenceTier::VeryLow => out.push(Recommendation::InsufficientConfidence),
        ConfidenceTier::Low | ConfidenceTier::Medium => {}
    }

    out.push(match analysis.wave_type() {
        WaveType::Impulse => Recommendation::FollowMainTrend,
        WaveType::Correction => Recommendation::WatchForReversals,
        WaveType::Triangle => Recommendation::AwaitBreakout,
        WaveType::Unknown => Recommendation::AwaitConfirmation,
    });

    out.push(match analysis.next_direction() {
        Direction::Bullish => Recommendation::ConsiderBuying,
        Direction::Bearish => Recommendation::ConsiderSelling,
        Direction::Neutral => Recommendation::AwaitClearerSignals,
    });

    out.push(match analysis.current_phase() {
        Phase::Wave3 => Recommendation::RideCurrentTrend,
        Phase::Wave5 => Recommendation::BewareReversal,
        Phase::Accumulation => Recommendation::AccumulationOpportunity,
        Phase::Consolidation => Recommendation::AwaitRangeBreak,
    });

    out
}
