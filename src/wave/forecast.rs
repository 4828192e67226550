//! Direction forecast and confidence scoring

use crate::wave::types::{ConfidenceTier, Direction, Phase, RatioSet, RetracementLevel, WaveType};

/// Forecast the next direction from wave type, phase and retracement levels
///
/// | wave type  | phase         | ratios                      | direction |
/// |------------|---------------|-----------------------------|-----------|
/// | impulse    | wave_3        | -                           | bullish   |
/// | impulse    | wave_5        | -                           | bearish   |
/// | impulse    | accumulation  | -                           | bullish   |
/// | correction | consolidation | retracement_38 present, > 0 | bullish   |
/// | other      | other         | -                           | neutral   |
pub fn forecast(wave_type: WaveType, phase: Phase, ratios: &RatioSet) -> Direction {
    match (wave_type, phase) {
        (WaveType::Impulse, Phase::Wave3) => Direction::Bullish,
        (WaveType::Impulse, Phase::Wave5) => Direction::Bearish,
        (WaveType::Impulse, Phase::Accumulation) => Direction::Bullish,
        (WaveType::Correction, Phase::Consolidation) => {
            match ratios.get(RetracementLevel::Retracement38) {
                Some(level) if level > 0.0 => Direction::Bullish,
                _ => Direction::Neutral,
            }
        }
        _ => Direction::Neutral,
    }
}

/// Confidence tier from the number of detected peaks and troughs
pub fn confidence(peaks_count: usize, troughs_count: usize) -> ConfidenceTier {
    ConfidenceTier::from_extrema_count(peaks_count + troughs_count)
}
