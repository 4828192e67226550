// Market summary counters over a set of analyzed instruments

use schemars::JsonSchema;
use serde::Serialize;

use super::InstrumentAnalysis;
use crate::wave::ConfidenceTier;

/// Headline counts for a watchlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub total_instruments: usize,
    /// Instruments whose price rose over the series
    pub bullish_count: usize,
    /// Instruments whose price fell over the series
    pub bearish_count: usize,
    /// Instruments analyzed with high confidence
    pub high_confidence_count: usize,
}

impl MarketSummary {
    /// Count bullish/bearish movers and high-confidence analyses
    ///
    /// Bullish and bearish follow the realized price change, not the forecast;
    /// unchanged instruments count toward neither.
    pub fn from_analyses(instruments: &[InstrumentAnalysis]) -> Self {
        instruments.iter().fold(Self::default(), |mut summary, inst| {
            summary.total_instruments += 1;
            if inst.price_change_pct > 0.0 {
                summary.bullish_count += 1;
            } else if inst.price_change_pct < 0.0 {
                summary.bearish_count += 1;
            }
            if inst.analysis.confidence() == ConfidenceTier::High {
                summary.high_confidence_count += 1;
            }
            summary
        })
    }
}
