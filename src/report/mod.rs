// Report module for watchlist-level wave analysis
//
// Aggregates per-instrument analyses into a single report: market summary
// counts, wave type / confidence filtering and symbolic recommendations.
// Output stays symbolic; localization and formatting belong to the caller.

pub mod filter;
pub mod recommendations;
pub mod summary;
pub mod watchlist;

// Re-export main types
pub use filter::WatchlistFilter;
pub use recommendations::{recommendations, Recommendation};
pub use summary::MarketSummary;
pub use watchlist::{analyze_instrument, analyze_watchlist, build_watchlist_report};

use schemars::JsonSchema;
use serde::Serialize;

use crate::wave::AnalysisResult;

/// Wave analysis of one instrument plus the price context it was run on
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentAnalysis {
    /// Instrument identifier (e.g., "BTCUSDT")
    pub symbol: String,

    /// Last finite close of the series, if any
    pub last_close: Option<f64>,

    /// Move from first open to last close, in percent
    pub price_change_pct: f64,

    pub analysis: AnalysisResult,

    /// Advice codes derived from `analysis`
    pub recommendations: Vec<Recommendation>,
}

/// Complete watchlist output: filtered instruments and the unfiltered summary
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistReport {
    pub instruments: Vec<InstrumentAnalysis>,

    /// Computed over every analyzed instrument, before filtering
    pub summary: MarketSummary,

    /// Filter that selected `instruments`
    pub filter: WatchlistFilter,
}
