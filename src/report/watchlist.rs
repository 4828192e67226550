// Watchlist analysis - runs the wave pipeline over many instruments
//
// Instruments share nothing, so each series is analyzed on the rayon pool
// without locks. Results come back ordered by symbol.

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;

use super::{recommendations, InstrumentAnalysis, MarketSummary, WatchlistFilter, WatchlistReport};
use crate::candle::{self, Candle};
use crate::wave;

/// Analyze one instrument's candle series
pub fn analyze_instrument(symbol: &str, candles: &[Candle]) -> InstrumentAnalysis {
    let analysis = wave::analyze(candles);
    let recommendations = recommendations(&analysis);

    InstrumentAnalysis {
        symbol: symbol.to_string(),
        last_close: candle::last_close(candles),
        price_change_pct: candle::price_change_pct(candles),
        analysis,
        recommendations,
    }
}

/// Analyze every instrument of a watchlist in parallel
pub fn analyze_watchlist(series: &BTreeMap<String, Vec<Candle>>) -> Vec<InstrumentAnalysis> {
    let start = Instant::now();

    // BTreeMap iteration is ordered and collect() preserves it
    let results: Vec<InstrumentAnalysis> = series
        .par_iter()
        .map(|(symbol, candles)| analyze_instrument(symbol, candles))
        .collect();

    tracing::info!(
        instruments = results.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Watchlist analysis complete"
    );

    results
}

/// Analyze a watchlist, summarize it and apply the filter
///
/// The summary covers every instrument; only `instruments` is filtered.
pub fn build_watchlist_report(
    series: &BTreeMap<String, Vec<Candle>>,
    filter: WatchlistFilter,
) -> WatchlistReport {
    let analyzed = analyze_watchlist(series);
    let summary = MarketSummary::from_analyses(&analyzed);
    let instruments = filter.apply(analyzed);

    tracing::debug!(
        total = summary.total_instruments,
        selected = instruments.len(),
        "Watchlist filter applied"
    );

    WatchlistReport {
        instruments,
        summary,
        filter,
    }
}
