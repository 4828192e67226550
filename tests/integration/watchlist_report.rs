// Integration tests for watchlist report generation
//
// These tests verify:
// - Loading a watchlist document and analyzing every instrument
// - Summary counts over the unfiltered set
// - Filtering by wave type and confidence
// - File input through tempfile

use std::collections::BTreeMap;
use std::io::Write;

use wave_analyzer::input::{load_input, InputFormat, SeriesInput};
use wave_analyzer::report::{
    analyze_watchlist, build_watchlist_report, Recommendation, WatchlistFilter,
};
use wave_analyzer::wave::{ConfidenceTier, WaveType};
use wave_analyzer::Candle;

fn zigzag(len: usize, low: f64, high: f64, drift: f64) -> Vec<Candle> {
    (0..len)
        .map(|i| {
            let base = if i % 2 == 0 { low } else { high } + drift * i as f64;
            Candle::new(i as i64 * 60_000, base, base + 0.5, base - 0.5, base, 1.0)
        })
        .collect()
}

fn watchlist() -> BTreeMap<String, Vec<Candle>> {
    let mut series = BTreeMap::new();
    // Many alternating swings: impulse, high confidence, rising
    series.insert("BTCUSDT".to_string(), zigzag(24, 100.0, 104.0, 0.1));
    // Too short to classify, falling
    series.insert(
        "XRPUSDT".to_string(),
        vec![
            Candle::new(0, 0.63, 0.64, 0.62, 0.63, 1.0),
            Candle::new(60_000, 0.63, 0.63, 0.60, 0.61, 1.0),
        ],
    );
    series.insert("EMPTY".to_string(), Vec::new());
    series
}

#[test]
fn test_watchlist_analysis() {
    let results = analyze_watchlist(&watchlist());
    assert_eq!(results.len(), 3);

    let btc = results.iter().find(|r| r.symbol == "BTCUSDT").unwrap();
    assert_eq!(btc.analysis.wave_type(), WaveType::Impulse);
    assert_eq!(btc.analysis.confidence(), ConfidenceTier::High);
    assert!(btc.price_change_pct > 0.0);
    assert_eq!(btc.recommendations[0], Recommendation::ReliableAnalysis);

    let xrp = results.iter().find(|r| r.symbol == "XRPUSDT").unwrap();
    assert_eq!(xrp.analysis.wave_type(), WaveType::Unknown);
    assert!(xrp.price_change_pct < 0.0);

    let empty = results.iter().find(|r| r.symbol == "EMPTY").unwrap();
    assert_eq!(empty.last_close, None);
    assert_eq!(empty.price_change_pct, 0.0);
}

#[test]
fn test_report_summary_and_filter() {
    let filter = WatchlistFilter::from_labels("all", "high").unwrap();
    let report = build_watchlist_report(&watchlist(), filter);

    assert_eq!(report.summary.total_instruments, 3);
    assert_eq!(report.summary.bullish_count, 1);
    assert_eq!(report.summary.bearish_count, 1);
    assert_eq!(report.summary.high_confidence_count, 1);

    assert_eq!(report.instruments.len(), 1);
    assert_eq!(report.instruments[0].symbol, "BTCUSDT");
}

#[test]
fn test_report_serialization_shape() {
    let report = build_watchlist_report(&watchlist(), WatchlistFilter::default());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["summary"]["totalInstruments"], 3);
    assert_eq!(value["instruments"].as_array().unwrap().len(), 3);
    assert_eq!(value["instruments"][0]["symbol"], "BTCUSDT");
    assert_eq!(value["instruments"][0]["analysis"]["waveType"], "impulse");
    assert_eq!(value["instruments"][0]["recommendations"][0], "reliable_analysis");
    assert!(value["filter"]["waveType"].is_null());
}

#[test]
fn test_load_watchlist_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "BNBUSDT": [
                [1, "312", "314", "310", "313", "5"],
                [2, "313", "318", "312", "317", "5"],
                [3, "317", "316", "311", "312", "5"],
                [4, "312", "319", "313", "318", "5"]
            ],
            "ADAUSDT": [
                {{"openTime": 1, "open": 0.47, "high": 0.48, "low": 0.46, "close": 0.475}},
                {{"openTime": 2, "open": 0.475, "high": 0.49, "low": 0.47, "close": 0.485}}
            ]
        }}"#
    )
    .unwrap();

    let reader = std::fs::File::open(file.path()).unwrap();
    let series = match load_input(reader, InputFormat::Auto).unwrap() {
        SeriesInput::Watchlist(series) => series,
        other => panic!("expected watchlist, got {:?}", other),
    };
    assert_eq!(series.len(), 2);
    assert_eq!(series["BNBUSDT"].len(), 4);

    let report = build_watchlist_report(&series, WatchlistFilter::default());
    let bnb = &report.instruments[1];
    assert_eq!(bnb.symbol, "BNBUSDT");
    // highs 314, 318, 316, 319: one peak at index 1; lows 310, 312, 311, 313: one trough at index 2
    assert_eq!(bnb.analysis.peaks_count(), 1);
    assert_eq!(bnb.analysis.troughs_count(), 1);
    assert_eq!(bnb.analysis.wave_type(), WaveType::Unknown);
}
