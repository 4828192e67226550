// Integration tests for the wave analysis pipeline
//
// These tests drive the public API end to end:
// - Worked example traced through every stage
// - Determinism and idempotence (timestamp excluded)
// - Graceful degradation on empty / invalid input
// - Structural invariants over generated series

use chrono::{DateTime, Utc};
use wave_analyzer::binance::{candles_from_klines, KlineData};
use wave_analyzer::wave::{
    analyze, analyze_at, analyze_series_at, ConfidenceTier, Direction, ExtremumPoint, Phase,
    RetracementLevel, SwingDirection, WaveType,
};
use wave_analyzer::{AnalysisError, Candle};

const HIGHS: [f64; 7] = [10.0, 12.0, 11.0, 15.0, 13.0, 9.0, 14.0];
const LOWS: [f64; 7] = [8.0, 9.0, 8.0, 11.0, 10.0, 7.0, 12.0];
const CLOSES: [f64; 7] = [9.0, 11.0, 10.0, 13.0, 11.0, 8.0, 13.0];

fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_729_780_000, 0).unwrap()
}

fn example_candles() -> Vec<Candle> {
    (0..HIGHS.len())
        .map(|i| {
            Candle::new(
                1_699_564_800_000 + 3_600_000 * i as i64,
                CLOSES[i],
                HIGHS[i],
                LOWS[i],
                CLOSES[i],
                100.0,
            )
        })
        .collect()
}

/// Deterministic pseudo-random walk (LCG) so the test needs no extra crates
fn random_walk(seed: u64, len: usize) -> Vec<Candle> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / ((1u64 << 31) as f64)
    };

    let mut price = 100.0;
    (0..len)
        .map(|i| {
            let open = price;
            price += (next() - 0.5) * 4.0;
            let close = price;
            let high = open.max(close) + next();
            let low = open.min(close) - next();
            Candle::new(i as i64 * 60_000, open, high, low, close, 1.0)
        })
        .collect()
}

#[test]
fn test_worked_example() {
    let result = analyze_at(&example_candles(), fixed_time());

    assert_eq!(
        result.peaks(),
        &[ExtremumPoint::new(1, 12.0), ExtremumPoint::new(3, 15.0)]
    );
    assert_eq!(
        result.troughs(),
        &[ExtremumPoint::new(2, 8.0), ExtremumPoint::new(5, 7.0)]
    );
    assert_eq!(result.wave_type(), WaveType::Correction);

    let ratios = result.ratios();
    assert!((ratios.get(RetracementLevel::Retracement38).unwrap() - 13.146).abs() < 1e-9);
    assert!((ratios.get(RetracementLevel::Retracement50).unwrap() - 13.5).abs() < 1e-9);
    assert!((ratios.get(RetracementLevel::Retracement61).unwrap() - 13.854).abs() < 1e-9);
    assert_eq!(ratios.swing(), Some(SwingDirection::Rising));
    assert_eq!(result.ratio_swing(), Some(SwingDirection::Rising));

    // Last close 13 sits between the last trough (7) and last peak (15)
    assert_eq!(result.current_phase(), Phase::Consolidation);
    assert_eq!(result.next_direction(), Direction::Bullish);
    assert_eq!(result.confidence(), ConfidenceTier::Low);
}

#[test]
fn test_column_and_candle_entry_points_agree() {
    let from_candles = analyze_at(&example_candles(), fixed_time());
    let from_columns = analyze_series_at(&HIGHS, &LOWS, &CLOSES, fixed_time()).unwrap();
    assert_eq!(from_candles, from_columns);
}

#[test]
fn test_deterministic_output() {
    let candles = example_candles();
    let first = analyze_at(&candles, fixed_time());
    let second = analyze_at(&candles, fixed_time());

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_idempotent_ignoring_timestamp() {
    let candles = random_walk(7, 300);
    let first = analyze(&candles);
    for _ in 0..5 {
        assert!(first.same_classification(&analyze(&candles)));
    }
}

#[test]
fn test_result_serialization_shape() {
    let result = analyze_at(&example_candles(), fixed_time());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["waveType"], "correction");
    assert_eq!(value["currentPhase"], "consolidation");
    assert_eq!(value["peaksCount"], 2);
    assert_eq!(value["troughsCount"], 2);
    assert_eq!(value["nextDirection"], "bullish");
    assert_eq!(value["confidence"], "low");
    assert_eq!(value["peaks"][1]["index"], 3);
    assert_eq!(value["ratios"]["retracement_50"], 13.5);
    assert!(value["ratios"]["retracement_38"].is_number());
    assert!(value["ratios"]["retracement_61"].is_number());
    assert!(value["ratios"].get("swing").is_none());
    assert_eq!(value["ratioSwing"], "rising");
    assert!(value["computedAt"].is_string());
}

#[test]
fn test_empty_series() {
    let result = analyze_at(&[], fixed_time());
    assert_eq!(result.wave_type(), WaveType::Unknown);
    assert_eq!(result.next_direction(), Direction::Neutral);
    assert_eq!(result.confidence(), ConfidenceTier::VeryLow);
    assert!(result.peaks().is_empty());
    assert!(result.troughs().is_empty());
    assert!(result.ratios().is_empty());

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["ratios"], serde_json::json!({}));
    assert!(value["ratioSwing"].is_null());
}

#[test]
fn test_two_candles_never_classify() {
    let candles = &example_candles()[..2];
    let result = analyze_at(candles, fixed_time());
    assert_eq!(result.wave_type(), WaveType::Unknown);
    assert_eq!(result.peaks_count() + result.troughs_count(), 0);
}

#[test]
fn test_nan_prices_are_filtered_not_propagated() {
    let mut candles = example_candles();
    candles[4].high = f64::NAN;
    candles[4].low = f64::NAN;

    let result = analyze_at(&candles, fixed_time());
    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("null"));
    for p in result.peaks().iter().chain(result.troughs()) {
        assert!(p.value.is_finite());
    }
}

#[test]
fn test_length_mismatch_fails_fast() {
    let err = analyze_series_at(&HIGHS, &LOWS[..6], &CLOSES, fixed_time()).unwrap_err();
    assert!(err.is_programmer_error());
    assert!(matches!(err, AnalysisError::SeriesLengthMismatch { .. }));
}

#[test]
fn test_invariants_over_random_walks() {
    for seed in 1..20 {
        let candles = random_walk(seed, 50 + seed as usize * 10);
        let result = analyze(&candles);
        let len = candles.len();

        assert_eq!(result.peaks_count(), result.peaks().len());
        assert_eq!(result.troughs_count(), result.troughs().len());

        for p in result.peaks().iter().chain(result.troughs()) {
            assert!(p.index >= 1 && p.index <= len - 2);
        }
        assert!(result.peaks().windows(2).all(|w| w[0].index < w[1].index));
        assert!(result.troughs().windows(2).all(|w| w[0].index < w[1].index));

        for p in result.peaks() {
            assert!(candles[p.index].high > candles[p.index - 1].high);
            assert!(candles[p.index].high > candles[p.index + 1].high);
        }
        for t in result.troughs() {
            assert!(candles[t.index].low < candles[t.index - 1].low);
            assert!(candles[t.index].low < candles[t.index + 1].low);
        }

        let total = result.peaks_count() + result.troughs_count();
        if total < 3 {
            assert_eq!(result.wave_type(), WaveType::Unknown);
        }
        assert_eq!(result.ratios().is_empty(), result.peaks_count() < 2);
        assert_eq!(result.confidence(), ConfidenceTier::from_extrema_count(total));
    }
}

#[test]
fn test_kline_rows_through_pipeline() {
    let rows: KlineData = serde_json::from_str(
        r#"[
            [1699564800000, "9",  "10", "8",  "9",  "1"],
            [1699568400000, "9",  "12", "9",  "11", "1"],
            [1699572000000, "11", "11", "8",  "10", "1"],
            [1699575600000, "10", "15", "11", "13", "1"],
            [1699579200000, "13", "13", "10", "11", "1"],
            [1699582800000, "11", "9",  "7",  "8",  "1"],
            [1699586400000, "8",  "14", "12", "13", "1"]
        ]"#,
    )
    .unwrap();

    let candles = candles_from_klines(&rows).unwrap();
    let from_klines = analyze_at(&candles, fixed_time());
    let from_columns = analyze_series_at(&HIGHS, &LOWS, &CLOSES, fixed_time()).unwrap();
    assert!(from_klines.same_classification(&from_columns));
}
