//! Tests for settings slider conversions.

use note_printer::settings::{
    max_noise_from_percent, minimum_frequency, overlap_from_percent,
    pitch_history_duration_from_percent, tolerance_from_index, try_tolerance_from_index,
    try_window_size_from_index, window_size_from_index, DEFAULT_SAMPLE_RATE,
    MAX_WINDOW_SIZE_INDEX,
};
use note_printer::{index_to_physical_value, try_index_to_physical_value, SettingKind, SettingsError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn window_size_doubles_from_128() {
    let sizes: Vec<u32> = (0..5).map(window_size_from_index).collect();
    assert_eq!(sizes, [128, 256, 512, 1024, 2048]);
    assert_eq!(window_size_from_index(MAX_WINDOW_SIZE_INDEX), 1 << 23);
}

#[test]
fn window_size_is_strictly_increasing() {
    let sizes: Vec<u32> = (0..=MAX_WINDOW_SIZE_INDEX).map(window_size_from_index).collect();
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn window_size_out_of_range() {
    assert_eq!(
        try_window_size_from_index(MAX_WINDOW_SIZE_INDEX + 1),
        Err(SettingsError::IndexOutOfRange {
            kind: SettingKind::WindowSize,
            index: MAX_WINDOW_SIZE_INDEX + 1,
            max: MAX_WINDOW_SIZE_INDEX,
        })
    );
}

#[test]
fn minimum_frequency_fits_two_periods() {
    let freq = minimum_frequency(window_size_from_index(5), DEFAULT_SAMPLE_RATE);
    assert!((freq - 2.0 * 44_100.0 / 4096.0).abs() < 1e-4);
}

#[test]
fn tolerance_table() {
    let cents: Vec<u32> = (0..8).map(tolerance_from_index).collect();
    assert_eq!(cents, [1, 2, 3, 5, 7, 10, 15, 20]);
    assert_eq!(tolerance_from_index(3), 5);
    assert_eq!(tolerance_from_index(7), 20);
}

#[test]
#[should_panic(expected = "invalid index 8 for Tolerance")]
fn tolerance_index_eight_is_a_contract_failure() {
    tolerance_from_index(8);
}

#[test]
fn tolerance_error_message() {
    let err = try_tolerance_from_index(8).unwrap_err();
    assert_eq!(err.to_string(), "invalid index 8 for Tolerance, expected 0..=7");
}

#[test]
fn pitch_history_duration() {
    assert!((pitch_history_duration_from_percent(50) - 3.0).abs() < 1e-5);
    assert!((pitch_history_duration_from_percent(70) - 6.0).abs() < 1e-4);
    assert!((pitch_history_duration_from_percent(30) - 1.5).abs() < 1e-5);
}

#[test]
fn percent_fractions() {
    assert_eq!(max_noise_from_percent(0), 0.0);
    assert_eq!(max_noise_from_percent(100), 1.0);
    assert!((overlap_from_percent(25) - 0.25).abs() < 1e-6);
}

#[test]
#[should_panic(expected = "invalid index 101 for MaxNoise")]
fn max_noise_above_hundred_percent() {
    max_noise_from_percent(101);
}

#[test]
fn dispatch_by_kind() {
    assert_eq!(index_to_physical_value(SettingKind::WindowSize, 3), 1024.0);
    assert_eq!(index_to_physical_value(SettingKind::Tolerance, 5), 10.0);
    assert_eq!(index_to_physical_value(SettingKind::MaxNoise, 10), 0.1);
    assert!(try_index_to_physical_value(SettingKind::Overlap, 200).is_err());
}

proptest! {
    #[test]
    fn every_valid_index_converts(index in 0u32..=100) {
        for kind in [
            SettingKind::WindowSize,
            SettingKind::Tolerance,
            SettingKind::PitchHistoryDuration,
            SettingKind::MaxNoise,
            SettingKind::Overlap,
        ] {
            let result = try_index_to_physical_value(kind, index);
            prop_assert_eq!(result.is_ok(), index <= kind.max_index());
        }
    }
}
