//! Tuner settings
//!
//! Converts slider positions of the settings screen into the physical values
//! they stand for. Every conversion comes as a `try_` function returning
//! [`SettingsError`] and a plain one which panics on an index outside the
//! slider's range, since such an index is a bug in the caller.

use std::fmt::Display;
use thiserror::Error;

/// Sample rate assumed by [`minimum_frequency`] when the caller has none.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;

/// Largest window size index; index 16 gives 8 388 608 samples.
pub const MAX_WINDOW_SIZE_INDEX: u32 = 16;

/// Tolerance in cents, indexed by slider position.
const TOLERANCES: [u32; 8] = [1, 2, 3, 5, 7, 10, 15, 20];

/// Largest percentage accepted by the percent-based sliders.
const MAX_PERCENT: u32 = 100;

/// Pitch history duration at the slider's centre position, in seconds.
const PITCH_HISTORY_DURATION_AT_50_PERCENT: f32 = 3.0;

/// Sliders with an index-to-value conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingKind {
    /// Analysis window length in samples.
    WindowSize,
    /// Tolerance in cents.
    Tolerance,
    /// Visible pitch history in seconds.
    PitchHistoryDuration,
    /// Maximum accepted noise level, as a fraction.
    MaxNoise,
    /// Overlap of consecutive analysis windows, as a fraction.
    Overlap,
}

impl SettingKind {
    /// Largest valid index for this slider.
    pub const fn max_index(self) -> u32 {
        match self {
            SettingKind::WindowSize => MAX_WINDOW_SIZE_INDEX,
            SettingKind::Tolerance => TOLERANCES.len() as u32 - 1,
            SettingKind::PitchHistoryDuration | SettingKind::MaxNoise | SettingKind::Overlap => {
                MAX_PERCENT
            }
        }
    }

    fn check(self, index: u32) -> Result<u32, SettingsError> {
        let max = self.max_index();
        if index > max {
            return Err(SettingsError::IndexOutOfRange {
                kind: self,
                index,
                max,
            });
        }
        Ok(index)
    }
}

impl Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Errors when converting slider positions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The index lies outside the slider's range.
    #[error("invalid index {index} for {kind}, expected 0..={max}")]
    IndexOutOfRange {
        /// The slider the index was meant for.
        kind: SettingKind,
        /// The rejected index.
        index: u32,
        /// Largest valid index.
        max: u32,
    },
}

fn or_panic<T>(result: Result<T, SettingsError>) -> T {
    result.unwrap_or_else(|e| panic!("{e}"))
}

/// Window size in samples: 128 at index 0, doubling with every step.
pub fn try_window_size_from_index(index: u32) -> Result<u32, SettingsError> {
    let index = SettingKind::WindowSize.check(index)?;
    Ok(2f32.powi(7 + index as i32).round() as u32)
}

/// Window size in samples.
///
/// # Panics
/// If `index > MAX_WINDOW_SIZE_INDEX`.
pub fn window_size_from_index(index: u32) -> u32 {
    or_panic(try_window_size_from_index(index))
}

/// Lowest frequency a window of `window_size` samples resolves reliably.
///
/// Two full periods have to fit into the window.
pub fn minimum_frequency(window_size: u32, sample_rate: f32) -> f32 {
    2.0 * sample_rate / window_size as f32
}

/// Tolerance in cents for a slider position.
pub fn try_tolerance_from_index(index: u32) -> Result<u32, SettingsError> {
    let index = SettingKind::Tolerance.check(index)?;
    Ok(TOLERANCES[index as usize])
}

/// Tolerance in cents.
///
/// # Panics
/// If `index > 7`.
pub fn tolerance_from_index(index: u32) -> u32 {
    or_panic(try_tolerance_from_index(index))
}

/// Pitch history duration in seconds: 3 s at 50 %, doubling every 20 %.
///
/// The curve is a chosen default, not a calibrated one; callers needing a
/// specific mapping should compute their own.
pub fn try_pitch_history_duration_from_percent(percent: u32) -> Result<f32, SettingsError> {
    let percent = SettingKind::PitchHistoryDuration.check(percent)?;
    Ok(PITCH_HISTORY_DURATION_AT_50_PERCENT * 2f32.powf((percent as f32 - 50.0) / 20.0))
}

/// Pitch history duration in seconds.
///
/// # Panics
/// If `percent > 100`.
pub fn pitch_history_duration_from_percent(percent: u32) -> f32 {
    or_panic(try_pitch_history_duration_from_percent(percent))
}

/// Maximum noise level as a fraction in `0.0..=1.0`.
pub fn try_max_noise_from_percent(percent: u32) -> Result<f32, SettingsError> {
    let percent = SettingKind::MaxNoise.check(percent)?;
    Ok(percent as f32 / 100.0)
}

/// Maximum noise level as a fraction.
///
/// # Panics
/// If `percent > 100`.
pub fn max_noise_from_percent(percent: u32) -> f32 {
    or_panic(try_max_noise_from_percent(percent))
}

/// Window overlap as a fraction in `0.0..=1.0`.
pub fn try_overlap_from_percent(percent: u32) -> Result<f32, SettingsError> {
    let percent = SettingKind::Overlap.check(percent)?;
    Ok(percent as f32 / 100.0)
}

/// Window overlap as a fraction.
///
/// # Panics
/// If `percent > 100`.
pub fn overlap_from_percent(percent: u32) -> f32 {
    or_panic(try_overlap_from_percent(percent))
}

/// Convert a slider position of any kind into its physical value.
pub fn try_index_to_physical_value(kind: SettingKind, index: u32) -> Result<f32, SettingsError> {
    match kind {
        SettingKind::WindowSize => try_window_size_from_index(index).map(|s| s as f32),
        SettingKind::Tolerance => try_tolerance_from_index(index).map(|t| t as f32),
        SettingKind::PitchHistoryDuration => try_pitch_history_duration_from_percent(index),
        SettingKind::MaxNoise => try_max_noise_from_percent(index),
        SettingKind::Overlap => try_overlap_from_percent(index),
    }
}

/// Convert a slider position of any kind into its physical value.
///
/// # Panics
/// If `index` exceeds `kind.max_index()`.
pub fn index_to_physical_value(kind: SettingKind, index: u32) -> f32 {
    or_panic(try_index_to_physical_value(kind, index))
}
