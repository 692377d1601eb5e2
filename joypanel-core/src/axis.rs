//! Joystick axis normalization
//!
//! Maps a 12-bit potentiometer reading onto eleven levels, then centres
//! them to `-5..=5`. Arithmetic is done in half-counts so that both the
//! bin width (409.5 counts) and the rounding offset (204.5 counts) stay
//! integral:
//!
//! ```text
//! level = floor((2 * raw + 409) / 819)      raw clamped to 0..=4095
//! ```
//!
//! The outer bins (0 and 10) are half as wide as the others, so the raw
//! midpoint lands exactly in the middle of level 5 and the mapping is
//! mirror-symmetric: `level(raw) + level(4095 - raw) == 10`.

use joypanel_hal::AdcConfig;

/// Largest raw reading of the converter
pub const RAW_FULL_SCALE: u16 = AdcConfig::DEFAULT.full_scale();

/// Magnitude bound of a normalized axis value
pub const AXIS_LIMIT: i8 = 5;

/// Number of distinct normalized values
pub const LEVELS: u8 = 2 * AXIS_LIMIT as u8 + 1;

/// Rounding offset, in half-counts
const HALF_COUNT_OFFSET: u32 = 409;

/// Bin width, in half-counts
const HALF_COUNT_DIVISOR: u32 = 819;

/// Which direction of travel reads as positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Increasing raw value is positive
    Normal,
    /// Increasing raw value is negative (Y pots are mounted upside down)
    Inverted,
}

impl Orientation {
    /// Apply the orientation to a centred value
    pub const fn apply(self, value: i8) -> i8 {
        match self {
            Orientation::Normal => value,
            Orientation::Inverted => -value,
        }
    }
}

/// Quantize a raw reading to `0..LEVELS`
pub fn level(raw: u16) -> u8 {
    let raw = u32::from(raw.min(RAW_FULL_SCALE));
    let level = (2 * raw + HALF_COUNT_OFFSET) / HALF_COUNT_DIVISOR;
    level.min(u32::from(LEVELS - 1)) as u8
}

/// Normalize a raw reading to `-AXIS_LIMIT..=AXIS_LIMIT`
pub fn normalize(raw: u16) -> i8 {
    level(raw) as i8 - AXIS_LIMIT
}

/// Normalize and orient a raw reading
pub fn oriented(raw: u16, orientation: Orientation) -> i8 {
    orientation.apply(normalize(raw))
}
