//! Analog input abstractions
//!
//! One blocking, single-shot conversion per call. Implementations must
//! bound the wait and report a timeout instead of hanging.

/// Single-shot analog converter
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Convert one sample on a hardware channel
    ///
    /// Returns the right-aligned raw value, `0..=AdcConfig::full_scale()`.
    fn convert(&mut self, channel: u8) -> Result<u16, Self::Error>;
}

/// Conversion failures shared by chip implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// End of conversion not signalled within the timeout
    Timeout,
    /// No input is bound to the requested channel
    UnknownChannel(u8),
}

/// ADC configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcConfig {
    /// Converter resolution
    pub resolution_bits: u8,
    /// Upper bound for one conversion in milliseconds
    pub timeout_ms: u32,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AdcConfig {
    /// 12-bit conversions bounded to 10 ms
    pub const DEFAULT: Self = Self {
        resolution_bits: 12,
        timeout_ms: 10,
    };

    /// Largest raw value the converter can return
    pub const fn full_scale(&self) -> u16 {
        ((1u32 << self.resolution_bits) - 1) as u16
    }
}
