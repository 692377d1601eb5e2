//! GPIO pin abstractions
//!
//! Digital lines used by the panel: push-button inputs and the
//! heartbeat LED output.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);

    /// Invert the current output level
    fn toggle(&mut self);

    /// Check if the output latch is currently high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the line reads high
    fn is_high(&self) -> bool;

    /// Check if the line is asserted for the given polarity
    ///
    /// Buttons wired to ground with a pull-up are [`Polarity::ActiveLow`]:
    /// pressed reads low and is reported as asserted.
    fn is_asserted(&self, polarity: Polarity) -> bool {
        polarity.is_asserted(self.is_high())
    }
}

/// Electrical level that counts as "asserted"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level means asserted
    ActiveHigh,
    /// Low level means asserted
    ActiveLow,
}

impl Polarity {
    /// Translate a raw line level into logical assertion
    pub const fn is_asserted(self, high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        }
    }
}
