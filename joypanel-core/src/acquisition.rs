//! Sample acquisition
//!
//! Reads the four potentiometer channels and four buttons once and
//! folds them into a [`PanelSnapshot`]. Holds no state between calls, so
//! pacing is entirely up to the caller.

use joypanel_hal::{AnalogInput, InputPin, Polarity};

use crate::axis::{oriented, Orientation};
use crate::config::AxisChannels;
use crate::snapshot::{PanelSnapshot, StickReading};

/// Raw value substituted when a conversion fails or times out
pub const FAILED_CONVERSION_RAW: u16 = 0;

/// The panel's digital inputs
///
/// All four are wired to ground with pull-ups, so they read low when
/// pressed.
pub struct Buttons<P> {
    /// Left stick push switch (PC10)
    pub left_stick: P,
    /// Right stick push switch (PC11)
    pub right_stick: P,
    /// "Up" button (PD2)
    pub up: P,
    /// "Down" button (PC12)
    pub down: P,
}

/// Panel input reader
pub struct PanelReader<A, P> {
    adc: A,
    channels: AxisChannels,
    buttons: Buttons<P>,
}

impl<A, P> PanelReader<A, P>
where
    A: AnalogInput,
    P: InputPin,
{
    /// Create a reader over an ADC, its channel map, and the buttons
    pub fn new(adc: A, channels: AxisChannels, buttons: Buttons<P>) -> Self {
        Self {
            adc,
            channels,
            buttons,
        }
    }

    /// Take one snapshot of every input
    ///
    /// A conversion that fails is read as raw zero for this pass only;
    /// the remaining channels are still sampled.
    pub fn acquire(&mut self) -> PanelSnapshot {
        let channels = self.channels;

        let left = StickReading {
            x: oriented(self.sample(channels.left_x), Orientation::Normal),
            y: oriented(self.sample(channels.left_y), Orientation::Inverted),
            pressed: self.buttons.left_stick.is_asserted(Polarity::ActiveLow),
        };
        let right = StickReading {
            x: oriented(self.sample(channels.right_x), Orientation::Normal),
            y: oriented(self.sample(channels.right_y), Orientation::Inverted),
            pressed: self.buttons.right_stick.is_asserted(Polarity::ActiveLow),
        };

        PanelSnapshot {
            left,
            right,
            up: self.buttons.up.is_asserted(Polarity::ActiveLow),
            down: self.buttons.down.is_asserted(Polarity::ActiveLow),
        }
    }

    fn sample(&mut self, channel: u8) -> u16 {
        match self.adc.convert(channel) {
            Ok(raw) => raw,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ADC channel {} missed, using raw 0", channel);
                FAILED_CONVERSION_RAW
            }
        }
    }
}
