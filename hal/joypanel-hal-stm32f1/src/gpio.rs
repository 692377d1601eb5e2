//! GPIO adapters

use embassy_stm32::gpio::{Input, Output};
use joypanel_hal::{InputPin, OutputPin};

/// Push-pull output line
pub struct OutputLine<'d>(pub Output<'d>);

impl OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input line; pull configuration is chosen at construction
pub struct InputLine<'d>(pub Input<'d>);

impl InputPin for InputLine<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
