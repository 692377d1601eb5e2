//! Fault signalling
//!
//! The panel has no operator console, so an unrecoverable fault is shown
//! on the heartbeat LED: it blinks with a half-period well below the
//! normal heartbeat and the firmware never leaves that loop.

use joypanel_hal::OutputPin;

use crate::config::PanelConfig;

/// Conditions the firmware cannot run without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FatalError {
    /// No LCD acknowledged any candidate address
    DisplayNotFound,
}

/// LED driver for the terminal fault state
pub struct FaultIndicator<L> {
    led: L,
    half_period_ms: u32,
}

impl<L: OutputPin> FaultIndicator<L> {
    /// Take over the LED with the configured fault cadence
    pub fn new(led: L, config: &PanelConfig) -> Self {
        Self {
            led,
            half_period_ms: config.fault_blink_ms,
        }
    }

    /// Advance one half-period: toggle, then report how long to wait
    pub fn step(&mut self) -> u32 {
        self.led.toggle();
        self.half_period_ms
    }

    /// Blink forever, waiting with `wait_ms` between toggles
    pub fn run(mut self, mut wait_ms: impl FnMut(u32)) -> ! {
        loop {
            let delay = self.step();
            wait_ms(delay);
        }
    }
}
