//! Terminal fault state

use defmt::error;
use joypanel_core::config::PanelConfig;
use joypanel_core::fault::{FatalError, FaultIndicator};
use joypanel_hal::OutputPin;
use joypanel_hal_stm32f1::rcc::SYSCLK_HZ;

const CYCLES_PER_MS: u32 = SYSCLK_HZ / 1000;

/// Stop everything and blink the LED forever
///
/// Interrupts are masked first, so the executor and time driver are dead
/// from here on; the blink is timed by busy-waiting on core cycles.
pub fn halt(led: impl OutputPin, config: &PanelConfig, cause: FatalError) -> ! {
    error!("fatal: {}", cause);
    cortex_m::interrupt::disable();

    FaultIndicator::new(led, config).run(|ms| cortex_m::asm::delay(ms * CYCLES_PER_MS))
}
