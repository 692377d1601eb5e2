//! Joypanel - Dual-Joystick Panel Monitor Firmware
//!
//! Samples two analog sticks and four buttons on a NUCLEO-F103RB,
//! mirrors every sample over the ST-LINK virtual COM port and shows it
//! on a 16x2 character LCD.

#![no_std]
#![no_main]

mod board;
mod fatal;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Ticker, Timer};
use joypanel_core::fault::FatalError;
use joypanel_core::{Monitor, PanelConfig};
use joypanel_drivers::Hd44780;
use joypanel_hal::TickSource;
use joypanel_hal_stm32f1::{rcc, EmbassyClock};
use {defmt_rtt as _, panic_probe as _};

/// Loop polling period
const POLL_INTERVAL_MS: u64 = 1;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joypanel monitor starting...");

    let config = PanelConfig::DEFAULT;
    let p = embassy_stm32::init(rcc::peripheral_config());
    let board = board::take(p, &config);
    info!("Peripherals initialized");

    let mut lcd = match Hd44780::probe_and_bind(board.lcd_bus, Delay, &config.lcd) {
        Ok(lcd) => lcd,
        Err(_) => fatal::halt(board.led, &config, FatalError::DisplayNotFound),
    };
    info!("LCD at {=u8:#x}", lcd.session().address);

    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {}", e);
    }

    let clock = EmbassyClock;
    let mut monitor = Monitor::new(
        &config,
        lcd,
        board.reader,
        board.led,
        board.serial,
        clock.now_ms(),
    );

    if let Err(e) = monitor.announce() {
        warn!("Banner failed: {}", e);
    }
    Timer::after_millis(u64::from(config.banner_hold_ms)).await;
    monitor.resync(clock.now_ms());
    info!("Monitor running");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        ticker.next().await;

        if let Err(e) = monitor.poll(clock.now_ms()) {
            warn!("Tick failed: {}", e);
        }
    }
}
