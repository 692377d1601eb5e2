//! STM32F1 implementations of the joypanel HAL traits
//!
//! Thin adapters over `embassy-stm32` peripheral drivers, plus the
//! clock tree and error converters the firmware needs. Supported chips:
//!
//! - STM32F103RB (NUCLEO-F103RB)
//! - STM32F103C8
//!
//! # Features
//!
//! - `stm32f103rb`, `stm32f103c8` - Chip selection, pick one in the firmware
//! - `defmt` - Enable debug formatting support
//!
//! Every adapter is blocking with a bounded wait. Async embassy drivers
//! are driven to completion with `embassy_futures::block_on` under an
//! `embassy_time` timeout.

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod rcc;
pub mod time;
pub mod uart;

pub use adc::Stm32Adc;
pub use gpio::{InputLine, OutputLine};
pub use i2c::Stm32I2c;
pub use time::EmbassyClock;
pub use uart::SerialTx;
