//! Joypanel Hardware Abstraction Layer
//!
//! Traits the monitor logic is written against. Chip crates implement
//! them on top of their peripheral drivers, tests implement them with
//! recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  joypanel-core / joypanel-drivers       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joypanel-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ joypanel-hal-stm32f1│
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogInput`] - Single-shot analog conversions
//! - [`i2c::I2cBus`] - I2C master writes, reads and presence checks
//! - [`uart::UartTx`] - Serial transmit
//! - [`time::TickSource`] - Millisecond tick counter

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod time;
pub mod uart;

pub use adc::{AdcConfig, AnalogInput, ConversionError};
pub use gpio::{InputPin, OutputPin, Polarity};
pub use i2c::{I2cBus, I2cConfig};
pub use time::TickSource;
pub use uart::{UartConfig, UartTx};
