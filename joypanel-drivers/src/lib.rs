//! Peripheral drivers
//!
//! Concrete implementations of the display trait defined in
//! joypanel-core, written against the joypanel-hal bus traits:
//!
//! - HD44780 character LCD behind a PCF8574 I2C backpack

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;

pub use lcd::{DisplaySession, Hd44780, LcdError};
