//! Character LCD drivers

mod hd44780;
pub mod pcf8574;

pub use hd44780::{timing, DisplaySession, Hd44780, LcdError, ROW_OFFSETS};
