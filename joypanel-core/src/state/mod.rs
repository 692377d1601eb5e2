//! Display state machine
//!
//! The screen shown is a pure function of the latest snapshot.

pub mod screen;

pub use screen::Screen;
