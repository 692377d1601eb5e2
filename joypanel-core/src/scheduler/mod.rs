//! Cooperative periodic scheduling
//!
//! The firmware polls a free-running millisecond counter; each periodic
//! job owns an [`Interval`] that decides whether it is due.

pub mod interval;

pub use interval::{elapsed_ms, Interval};
