//! Hardware abstraction traits owned by the core
//!
//! Bus-level traits come from `joypanel-hal`; this module holds the
//! device-level ones that drivers implement.

pub mod display;

pub use display::CharacterDisplay;
