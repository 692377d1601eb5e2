//! Board-agnostic core logic for the joypanel monitor firmware
//!
//! Everything that decides *what* happens lives here, written against
//! the `joypanel-hal` traits so it runs unchanged on the host:
//!
//! - Axis normalization and panel acquisition
//! - Screen selection and the redraw policy
//! - Wraparound-safe periodic scheduling
//! - The monitor loop body tying them together
//! - Fault signalling policy
//! - Fixed board configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod acquisition;
pub mod axis;
pub mod config;
pub mod fault;
pub mod monitor;
pub mod render;
pub mod scheduler;
pub mod snapshot;
pub mod state;
pub mod traits;

pub use acquisition::{Buttons, PanelReader};
pub use config::PanelConfig;
pub use monitor::{Monitor, TickError};
pub use snapshot::{PanelSnapshot, StickReading};
pub use state::Screen;
