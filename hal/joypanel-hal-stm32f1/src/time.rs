//! Tick source backed by the embassy time driver

use embassy_time::Instant;
use joypanel_hal::TickSource;

/// Millisecond counter derived from the embassy time driver
///
/// Truncated to 32 bits, so it wraps after about 49.7 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl TickSource for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
