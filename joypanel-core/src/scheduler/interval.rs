//! Wraparound-safe interval timer

/// Milliseconds from `since` to `now` on a wrapping 32-bit counter
///
/// Correct as long as the true gap is below 2^32 ms (about 49.7 days).
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Periodic job timer
///
/// Fires at most once per poll. A late poll fires once and restarts the
/// period from `now`; missed periods are not replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval {
    period_ms: u32,
    last_ms: u32,
}

impl Interval {
    /// Create a timer whose first period starts at `start_ms`
    pub const fn new(period_ms: u32, start_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: start_ms,
        }
    }

    /// Check whether the period has elapsed, restarting it if so
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if elapsed_ms(now_ms, self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Start a fresh period at `now_ms`
    pub fn restart(&mut self, now_ms: u32) {
        self.last_ms = now_ms;
    }

    /// Configured period
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Timestamp of the last firing (or of the start)
    pub const fn last_ms(&self) -> u32 {
        self.last_ms
    }
}
