//! Time base abstraction

/// Free-running millisecond counter
///
/// The counter wraps at `u32::MAX`. Consumers must compare instants with
/// `wrapping_sub`, never with `<`.
pub trait TickSource {
    /// Milliseconds since boot, modulo 2^32
    fn now_ms(&self) -> u32;
}
