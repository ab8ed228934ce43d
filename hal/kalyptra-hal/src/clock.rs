//! Monotonic time base
//!
//! Every bounded wait in the cover logic (transport reply timeout,
//! homing budget, step pulse widths, wake settle) goes through this
//! trait, so tests can run the same loops against a virtual clock
//! without real delays.

/// Monotonic millisecond clock with blocking delay
///
/// Methods take `&self` so one clock can serve several components;
/// implementations are expected to be cheap handles (a unit struct on
/// hardware, a shared counter in tests).
pub trait Clock {
    /// Milliseconds since an arbitrary epoch; never goes backwards
    fn now_ms(&self) -> u64;

    /// Block for at least `ms` milliseconds
    fn sleep_ms(&self, ms: u32);

    /// Milliseconds elapsed since an earlier `now_ms` reading
    fn elapsed_ms(&self, since_ms: u64) -> u64 {
        self.now_ms().saturating_sub(since_ms)
    }
}

impl<T: Clock> Clock for &T {
    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }

    fn sleep_ms(&self, ms: u32) {
        T::sleep_ms(self, ms)
    }
}
