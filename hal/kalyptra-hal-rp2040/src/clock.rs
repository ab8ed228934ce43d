//! Monotonic clock over embassy-time

use embassy_time::{block_for, Duration, Instant};
use kalyptra_hal::Clock;

/// The hardware time base: embassy's monotonic timer
///
/// A zero-sized handle; copy it freely into every component that
/// needs time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn sleep_ms(&self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
