//! In-memory hardware doubles for the host test suite
//!
//! Pins share `Cell`s with the test body so their levels and edge
//! counts stay observable after the component under test takes
//! ownership. The clock is virtual: sleeping advances it, nothing
//! else does, so timeout loops run instantly and deterministically.

use core::cell::Cell;

use heapless::Vec;
use kalyptra_hal::{AdcChannel, Clock, InputPin, OutputPin, UartRx, UartTx};

/// Virtual monotonic clock; `sleep_ms` is the only source of time
pub struct FakeClock {
    now: Cell<u64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u32) {
        self.now.set(self.now.get() + u64::from(ms));
    }
}

/// Output pin over shared cells: current level plus a rising-edge
/// counter (which doubles as a step-pulse counter on step pins)
pub struct SharedOutput<'a> {
    level: &'a Cell<bool>,
    rises: &'a Cell<u32>,
}

impl<'a> SharedOutput<'a> {
    pub fn new(level: &'a Cell<bool>, rises: &'a Cell<u32>) -> Self {
        Self { level, rises }
    }
}

impl OutputPin for SharedOutput<'_> {
    fn set_high(&mut self) {
        if !self.level.get() {
            self.rises.set(self.rises.get() + 1);
        }
        self.level.set(true);
    }

    fn set_low(&mut self) {
        self.level.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.level.get()
    }
}

/// Input pin that asserts once a shared counter reaches a threshold
///
/// Wired to a step pin's edge counter it models a limit switch that
/// trips after N pulses; threshold 0 is "always asserted" and
/// `u32::MAX` is "never asserts".
pub struct RisesAbove<'a> {
    counter: &'a Cell<u32>,
    threshold: u32,
}

impl<'a> RisesAbove<'a> {
    pub fn new(counter: &'a Cell<u32>, threshold: u32) -> Self {
        Self { counter, threshold }
    }
}

impl InputPin for RisesAbove<'_> {
    fn is_high(&self) -> bool {
        self.counter.get() >= self.threshold
    }
}

/// Scripted UART double
///
/// Captures everything written and serves at most one scripted reply,
/// optionally only after a number of empty polls.
pub struct FakeUart {
    pub sent: Vec<u8, 64>,
    reply: Option<&'static [u8]>,
    deliver_after_polls: u32,
    polls: u32,
    fail_writes: bool,
}

impl FakeUart {
    /// Never replies; every poll comes back empty
    pub fn silent() -> Self {
        Self {
            sent: Vec::new(),
            reply: None,
            deliver_after_polls: 0,
            polls: 0,
            fail_writes: false,
        }
    }

    /// Replies with `reply` on the first poll
    pub fn replying(reply: &'static [u8]) -> Self {
        Self {
            reply: Some(reply),
            ..Self::silent()
        }
    }

    /// Replies with `reply`, but only after `polls` empty polls
    pub fn replying_after(reply: &'static [u8], polls: u32) -> Self {
        Self {
            reply: Some(reply),
            deliver_after_polls: polls,
            ..Self::silent()
        }
    }

    /// Every write fails
    pub fn broken() -> Self {
        Self {
            fail_writes: true,
            ..Self::silent()
        }
    }
}

impl UartTx for FakeUart {
    type Error = ();

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(());
        }
        self.sent.extend_from_slice(data).map_err(|_| ())
    }
}

impl UartRx for FakeUart {
    type Error = ();

    fn try_read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.polls += 1;
        if self.polls <= self.deliver_after_polls {
            return Ok(0);
        }
        match self.reply.take() {
            Some(reply) => {
                let n = reply.len().min(buf.len());
                buf[..n].copy_from_slice(&reply[..n]);
                Ok(n)
            }
            None => Ok(0),
        }
    }
}

/// ADC channel returning a constant sample
pub struct FixedAdc {
    value: u16,
}

impl FixedAdc {
    pub fn new(value: u16) -> Self {
        Self { value }
    }
}

impl AdcChannel for FixedAdc {
    fn sample(&mut self) -> u16 {
        self.value
    }
}

/// Count maximal runs of `sentinel` in a captured TX stream
///
/// Tokens are runs of one letter, so this counts how many times a
/// given token was sent regardless of what surrounds it.
pub fn count_runs(sent: &[u8], sentinel: u8) -> u32 {
    let mut runs = 0;
    let mut in_run = false;
    for &b in sent {
        if b == sentinel {
            if !in_run {
                runs += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    runs
}
