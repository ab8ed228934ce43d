//! Request/reply transport to the companion module
//!
//! Half-duplex over one UART: wake the companion with a pulse on a
//! dedicated line, write a sentinel token, then poll for a reply until
//! a hard wall-clock deadline. The companion sleeps between exchanges
//! (it is battery-backed), hence the wake pulse and its settle time.
//!
//! Timeout and garbled replies are ordinary [`Verdict`] values, never
//! errors; callers decide whether to retry or do nothing this cycle.

use heapless::Vec;
use kalyptra_hal::{Clock, OutputPin, UartRx, UartTx};
use kalyptra_protocol::{CommandToken, Verdict};

use crate::config::CoverConfig;

/// Longest reply the link will buffer; anything past the verdict byte
/// is ignored anyway
pub const MAX_REPLY_LEN: usize = 16;

/// The serial link to the companion connectivity module
///
/// Owns the UART and the wake line exclusively; nothing else touches
/// them during a cycle.
pub struct RemoteLink<U, W, C> {
    uart: U,
    wake: W,
    clock: C,
    reply_timeout_ms: u64,
    wake_settle_ms: u32,
    rx_poll_ms: u32,
}

impl<U, W, C> RemoteLink<U, W, C>
where
    U: UartTx + UartRx,
    W: OutputPin,
    C: Clock,
{
    pub fn new(uart: U, wake: W, clock: C, config: &CoverConfig) -> Self {
        Self {
            uart,
            wake,
            clock,
            reply_timeout_ms: config.reply_timeout_ms,
            wake_settle_ms: config.wake_settle_ms,
            rx_poll_ms: config.rx_poll_ms,
        }
    }

    /// Pulse the wake line so the companion is listening before the
    /// token goes out
    fn wake_companion(&mut self) {
        self.wake.set_high();
        self.clock.sleep_ms(self.wake_settle_ms);
        self.wake.set_low();
    }

    /// Send a token without waiting for any reply
    ///
    /// Used for fire-and-forget notifications (the "cover opened"
    /// dashboard counter). A write failure is dropped: there is nobody
    /// to tell and nothing to retry.
    pub fn notify(&mut self, token: CommandToken) {
        self.wake_companion();
        let _ = self.uart.write_all(token.wire_bytes());
    }

    /// Send a token and wait for the companion's verdict
    ///
    /// Blocks at most `reply_timeout_ms` past the wake pulse, enforced
    /// against the monotonic clock. The first received byte decides
    /// the verdict; a silent line decides `Timeout`.
    pub fn exchange(&mut self, token: CommandToken) -> Verdict {
        self.wake_companion();

        if self.uart.write_all(token.wire_bytes()).is_err() {
            // The request never left, so no reply can arrive
            return Verdict::Timeout;
        }

        let started = self.clock.now_ms();
        loop {
            if self.clock.elapsed_ms(started) > self.reply_timeout_ms {
                return Verdict::Timeout;
            }

            let mut chunk = [0u8; MAX_REPLY_LEN];
            match self.uart.try_read(&mut chunk) {
                Ok(n) if n > 0 => {
                    let mut reply: Vec<u8, MAX_REPLY_LEN> = Vec::new();
                    // Truncation past the verdict byte is harmless
                    let _ = reply.extend_from_slice(&chunk[..n]);
                    return Verdict::classify(&reply);
                }
                // Nothing yet, or a receive hiccup: wait out the poll
                // interval and look again until the deadline decides
                Ok(_) | Err(_) => self.clock.sleep_ms(self.rx_poll_ms),
            }
        }
    }
}
