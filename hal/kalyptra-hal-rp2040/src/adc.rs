//! ADC channel adapters
//!
//! The RP2040 has one ADC shared by all channels, so the peripheral
//! sits in a `RefCell` and each [`AdcInput`] borrows it for the
//! duration of one conversion. The control flow is strictly
//! sequential, so the borrow can never be contended.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use kalyptra_hal::adc::FULL_SCALE;
use kalyptra_hal::AdcChannel;

/// The shared ADC peripheral in blocking mode
pub type SharedAdc<'d> = RefCell<Adc<'d, Blocking>>;

/// One analog input channel
pub struct AdcInput<'a, 'd> {
    adc: &'a SharedAdc<'d>,
    channel: Channel<'d>,
}

impl<'a, 'd> AdcInput<'a, 'd> {
    pub fn new(adc: &'a SharedAdc<'d>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AdcChannel for AdcInput<'_, '_> {
    fn sample(&mut self) -> u16 {
        // 12-bit conversion widened to the full 16-bit range by bit
        // replication. A conversion error reads as full scale, i.e.
        // dry.
        match self.adc.borrow_mut().blocking_read(&mut self.channel) {
            Ok(raw) => (raw << 4) | (raw >> 8),
            Err(_) => FULL_SCALE,
        }
    }
}
