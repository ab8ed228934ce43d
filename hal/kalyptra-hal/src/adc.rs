//! Analog channel abstraction
//!
//! The rain and dew sensors are plain resistive boards read through an
//! ADC. Samples are normalized to the full 16-bit range (the RP2040
//! adapter widens its 12-bit conversions by bit replication), so
//! thresholds are hardware-independent.

/// Full-scale sample value
pub const FULL_SCALE: u16 = u16::MAX;

/// One analog input channel
///
/// Reads are assumed to always succeed; adapters map a hardware fault
/// to a defined sample value rather than surfacing an error.
pub trait AdcChannel {
    /// Take a fresh sample, blocking for the conversion
    fn sample(&mut self) -> u16;
}

impl<T: AdcChannel> AdcChannel for &mut T {
    fn sample(&mut self) -> u16 {
        T::sample(self)
    }
}
