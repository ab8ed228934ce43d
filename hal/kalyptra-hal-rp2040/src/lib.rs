//! RP2040-specific HAL for the Kalyptra cover controller
//!
//! Thin newtype adapters from `embassy-rp` peripherals (in blocking
//! mode) to the `kalyptra-hal` traits. The control loop is a single
//! blocking flow, so nothing here is async; embassy provides the
//! peripheral drivers and the time base.

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod uart;

pub use adc::{AdcInput, SharedAdc};
pub use clock::SystemClock;
pub use gpio::{OutPin, SwitchPin};
pub use uart::LinkUart;
