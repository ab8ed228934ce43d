//! Kalyptra Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the cover logic is written
//! against. Chip-specific crates (currently `kalyptra-hal-rp2040`)
//! implement them, and the test suite implements them with in-memory
//! doubles, so the same control code runs on hardware and on the host.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial link to the companion module
//! - [`adc::AdcChannel`] - Analog moisture sensor channels
//! - [`clock::Clock`] - Monotonic time base and blocking delays

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use clock::Clock;
pub use gpio::{InputPin, OutputPin};
pub use uart::{UartRx, UartTx};
