//! Board-agnostic control logic for the observatory cover
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Request/reply transport to the companion connectivity module
//! - Dual-axis homing motion controller
//! - Environmental decision engine (rain/dew sensor fusion)
//! - Dashboard command arbiter
//! - Cover state machine tying the above together
//! - Configuration type definitions
//!
//! Everything is written against the `kalyptra-hal` traits and an
//! injected clock, so the whole control flow runs under the host test
//! suite with virtual time.

#![no_std]
#![deny(unsafe_code)]

// The host test suite links std (proptest needs it)
#[cfg(test)]
extern crate std;

pub mod config;
pub mod cover;
pub mod dashboard;
pub mod motion;
pub mod transport;
pub mod weather;

#[cfg(test)]
mod testing;

pub use cover::{CoverController, CoverState};
pub use motion::{MotionOutcome, Travel};
