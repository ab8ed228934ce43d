//! Companion Module Communication Protocol
//!
//! This crate defines the UART contract between the cover controller
//! (RP2040) and the companion connectivity module (M5StickC), which
//! owns Wi-Fi, the ThingSpeak dashboard, and the weather-API lookup.
//!
//! # Protocol Overview
//!
//! Requests are *sentinel tokens*: short runs of a single ASCII letter,
//! one letter per request kind. The repetition is the only redundancy
//! on the wire - if bytes are dropped or garbled mid-run, any surviving
//! byte still identifies the request. There is no length field and no
//! checksum.
//!
//! ```text
//! controller -> companion   RRRRRRRRRRRR   "is it raining?"
//! controller -> companion   DDDDDDDDDD     "any dashboard command?"
//! controller -> companion   TTTTTTTTTTT    "cover opened" (no reply)
//! companion  -> controller  Y / N / ...    verdict, first byte wins
//! ```
//!
//! Replies are classified from their first byte only; everything that
//! is neither `Y` nor `N` is an explicit [`Verdict::Unknown`], and a
//! silent line is [`Verdict::Timeout`]. Both are ordinary values the
//! caller must handle, never errors.

#![no_std]
#![deny(unsafe_code)]

// The host test suite links std (proptest needs it)
#[cfg(test)]
extern crate std;

pub mod token;
pub mod verdict;

pub use token::CommandToken;
pub use verdict::{Verdict, AFFIRM_BYTE, DENY_BYTE};
