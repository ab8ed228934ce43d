//! Environmental decision engine
//!
//! Fuses the two analog moisture channels and, when they are
//! ambiguous, the companion's weather-API verdict into a cover
//! decision.
//!
//! The two directions are deliberately asymmetric. While closed,
//! missing real rain is expensive (the optics get wet), so an
//! ambiguous reading is escalated to the remote verdict before
//! concluding "no rain". While open, staying open on a damp night is
//! cheap, so closing requires unambiguous dryness of both channels and
//! never consults the remote.

use kalyptra_hal::{AdcChannel, Clock, OutputPin, UartRx, UartTx};
use kalyptra_protocol::CommandToken;

use crate::config::CoverConfig;
use crate::transport::RemoteLink;

/// One fresh reading of both channels
///
/// Lower sample means wetter: the sensor boards pull the ADC input
/// down as moisture bridges their traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorPair {
    pub rain: u16,
    pub dew: u16,
}

/// The two moisture channels, sampled together once per decision
pub struct SkySensors<A> {
    rain: A,
    dew: A,
}

impl<A: AdcChannel> SkySensors<A> {
    pub fn new(rain: A, dew: A) -> Self {
        Self { rain, dew }
    }

    /// Read both channels fresh; readings are never cached across
    /// cycles
    pub fn sample(&mut self) -> SensorPair {
        SensorPair {
            rain: self.rain.sample(),
            dew: self.dew.sample(),
        }
    }
}

/// Decision for a currently closed cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClosedDecision {
    Stay,
    Open,
}

/// Decision for a currently open cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OpenDecision {
    Stay,
    Close,
}

/// Threshold policy over a [`SensorPair`]
pub struct DecisionEngine {
    wet_threshold: u16,
}

impl DecisionEngine {
    pub fn new(config: &CoverConfig) -> Self {
        Self {
            wet_threshold: config.wet_threshold,
        }
    }

    fn is_wet(&self, sample: u16) -> bool {
        sample < self.wet_threshold
    }

    /// Decide whether a closed cover should open
    ///
    /// Rain wet with dew dry is unambiguous rain. Rain wet with dew
    /// wet could be dew alone coating both boards, so the weather API
    /// is consulted through `link`; anything short of an affirmative
    /// verdict (deny, garbled, timeout) keeps the cover closed this
    /// cycle. A dry rain channel never opens, whatever the dew
    /// channel says.
    pub fn while_closed<U, W, C>(
        &self,
        samples: SensorPair,
        link: &mut RemoteLink<U, W, C>,
    ) -> ClosedDecision
    where
        U: UartTx + UartRx,
        W: OutputPin,
        C: Clock,
    {
        if !self.is_wet(samples.rain) {
            return ClosedDecision::Stay;
        }

        if !self.is_wet(samples.dew) {
            link.notify(CommandToken::NotifyOpened);
            return ClosedDecision::Open;
        }

        if link.exchange(CommandToken::QueryRain).is_affirm() {
            link.notify(CommandToken::NotifyOpened);
            ClosedDecision::Open
        } else {
            ClosedDecision::Stay
        }
    }

    /// Decide whether an open cover should close
    pub fn while_open(&self, samples: SensorPair) -> OpenDecision {
        if !self.is_wet(samples.rain) && !self.is_wet(samples.dew) {
            OpenDecision::Close
        } else {
            OpenDecision::Stay
        }
    }
}
