//! Cover state machine
//!
//! Top-level orchestrator. Owns the single authoritative
//! [`CoverState`] and the hardware-facing components, and exposes the
//! two half-cycles the firmware loop alternates between: a dashboard
//! poll and an environmental evaluation.
//!
//! State reflects only the last *completed* homing run. A run that
//! ended in [`MotionOutcome::TimedOut`] is still treated as having
//! reached its position - the panels hold nothing critical and the
//! next transition request retries naturally - but the outcome stays
//! observable through [`CoverController::last_motion`] so the firmware
//! can log the suspected hardware fault.

use kalyptra_hal::{AdcChannel, Clock, InputPin, OutputPin, UartRx, UartTx};

use crate::dashboard;
use crate::motion::{MotionController, MotionOutcome, Travel};
use crate::transport::RemoteLink;
use crate::weather::{ClosedDecision, DecisionEngine, OpenDecision, SkySensors};

/// Authoritative position of the cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoverState {
    Open,
    Closed,
}

/// The cover controller: state plus every collaborator it drives
pub struct CoverController<U, O, I, A, C> {
    state: CoverState,
    link: RemoteLink<U, O, C>,
    motion: MotionController<O, I, C>,
    sensors: SkySensors<A>,
    engine: DecisionEngine,
    indicator: O,
}

impl<U, O, I, A, C> CoverController<U, O, I, A, C>
where
    U: UartTx + UartRx,
    O: OutputPin,
    I: InputPin,
    A: AdcChannel,
    C: Clock,
{
    /// Assemble the controller
    ///
    /// The reported state is meaningless until [`calibrate`] runs;
    /// the physical cover may be anywhere after a power cycle.
    ///
    /// [`calibrate`]: CoverController::calibrate
    pub fn new(
        link: RemoteLink<U, O, C>,
        motion: MotionController<O, I, C>,
        sensors: SkySensors<A>,
        engine: DecisionEngine,
        indicator: O,
    ) -> Self {
        Self {
            state: CoverState::Closed,
            link,
            motion,
            sensors,
            engine,
            indicator,
        }
    }

    pub fn state(&self) -> CoverState {
        self.state
    }

    /// Outcome of the most recent homing run, for fault logging
    pub fn last_motion(&self) -> Option<MotionOutcome> {
        self.motion.last_outcome()
    }

    /// Startup homing: drive to the open limits whatever the panels'
    /// physical position, zeroing the only position reference we have
    pub fn calibrate(&mut self) -> MotionOutcome {
        let outcome = self.motion.home(Travel::Open);
        self.state = CoverState::Open;
        self.sync_indicator();
        outcome
    }

    /// First half-cycle: reconcile a remote dashboard command
    pub fn dashboard_step(&mut self) -> CoverState {
        self.state = dashboard::poll(self.state, &mut self.link, &mut self.motion);
        self.sync_indicator();
        self.state
    }

    /// Second half-cycle: evaluate the moisture sensors
    pub fn weather_step(&mut self) -> CoverState {
        let samples = self.sensors.sample();
        match self.state {
            CoverState::Open => {
                if self.engine.while_open(samples) == OpenDecision::Close {
                    self.motion.home(Travel::Close);
                    self.state = CoverState::Closed;
                }
            }
            CoverState::Closed => {
                if self.engine.while_closed(samples, &mut self.link) == ClosedDecision::Open {
                    self.motion.home(Travel::Open);
                    self.state = CoverState::Open;
                }
            }
        }
        self.sync_indicator();
        self.state
    }

    /// Status LED mirrors the cover state: lit while open
    fn sync_indicator(&mut self) {
        self.indicator.set_level(self.state == CoverState::Open);
    }
}
