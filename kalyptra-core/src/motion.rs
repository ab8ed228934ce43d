//! Dual-axis homing motion controller
//!
//! The two panels are driven by mirrored steppers mounted on opposite
//! sides of the cover, so producing the same linear travel requires
//! opposite electrical direction levels - captured once in
//! [`Polarity`] instead of duplicated per-motor code paths.
//!
//! Motion is deliberately open loop: fixed-rate step pulses until the
//! travel's limit-switch pair asserts, with a wall-clock budget as the
//! only fault detection. There are no encoders, no step counting and
//! no velocity profile; the four limit switches are the only ground
//! truth for position.

use kalyptra_hal::{Clock, InputPin, OutputPin};

use crate::config::CoverConfig;

/// Direction of cover travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Travel {
    /// Drive the panels toward the open-limit switch pair
    Open,
    /// Drive the panels toward the close-limit switch pair
    Close,
}

/// How one homing run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionOutcome {
    /// Both terminal limit switches asserted
    Completed,
    /// The budget elapsed first - probable hardware fault (stuck
    /// panel, disconnected switch, stalled motor)
    TimedOut,
}

/// Electrical direction sense of one axis
///
/// The axes face each other, so for the same travel one spins
/// clockwise and the other counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Direction pin high means "open" travel
    Direct,
    /// Direction pin low means "open" travel
    Inverted,
}

/// One stepper actuator with its direction pin, step pin and the pair
/// of limit switches that terminate its travel
pub struct Axis<O, I> {
    dir: O,
    step: O,
    open_limit: I,
    close_limit: I,
    polarity: Polarity,
}

impl<O: OutputPin, I: InputPin> Axis<O, I> {
    pub fn new(dir: O, step: O, open_limit: I, close_limit: I, polarity: Polarity) -> Self {
        Self {
            dir,
            step,
            open_limit,
            close_limit,
            polarity,
        }
    }

    /// Point the direction pin for the requested travel
    fn point(&mut self, travel: Travel) {
        let open_level = matches!(self.polarity, Polarity::Direct);
        let level = match travel {
            Travel::Open => open_level,
            Travel::Close => !open_level,
        };
        self.dir.set_level(level);
    }

    /// Whether this axis has reached its terminal switch for `travel`
    fn at_limit(&self, travel: Travel) -> bool {
        match travel {
            Travel::Open => self.open_limit.is_high(),
            Travel::Close => self.close_limit.is_high(),
        }
    }

    /// Emit one step pulse: rising edge held, falling edge held
    fn pulse(&mut self, clock: &impl Clock, hold_ms: u32) {
        self.step.set_high();
        clock.sleep_ms(hold_ms);
        self.step.set_low();
        clock.sleep_ms(hold_ms);
    }
}

/// Drives both axes to a limit-switch-defined end position
pub struct MotionController<O, I, C> {
    axes: [Axis<O, I>; 2],
    clock: C,
    budget_ms: u64,
    step_hold_ms: u32,
    last_outcome: Option<MotionOutcome>,
}

impl<O, I, C> MotionController<O, I, C>
where
    O: OutputPin,
    I: InputPin,
    C: Clock,
{
    pub fn new(axes: [Axis<O, I>; 2], clock: C, config: &CoverConfig) -> Self {
        Self {
            axes,
            clock,
            budget_ms: config.homing_budget_ms,
            step_hold_ms: config.step_hold_ms,
            last_outcome: None,
        }
    }

    /// Home both axes in the given travel direction
    ///
    /// Each axis is gated by its own terminal switch: a faster or
    /// closer axis stops pulsing while the other keeps going. Returns
    /// once both switches assert, or once the budget elapses - the
    /// caller decides what a [`MotionOutcome::TimedOut`] means for the
    /// cover state.
    pub fn home(&mut self, travel: Travel) -> MotionOutcome {
        for axis in &mut self.axes {
            axis.point(travel);
        }

        let started = self.clock.now_ms();
        let outcome = loop {
            let mut moving = false;
            for axis in &mut self.axes {
                if !axis.at_limit(travel) {
                    axis.pulse(&self.clock, self.step_hold_ms);
                    moving = true;
                }
            }
            if !moving {
                break MotionOutcome::Completed;
            }
            if self.clock.elapsed_ms(started) > self.budget_ms {
                break MotionOutcome::TimedOut;
            }
        };

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Outcome of the most recent homing run, if any
    pub fn last_outcome(&self) -> Option<MotionOutcome> {
        self.last_outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClock, RisesAbove, SharedOutput};
    use core::cell::Cell;

    struct Rig {
        dir_levels: [Cell<bool>; 2],
        dir_rises: [Cell<u32>; 2],
        step_levels: [Cell<bool>; 2],
        pulses: [Cell<u32>; 2],
    }

    impl Rig {
        fn new() -> Self {
            Self {
                dir_levels: [Cell::new(false), Cell::new(false)],
                dir_rises: [Cell::new(0), Cell::new(0)],
                step_levels: [Cell::new(false), Cell::new(false)],
                pulses: [Cell::new(0), Cell::new(0)],
            }
        }

        /// Build the mirrored axis pair; each axis's switches assert
        /// once its own pulse counter reaches the given trip point.
        fn axes(
            &self,
            open_trip: [u32; 2],
            close_trip: [u32; 2],
        ) -> [Axis<SharedOutput<'_>, RisesAbove<'_>>; 2] {
            let make = |i: usize, polarity| {
                Axis::new(
                    SharedOutput::new(&self.dir_levels[i], &self.dir_rises[i]),
                    SharedOutput::new(&self.step_levels[i], &self.pulses[i]),
                    RisesAbove::new(&self.pulses[i], open_trip[i]),
                    RisesAbove::new(&self.pulses[i], close_trip[i]),
                    polarity,
                )
            };
            [make(0, Polarity::Direct), make(1, Polarity::Inverted)]
        }
    }

    const ALWAYS: u32 = 0;
    const NEVER: u32 = u32::MAX;

    #[test]
    fn preasserted_switches_complete_with_zero_pulses() {
        let rig = Rig::new();
        let clock = FakeClock::new();
        let mut motion = MotionController::new(
            rig.axes([ALWAYS, ALWAYS], [NEVER, NEVER]),
            &clock,
            &CoverConfig::default(),
        );

        assert_eq!(motion.home(Travel::Open), MotionOutcome::Completed);
        assert_eq!(rig.pulses[0].get(), 0);
        assert_eq!(rig.pulses[1].get(), 0);
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn axes_receive_opposite_direction_levels() {
        let rig = Rig::new();
        let clock = FakeClock::new();
        let mut motion = MotionController::new(
            rig.axes([ALWAYS, ALWAYS], [ALWAYS, ALWAYS]),
            &clock,
            &CoverConfig::default(),
        );

        motion.home(Travel::Open);
        assert!(rig.dir_levels[0].get());
        assert!(!rig.dir_levels[1].get());

        motion.home(Travel::Close);
        assert!(!rig.dir_levels[0].get());
        assert!(rig.dir_levels[1].get());
    }

    #[test]
    fn faster_axis_stops_pulsing_while_other_continues() {
        let rig = Rig::new();
        let clock = FakeClock::new();
        // Axis 0 trips after 3 pulses, axis 1 after 10
        let mut motion = MotionController::new(
            rig.axes([3, 10], [NEVER, NEVER]),
            &clock,
            &CoverConfig::default(),
        );

        assert_eq!(motion.home(Travel::Open), MotionOutcome::Completed);
        assert_eq!(rig.pulses[0].get(), 3);
        assert_eq!(rig.pulses[1].get(), 10);
    }

    #[test]
    fn stuck_switches_time_out_within_budget_epsilon() {
        let rig = Rig::new();
        let clock = FakeClock::new();
        let config = CoverConfig::default();
        let mut motion =
            MotionController::new(rig.axes([NEVER, NEVER], [NEVER, NEVER]), &clock, &config);

        assert_eq!(motion.home(Travel::Open), MotionOutcome::TimedOut);

        // Elapsed lands in [budget, budget + one iteration of two
        // pulses at 2x step_hold each)
        let iteration = u64::from(4 * config.step_hold_ms);
        assert!(clock.now_ms() > config.homing_budget_ms);
        assert!(clock.now_ms() <= config.homing_budget_ms + iteration);

        // A positive, budget-bounded number of pulses went out
        let per_pulse = u64::from(2 * config.step_hold_ms);
        let bound = (config.homing_budget_ms / per_pulse + 1) as u32;
        assert!(rig.pulses[0].get() > 0);
        assert!(rig.pulses[0].get() <= bound);
        assert_eq!(rig.pulses[0].get(), rig.pulses[1].get());
    }

    #[test]
    fn close_travel_gates_on_close_switch_pair() {
        let rig = Rig::new();
        let clock = FakeClock::new();
        // Open switches permanently asserted must not satisfy a close
        let mut motion = MotionController::new(
            rig.axes([ALWAYS, ALWAYS], [2, 5]),
            &clock,
            &CoverConfig::default(),
        );

        assert_eq!(motion.home(Travel::Close), MotionOutcome::Completed);
        assert_eq!(rig.pulses[0].get(), 2);
        assert_eq!(rig.pulses[1].get(), 5);
    }

    #[test]
    fn last_outcome_tracks_most_recent_run() {
        let rig = Rig::new();
        let clock = FakeClock::new();
        let mut motion = MotionController::new(
            rig.axes([ALWAYS, ALWAYS], [NEVER, NEVER]),
            &clock,
            &CoverConfig::default(),
        );

        assert_eq!(motion.last_outcome(), None);
        motion.home(Travel::Open);
        assert_eq!(motion.last_outcome(), Some(MotionOutcome::Completed));
        motion.home(Travel::Close);
        assert_eq!(motion.last_outcome(), Some(MotionOutcome::TimedOut));
    }
}
