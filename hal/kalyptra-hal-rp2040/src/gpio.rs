//! GPIO adapters
//!
//! Newtypes over `embassy-rp` pins implementing the `kalyptra-hal`
//! traits (the orphan rule rules out direct impls).

use embassy_rp::gpio::{Input, Output};
use kalyptra_hal::{InputPin, OutputPin};

/// Push-pull output line (direction, step, wake, indicator)
pub struct OutPin<'d>(pub Output<'d>);

impl OutputPin for OutPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Limit-switch input; construct with `Pull::Down` so the idle level
/// is defined and `is_high` means "switch pressed"
pub struct SwitchPin<'d>(pub Input<'d>);

impl InputPin for SwitchPin<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
