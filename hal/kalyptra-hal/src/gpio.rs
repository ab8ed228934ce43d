//! GPIO pin abstractions
//!
//! Traits for the digital lines the cover controller drives and reads:
//! stepper direction/step outputs, the companion wake line, the status
//! indicator, and the four limit-switch inputs.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check the level the pin is currently driven to
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Limit switches are wired active-high with a pull-down on the input,
/// so `is_high` means "switch pressed" throughout the cover logic.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: OutputPin> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}

impl<T: InputPin> InputPin for &T {
    fn is_high(&self) -> bool {
        T::is_high(self)
    }
}

impl<T: InputPin> InputPin for &mut T {
    fn is_high(&self) -> bool {
        T::is_high(self)
    }
}
