//! Configuration type definitions
//!
//! Timing budgets and the moisture threshold for one cover
//! installation. The defaults are the values the reference hardware
//! was commissioned with; the firmware uses them as-is.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cover controller configuration
///
/// All durations are milliseconds on the injected monotonic clock.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverConfig {
    /// ADC level separating wet from dry; samples *below* this are wet
    /// (the resistive sensor boards pull the channel down when wet)
    pub wet_threshold: u16,
    /// Hard upper bound on blocking for a companion reply
    pub reply_timeout_ms: u64,
    /// Hard upper bound on one homing run; expiry means a probable
    /// hardware fault (stuck panel, dead switch, stalled motor)
    pub homing_budget_ms: u64,
    /// How long the wake line is held high before a token is sent
    pub wake_settle_ms: u32,
    /// Hold time for each edge of a step pulse
    pub step_hold_ms: u32,
    /// Pause between empty RX polls while waiting for a reply
    pub rx_poll_ms: u32,
    /// Pause after each half-cycle of the main loop; bounds serial and
    /// wake-line traffic, not needed for correctness
    pub cycle_pause_ms: u32,
    /// Settle time after the startup calibration homing
    pub startup_settle_ms: u32,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            wet_threshold: 50_000,
            reply_timeout_ms: 30_000,
            homing_budget_ms: 37_000,
            wake_settle_ms: 2_000,
            step_hold_ms: 2,
            rx_poll_ms: 5,
            cycle_pause_ms: 10_000,
            startup_settle_ms: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_commissioned_values() {
        let config = CoverConfig::default();
        assert_eq!(config.wet_threshold, 50_000);
        assert_eq!(config.reply_timeout_ms, 30_000);
        assert_eq!(config.homing_budget_ms, 37_000);
        assert_eq!(config.wake_settle_ms, 2_000);
    }
}
