//! Dashboard command arbiter
//!
//! The remote dashboard can ask for the cover to open or close
//! independently of the weather. One poll per main-loop cycle; the
//! verdict is reconciled with the current state so repeated or stale
//! commands are no-ops rather than repeated motions.

use kalyptra_hal::{Clock, InputPin, OutputPin, UartRx, UartTx};
use kalyptra_protocol::{CommandToken, Verdict};

use crate::cover::CoverState;
use crate::motion::{MotionController, Travel};
use crate::transport::RemoteLink;

/// Poll the dashboard and apply any state-changing command
///
/// Affirm opens a closed cover (with the opened-counter notify), Deny
/// closes an open cover; every other combination - including a command
/// matching the current state, a garbled reply, or a silent companion -
/// leaves the state untouched and moves nothing.
pub fn poll<U, W, O, I, C>(
    state: CoverState,
    link: &mut RemoteLink<U, W, C>,
    motion: &mut MotionController<O, I, C>,
) -> CoverState
where
    U: UartTx + UartRx,
    W: OutputPin,
    O: OutputPin,
    I: InputPin,
    C: Clock,
{
    match (link.exchange(CommandToken::QueryDashboard), state) {
        (Verdict::Affirm, CoverState::Closed) => {
            link.notify(CommandToken::NotifyOpened);
            motion.home(Travel::Open);
            CoverState::Open
        }
        (Verdict::Deny, CoverState::Open) => {
            motion.home(Travel::Close);
            CoverState::Closed
        }
        _ => state,
    }
}
